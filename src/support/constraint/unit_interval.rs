use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used with the unit interval markers.
///
/// Implementations must ensure `zero() < one()` under the type's `PartialOrd`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Compares `value` against both bounds, mapping `NaN` to an error.
fn bounds<T: UnitBounds>(value: &T) -> Result<(Ordering, Ordering), ConstraintError> {
    match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
        (Some(lower), Some(upper)) => Ok((lower, upper)),
        _ => Err(ConstraintError::NotANumber),
    }
}

/// Marker type enforcing the closed unit interval `0 ≤ x ≤ 1`.
///
/// This is the domain of a conversion fraction: both endpoints are valid
/// (no reaction, complete consumption).
///
/// # Examples
///
/// ```
/// use twine_bioprocess::support::constraint::UnitInterval;
///
/// assert!(UnitInterval::new(0.0).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(1.2).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (Ordering::Less, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker type enforcing the open unit interval `0 < x < 1`.
///
/// Used for target mass fractions: a concentrate of zero or of pure solute
/// does not describe a liquid outlet.
///
/// # Examples
///
/// ```
/// use twine_bioprocess::support::constraint::UnitIntervalOpen;
///
/// assert!(UnitIntervalOpen::new(0.5).is_ok());
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (Ordering::Less | Ordering::Equal, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater | Ordering::Equal) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker type enforcing the upper-open unit interval `0 ≤ x < 1`.
///
/// This is the domain of an evaporator's water-removal fraction: removing
/// nothing is allowed, removing everything would leave no liquid outlet.
///
/// # Examples
///
/// ```
/// use twine_bioprocess::support::constraint::UnitIntervalUpperOpen;
///
/// assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
/// assert!(UnitIntervalUpperOpen::new(0.7).is_ok());
/// assert!(UnitIntervalUpperOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl UnitIntervalUpperOpen {
    /// Constructs `Constrained<T, UnitIntervalUpperOpen>` if `0 ≤ value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalUpperOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalUpperOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (Ordering::Less, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater | Ordering::Equal) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
