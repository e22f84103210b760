use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// # Examples
///
/// ```
/// use twine_bioprocess::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Volume, volume::cubic_meter};
///
/// let vessel = StrictlyPositive::new(Volume::new::<cubic_meter>(100.0)).unwrap();
/// assert_eq!(vessel.as_ref().get::<cubic_meter>(), 100.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::kilopascal};

    #[test]
    fn vacuum_pressures() {
        assert!(StrictlyPositive::new(Pressure::new::<kilopascal>(20.0)).is_ok());
        assert!(matches!(
            StrictlyPositive::new(Pressure::new::<kilopascal>(0.0)),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(Pressure::new::<kilopascal>(-5.0)),
            Err(ConstraintError::Negative)
        ));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert!(StrictlyPositive::new(f64::NAN).is_err());
    }
}
