use std::cmp::Ordering;

use uom::{ConstZero, si::f64::Power};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Heat exchanged between a unit and its utilities.
///
/// Direction is relative to the unit:
///
/// - `In`: heating duty, e.g. steam to an evaporator.
/// - `Out`: cooling duty, e.g. jacket water removing heat of fermentation.
/// - `None`: the unit is thermally neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatFlow {
    In(Constrained<Power, StrictlyPositive>),
    Out(Constrained<Power, StrictlyPositive>),
    None,
}

impl HeatFlow {
    /// Creates a heating duty.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn incoming(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::In(Constrained::new(heat_rate)?))
    }

    /// Creates a cooling duty of magnitude `heat_rate`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn outgoing(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Out(Constrained::new(heat_rate)?))
    }

    /// Classifies a signed heat rate, positive meaning heat added to the unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] if the value is NaN.
    pub fn from_signed(heat_rate: Power) -> Result<Self, ConstraintError> {
        match heat_rate.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => Self::incoming(heat_rate),
            Some(Ordering::Less) => Self::outgoing(-heat_rate),
            Some(Ordering::Equal) => Ok(Self::None),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Returns the signed heat rate, positive for heating.
    #[must_use]
    pub fn signed(&self) -> Power {
        match self {
            Self::In(heat_rate) => heat_rate.into_inner(),
            Self::Out(heat_rate) => -heat_rate.into_inner(),
            Self::None => Power::ZERO,
        }
    }

    /// Returns the heating requirement, or zero for a cooling or neutral duty.
    #[must_use]
    pub fn heating(&self) -> Power {
        match self {
            Self::In(heat_rate) => heat_rate.into_inner(),
            Self::Out(_) | Self::None => Power::ZERO,
        }
    }
}
