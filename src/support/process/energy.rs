use uom::{ConstZero, si::f64::Power};

use crate::support::{constraint::ConstraintError, thermo::HeatFlow};

/// Heat duty of a unit and the contributions it was built from.
///
/// Contributions are signed: positive values are heat that must be added to
/// hold the unit at its operating temperature, negative values are heat that
/// must be removed. The duty is their sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyResult {
    /// Net heat flow across the unit boundary.
    pub duty: HeatFlow,

    /// Heat to bring the inlet from its temperature to the operating temperature.
    pub sensible: Power,

    /// Heat of vaporization of any material leaving as vapor.
    pub latent: Power,

    /// Enthalpy change of reaction, negative when exothermic.
    pub reaction: Power,
}

impl EnergyResult {
    /// An evaluation that exchanges no heat.
    #[must_use]
    pub fn none() -> Self {
        Self {
            duty: HeatFlow::None,
            sensible: Power::ZERO,
            latent: Power::ZERO,
            reaction: Power::ZERO,
        }
    }

    /// Builds a result whose duty is `sensible + latent + reaction`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] if the sum is not a number.
    pub fn from_parts(
        sensible: Power,
        latent: Power,
        reaction: Power,
    ) -> Result<Self, ConstraintError> {
        let duty = HeatFlow::from_signed(sensible + latent + reaction)?;
        Ok(Self {
            duty,
            sensible,
            latent,
            reaction,
        })
    }

    /// Signed duty, positive when heat is added.
    #[must_use]
    pub fn signed_duty(&self) -> Power {
        self.duty.signed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    fn kw(value: f64) -> Power {
        Power::new::<kilowatt>(value)
    }

    #[test]
    fn exothermic_reaction_dominates() {
        let result = EnergyResult::from_parts(kw(12.0), Power::ZERO, kw(-80.0)).unwrap();
        assert!(matches!(result.duty, HeatFlow::Out(_)));
        assert_relative_eq!(result.signed_duty().get::<kilowatt>(), -68.0, epsilon = 1e-9);
    }

    #[test]
    fn evaporation_needs_heat() {
        let result = EnergyResult::from_parts(kw(50.0), kw(370.0), Power::ZERO).unwrap();
        assert!(matches!(result.duty, HeatFlow::In(_)));
        assert_relative_eq!(result.signed_duty().get::<kilowatt>(), 420.0, epsilon = 1e-9);
    }

    #[test]
    fn none_is_all_zero() {
        let result = EnergyResult::none();
        assert_eq!(result.duty, HeatFlow::None);
        assert_eq!(result.signed_duty(), Power::ZERO);
        assert_eq!(result.sensible, Power::ZERO);
    }

    #[test]
    fn nan_contribution_is_rejected() {
        let result = EnergyResult::from_parts(kw(f64::NAN), Power::ZERO, Power::ZERO);
        assert!(matches!(result, Err(ConstraintError::NotANumber)));
    }
}
