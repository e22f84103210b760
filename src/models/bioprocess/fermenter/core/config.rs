use uom::si::{
    f64::{MassDensity, ThermodynamicTemperature, Time, Volume},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::degree_celsius,
    time::hour,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    process::{BalanceTolerance, ProcessError},
};

/// Operating point of the fermenter.
///
/// The broth is held at `temperature`. Residence time only sizes the vessels;
/// it has no effect on the mass balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FermenterConditions {
    temperature: ThermodynamicTemperature,
    residence_time: Constrained<Time, NonNegative>,
}

impl FermenterConditions {
    /// Creates fermenter operating conditions.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if the temperature
    /// is not finite and positive, or if the residence time is negative or
    /// not finite.
    pub fn new(
        temperature: ThermodynamicTemperature,
        residence_time: Time,
    ) -> Result<Self, ProcessError> {
        let kelvin = temperature.value;
        if !kelvin.is_finite() || kelvin <= 0.0 {
            return Err(ProcessError::invalid_condition(format!(
                "fermenter temperature must be finite and positive, got {temperature:?}"
            )));
        }

        if !residence_time.value.is_finite() {
            return Err(ProcessError::invalid_condition(format!(
                "residence time must be finite, got {residence_time:?}"
            )));
        }
        let residence_time = NonNegative::new(residence_time).map_err(|err| {
            ProcessError::invalid_condition(format!("residence time {residence_time:?}: {err}"))
        })?;

        Ok(Self {
            temperature,
            residence_time,
        })
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn residence_time(&self) -> Time {
        self.residence_time.into_inner()
    }
}

impl Default for FermenterConditions {
    /// 37 °C and a 48 h batch-equivalent residence time.
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(37.0),
            residence_time: Constrained::new_unchecked(Time::new::<hour>(48.0)),
        }
    }
}

/// Parameters for sizing fermentation vessels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FermenterSizing {
    /// Working volume of a single vessel.
    pub vessel_volume: Constrained<Volume, StrictlyPositive>,

    /// Broth density used to turn mass flow into volumetric flow.
    pub broth_density: Constrained<MassDensity, StrictlyPositive>,
}

impl FermenterSizing {
    /// Checks that every sizing parameter is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] naming the first
    /// non-finite parameter.
    pub fn validate(&self) -> Result<(), ProcessError> {
        if !self.vessel_volume.into_inner().value.is_finite() {
            return Err(ProcessError::invalid_condition(format!(
                "vessel volume must be finite, got {:?}",
                self.vessel_volume.into_inner()
            )));
        }
        if !self.broth_density.into_inner().value.is_finite() {
            return Err(ProcessError::invalid_condition(format!(
                "broth density must be finite, got {:?}",
                self.broth_density.into_inner()
            )));
        }
        Ok(())
    }
}

impl Default for FermenterSizing {
    fn default() -> Self {
        Self {
            vessel_volume: Constrained::new_unchecked(Volume::new::<cubic_meter>(100.0)),
            broth_density: Constrained::new_unchecked(MassDensity::new::<kilogram_per_cubic_meter>(
                1000.0,
            )),
        }
    }
}

/// Numerical and sizing configuration for the fermenter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FermenterConfig {
    /// Closure tolerance for the outlet mass and element balances.
    pub tolerance: BalanceTolerance,

    pub sizing: FermenterSizing,
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn accepts_typical_conditions() {
        let conditions = FermenterConditions::new(
            ThermodynamicTemperature::new::<degree_celsius>(50.0),
            Time::new::<hour>(36.0),
        )
        .unwrap();
        assert_eq!(conditions.residence_time(), Time::new::<hour>(36.0));
    }

    #[test]
    fn rejects_bad_conditions() {
        let zero_kelvin = FermenterConditions::new(
            ThermodynamicTemperature::new::<kelvin>(0.0),
            Time::new::<hour>(48.0),
        );
        assert!(matches!(
            zero_kelvin,
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));

        let endless = FermenterConditions::new(
            ThermodynamicTemperature::new::<degree_celsius>(37.0),
            Time::new::<hour>(f64::INFINITY),
        );
        assert!(matches!(
            endless,
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));

        let negative_time = FermenterConditions::new(
            ThermodynamicTemperature::new::<degree_celsius>(37.0),
            Time::new::<hour>(-1.0),
        );
        assert!(matches!(
            negative_time,
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));
    }

    #[test]
    fn sizing_rejects_infinite_parameters() {
        assert!(FermenterSizing::default().validate().is_ok());

        let mut sizing = FermenterSizing::default();
        sizing.vessel_volume =
            StrictlyPositive::new(Volume::new::<cubic_meter>(f64::INFINITY)).unwrap();
        assert!(matches!(
            sizing.validate(),
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));

        let mut sizing = FermenterSizing::default();
        sizing.broth_density =
            StrictlyPositive::new(MassDensity::new::<kilogram_per_cubic_meter>(f64::INFINITY))
                .unwrap();
        assert!(matches!(
            sizing.validate(),
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));
    }

    #[test]
    fn defaults_are_valid() {
        let defaults = FermenterConditions::default();
        let rebuilt =
            FermenterConditions::new(defaults.temperature(), defaults.residence_time()).unwrap();
        assert_eq!(rebuilt, defaults);
    }
}
