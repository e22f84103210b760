use uom::si::{
    f64::{
        HeatTransfer, MassDensity, Pressure, TemperatureInterval, ThermodynamicTemperature, Time,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::hour,
};

use crate::support::{
    constraint::{
        Constrained, NonNegative, StrictlyPositive, UnitIntervalOpen, UnitIntervalUpperOpen,
    },
    process::{BalanceTolerance, ProcessError, Species},
};

/// Vacuum operating point of the evaporator.
///
/// Both outlets leave at this temperature and pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporatorConditions {
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

impl EvaporatorConditions {
    /// Creates evaporator operating conditions.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if the temperature
    /// or pressure is not finite and positive.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, ProcessError> {
        if !temperature.value.is_finite() || temperature.value <= 0.0 {
            return Err(ProcessError::invalid_condition(format!(
                "evaporator temperature must be finite and positive, got {temperature:?}"
            )));
        }
        if !pressure.value.is_finite() || pressure.value <= 0.0 {
            return Err(ProcessError::invalid_condition(format!(
                "evaporator pressure must be finite and positive, got {pressure:?}"
            )));
        }

        Ok(Self {
            temperature,
            pressure,
        })
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

impl Default for EvaporatorConditions {
    /// 80 °C at 20 kPa.
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(80.0),
            pressure: Pressure::new::<kilopascal>(20.0),
        }
    }
}

/// How much water the evaporator removes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaporationTarget {
    /// Remove this fraction of the inlet water.
    ///
    /// Removing all of it would leave no liquid outlet, so one is excluded.
    RemovalFraction(Constrained<f64, UnitIntervalUpperOpen>),

    /// Remove enough water to bring `species` to this mass fraction of the
    /// concentrate.
    FinalConcentration {
        species: Species,
        mass_fraction: Constrained<f64, UnitIntervalOpen>,
    },
}

impl EvaporationTarget {
    /// Targets a water removal fraction in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if `fraction` is
    /// outside `[0, 1)` or NaN.
    pub fn removal_fraction(fraction: f64) -> Result<Self, ProcessError> {
        UnitIntervalUpperOpen::new(fraction)
            .map(Self::RemovalFraction)
            .map_err(|err| {
                ProcessError::invalid_condition(format!("removal fraction {fraction}: {err}"))
            })
    }

    /// Targets a final mass fraction of a non-volatile `species`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if `mass_fraction`
    /// is outside `(0, 1)` or `species` is water.
    pub fn final_concentration(
        species: Species,
        mass_fraction: f64,
    ) -> Result<Self, ProcessError> {
        if species == Species::Water {
            return Err(ProcessError::invalid_condition(
                "concentration target must be a non-volatile species, not water",
            ));
        }
        let mass_fraction = UnitIntervalOpen::new(mass_fraction).map_err(|err| {
            ProcessError::invalid_condition(format!(
                "target mass fraction {mass_fraction} of {species}: {err}"
            ))
        })?;

        Ok(Self::FinalConcentration {
            species,
            mass_fraction,
        })
    }
}

impl Default for EvaporationTarget {
    /// Removes 70% of the inlet water.
    fn default() -> Self {
        Self::RemovalFraction(Constrained::new_unchecked(0.7))
    }
}

/// Parameters for sizing the evaporator body and heating surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporatorSizing {
    /// Liquid holdup time in the evaporator body.
    pub holdup_time: Constrained<Time, NonNegative>,

    /// Density used to turn inlet mass flow into volumetric flow.
    pub liquid_density: Constrained<MassDensity, StrictlyPositive>,

    /// Overall heat transfer coefficient of the heating surface.
    pub overall_u: Constrained<HeatTransfer, StrictlyPositive>,

    /// Steam-side to boiling-side temperature difference.
    ///
    /// Must be positive.
    pub driving_force: TemperatureInterval,
}

impl EvaporatorSizing {
    /// Checks that every sizing parameter is finite and that the driving
    /// force is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<(), ProcessError> {
        let finite = [
            ("holdup time", self.holdup_time.into_inner().value),
            ("liquid density", self.liquid_density.into_inner().value),
            ("overall heat transfer coefficient", self.overall_u.into_inner().value),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ProcessError::invalid_condition(format!(
                "evaporator {name} must be finite, got {value} (SI)"
            )));
        }

        let driving_force = self.driving_force;
        if !driving_force.value.is_finite() || driving_force.value <= 0.0 {
            return Err(ProcessError::invalid_condition(format!(
                "evaporator driving force must be finite and positive, got {driving_force:?}"
            )));
        }

        Ok(())
    }
}

impl Default for EvaporatorSizing {
    fn default() -> Self {
        Self {
            holdup_time: Constrained::new_unchecked(Time::new::<hour>(2.0)),
            liquid_density: Constrained::new_unchecked(
                MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            ),
            overall_u: Constrained::new_unchecked(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0),
            ),
            driving_force: TemperatureInterval::new::<delta_kelvin>(30.0),
        }
    }
}

/// Numerical and sizing configuration for the evaporator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvaporatorConfig {
    /// Closure tolerance for the outlet mass and element balances.
    pub tolerance: BalanceTolerance,

    pub sizing: EvaporatorSizing,
}
