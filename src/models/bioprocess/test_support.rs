use uom::si::{
    f64::{
        MassRate, MolarEnergy, MolarMass, Pressure, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    mass_rate::kilogram_per_second,
    molar_energy::kilojoule_per_mole,
    pressure::kilopascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    process::{Reaction, Species, Stream},
    thermo::{
        PropertyError,
        capability::{HasHeatCapacity, HasHeatOfReaction, HasHeatOfVaporization, HasMolarMass},
    },
};

/// Property provider with round, easily hand-checked values.
///
/// Molar masses follow the species formulas unless overridden. Every species
/// has the same heat capacity, every reaction the same heat of reaction, and
/// only water vaporizes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TestProperties {
    cp: SpecificHeatCapacity,
    dh_vap: MolarEnergy,
    dh_rxn: MolarEnergy,
    molar_mass_override: Option<(Species, MolarMass)>,
}

impl TestProperties {
    pub(crate) fn new() -> Self {
        Self {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4000.0),
            dh_vap: MolarEnergy::new::<kilojoule_per_mole>(40.0),
            dh_rxn: MolarEnergy::new::<kilojoule_per_mole>(-100.0),
            molar_mass_override: None,
        }
    }

    /// Reports a molar mass for `species` that disagrees with its formula.
    pub(crate) fn with_molar_mass(self, species: Species, molar_mass: MolarMass) -> Self {
        Self {
            molar_mass_override: Some((species, molar_mass)),
            ..self
        }
    }

    pub(crate) fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    pub(crate) fn dh_vap(&self) -> MolarEnergy {
        self.dh_vap
    }

    pub(crate) fn dh_rxn(&self) -> MolarEnergy {
        self.dh_rxn
    }
}

impl HasMolarMass for TestProperties {
    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError> {
        match self.molar_mass_override {
            Some((overridden, molar_mass)) if overridden == species => Ok(molar_mass),
            _ => Ok(species.formula().molar_mass()),
        }
    }
}

impl HasHeatCapacity for TestProperties {
    fn heat_capacity(&self, _species: Species) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cp)
    }
}

impl HasHeatOfVaporization for TestProperties {
    fn heat_of_vaporization(
        &self,
        species: Species,
        _temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<MolarEnergy, PropertyError> {
        if species == Species::Water {
            Ok(self.dh_vap)
        } else {
            Err(PropertyError::Undefined {
                context: format!("{species} is not volatile"),
            })
        }
    }
}

impl HasHeatOfReaction for TestProperties {
    fn heat_of_reaction(&self, _reaction: &Reaction) -> Result<MolarEnergy, PropertyError> {
        Ok(self.dh_rxn)
    }
}

/// Provider whose heat-of-reaction lookup always fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoReactionData;

impl HasMolarMass for NoReactionData {
    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError> {
        Ok(species.formula().molar_mass())
    }
}

impl HasHeatCapacity for NoReactionData {
    fn heat_capacity(&self, species: Species) -> Result<SpecificHeatCapacity, PropertyError> {
        TestProperties::new().heat_capacity(species)
    }
}

impl HasHeatOfVaporization for NoReactionData {
    fn heat_of_vaporization(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MolarEnergy, PropertyError> {
        TestProperties::new().heat_of_vaporization(species, temperature, pressure)
    }
}

impl HasHeatOfReaction for NoReactionData {
    fn heat_of_reaction(&self, reaction: &Reaction) -> Result<MolarEnergy, PropertyError> {
        Err(PropertyError::Undefined {
            context: format!("no data for {reaction}"),
        })
    }
}

/// Mass rate from kg/h, the unit plant flows are usually quoted in.
pub(crate) fn kg_per_h(value: f64) -> MassRate {
    MassRate::new::<kilogram_per_second>(value / 3600.0)
}

/// Mass rate in kg/h.
pub(crate) fn in_kg_per_h(mass_rate: MassRate) -> f64 {
    mass_rate.get::<kilogram_per_second>() * 3600.0
}

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(crate) fn kpa(value: f64) -> Pressure {
    Pressure::new::<kilopascal>(value)
}

/// An empty liquid stream at the given temperature and atmospheric pressure.
pub(crate) fn liquid_at(temperature_c: f64) -> Stream {
    Stream::liquid(celsius(temperature_c), kpa(101.325))
}
