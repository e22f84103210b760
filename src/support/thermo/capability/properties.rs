use uom::si::f64::{
    MolarEnergy, MolarMass, Pressure, SpecificHeatCapacity, ThermodynamicTemperature,
};

use crate::support::{
    process::{Reaction, Species},
    thermo::PropertyError,
};

pub trait HasMolarMass {
    /// Returns the molar mass of `species`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the molar mass is not known.
    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError>;
}

pub trait HasHeatCapacity {
    /// Returns the specific heat capacity of `species` in the liquid broth.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be calculated.
    fn heat_capacity(&self, species: Species) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasHeatOfVaporization {
    /// Returns the molar heat of vaporization of `species` at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the species does not vaporize or the state
    /// is outside the provider's valid domain.
    fn heat_of_vaporization(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MolarEnergy, PropertyError>;
}

pub trait HasHeatOfReaction {
    /// Returns the enthalpy change of `reaction` per mole of its reference
    /// reactant consumed.
    ///
    /// Negative values are exothermic.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the heat of reaction cannot be calculated.
    fn heat_of_reaction(&self, reaction: &Reaction) -> Result<MolarEnergy, PropertyError>;
}
