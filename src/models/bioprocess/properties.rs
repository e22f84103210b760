//! Property lookups shared by the bioprocess units.

use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermodynamicTemperature},
        molar_mass::kilogram_per_mole,
    },
};

use crate::support::{
    process::{ProcessError, Species, Stream},
    thermo::{
        PropertyError,
        capability::{HasHeatCapacity, HasMolarMass},
    },
    units::TemperatureDifference,
};

/// Molar mass of `species` in kg/mol.
///
/// # Errors
///
/// Returns [`ProcessError::Property`] if the provider fails or reports a
/// molar mass that is not finite and positive.
pub(super) fn molar_mass(
    props: &impl HasMolarMass,
    species: Species,
) -> Result<f64, ProcessError> {
    let context = || format!("molar mass of {species}");

    let kg_per_mol = props
        .molar_mass(species)
        .map_err(|err| ProcessError::property(context(), err))?
        .get::<kilogram_per_mole>();

    if kg_per_mol.is_finite() && kg_per_mol > 0.0 {
        Ok(kg_per_mol)
    } else {
        Err(ProcessError::property(
            context(),
            PropertyError::Calculation {
                context: format!("expected a positive molar mass, got {kg_per_mol} kg/mol"),
            },
        ))
    }
}

/// Heat to bring every species in `inlet` to `target` temperature.
///
/// Positive when the inlet is colder than `target`.
///
/// # Errors
///
/// Returns [`ProcessError::Property`] if a heat capacity is unavailable.
pub(super) fn sensible_heat(
    inlet: &Stream,
    target: ThermodynamicTemperature,
    props: &impl HasHeatCapacity,
) -> Result<Power, ProcessError> {
    let delta_t = target.minus(inlet.temperature);

    inlet.flows().try_fold(Power::ZERO, |total, (species, mass_rate)| {
        let cp = props
            .heat_capacity(species)
            .map_err(|err| ProcessError::property(format!("heat capacity of {species}"), err))?;
        Ok(total + mass_rate * (cp * delta_t))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::MolarMass, molar_mass::gram_per_mole, power::kilowatt};

    use crate::models::bioprocess::test_support::{TestProperties, celsius, kg_per_h, liquid_at};

    #[test]
    fn sensible_heat_sign_follows_temperature() {
        let props = TestProperties::new();
        let feed = liquid_at(30.0).with_mass_flow(Species::Water, kg_per_h(3600.0));

        // 1 kg/s × 4 kJ/kg·K × 7 K
        let heating = sensible_heat(&feed, celsius(37.0), &props).unwrap();
        assert_relative_eq!(heating.get::<kilowatt>(), 28.0, epsilon = 1e-9);

        let cooling = sensible_heat(&feed, celsius(25.0), &props).unwrap();
        assert_relative_eq!(cooling.get::<kilowatt>(), -20.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_physical_molar_mass() {
        let props = TestProperties::new()
            .with_molar_mass(Species::Water, MolarMass::new::<gram_per_mole>(0.0));
        assert!(matches!(
            molar_mass(&props, Species::Water),
            Err(ProcessError::Property { .. })
        ));
        assert_relative_eq!(
            molar_mass(&props, Species::Glucose).unwrap(),
            0.180_156,
            epsilon = 1e-12
        );
    }
}
