use uom::si::{
    f64::{MolarEnergy, MolarMass, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_energy::kilojoule_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    process::{Reaction, Species},
    thermo::{
        PropertyError,
        capability::{HasHeatCapacity, HasHeatOfReaction, HasHeatOfVaporization, HasMolarMass},
    },
};

/// Built-in property tables for the lactic acid species set.
///
/// - Molar masses follow each species' [`Formula`](crate::support::process::Formula).
/// - Heat capacities are constant liquid-broth values.
/// - Heats of reaction come from standard heats of formation at 25 °C.
/// - Only water has a heat of vaporization. It uses the Watson correlation,
///   which depends on temperature only; pressure is checked for validity but
///   otherwise unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardProperties;

/// Anchor point and critical temperature for a Watson correlation.
struct Watson {
    /// Heat of vaporization at `t_ref`, kJ/mol.
    dh_ref: f64,
    /// Reference temperature, K.
    t_ref: f64,
    /// Critical temperature, K.
    t_crit: f64,
}

const WATSON_EXPONENT: f64 = 0.38;

impl Watson {
    fn for_species(species: Species) -> Option<Self> {
        match species {
            Species::Water => Some(Self {
                dh_ref: 40.66,
                t_ref: 373.15,
                t_crit: 647.096,
            }),
            _ => None,
        }
    }

    fn evaluate(&self, t: f64) -> f64 {
        self.dh_ref * ((self.t_crit - t) / (self.t_crit - self.t_ref)).powf(WATSON_EXPONENT)
    }
}

impl StandardProperties {
    /// Standard heat of formation in kJ/mol.
    ///
    /// Biomass is per C-mole.
    fn heat_of_formation(species: Species) -> f64 {
        match species {
            Species::Water => -285.83,
            Species::Glucose => -1273.3,
            Species::LacticAcid => -694.1,
            Species::Ethanol => -277.7,
            Species::Biomass => -91.0,
            Species::CarbonDioxide => -393.5,
        }
    }
}

impl HasMolarMass for StandardProperties {
    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError> {
        Ok(species.formula().molar_mass())
    }
}

impl HasHeatCapacity for StandardProperties {
    fn heat_capacity(&self, species: Species) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = match species {
            Species::Water => 4184.0,
            Species::Glucose => 1244.0,
            Species::LacticAcid => 2340.0,
            Species::Ethanol => 2440.0,
            Species::Biomass => 1500.0,
            Species::CarbonDioxide => 844.0,
        };
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl HasHeatOfVaporization for StandardProperties {
    fn heat_of_vaporization(
        &self,
        species: Species,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MolarEnergy, PropertyError> {
        let Some(watson) = Watson::for_species(species) else {
            return Err(PropertyError::Undefined {
                context: format!("{species} is not volatile"),
            });
        };

        let t = temperature.get::<kelvin>();
        if !t.is_finite() || t <= 0.0 || t >= watson.t_crit {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "{species} heat of vaporization needs 0 K < T < {} K, got {t} K",
                    watson.t_crit
                ),
            });
        }
        if !pressure.value.is_finite() || pressure.value <= 0.0 {
            return Err(PropertyError::OutOfDomain {
                context: format!("pressure must be positive, got {pressure:?}"),
            });
        }

        Ok(MolarEnergy::new::<kilojoule_per_mole>(watson.evaluate(t)))
    }
}

impl HasHeatOfReaction for StandardProperties {
    fn heat_of_reaction(&self, reaction: &Reaction) -> Result<MolarEnergy, PropertyError> {
        let dh: f64 = reaction
            .per_mole_reference()
            .map(|(species, nu)| nu * Self::heat_of_formation(species))
            .sum();
        Ok(MolarEnergy::new::<kilojoule_per_mole>(dh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        molar_mass::gram_per_mole, pressure::kilopascal,
        thermodynamic_temperature::degree_celsius,
    };

    fn kpa(value: f64) -> Pressure {
        Pressure::new::<kilopascal>(value)
    }

    #[test]
    fn molar_mass_matches_formula() {
        let mw = StandardProperties
            .molar_mass(Species::LacticAcid)
            .unwrap()
            .get::<gram_per_mole>();
        assert_relative_eq!(mw, 90.078, epsilon = 1e-9);
    }

    #[test]
    fn water_heat_of_vaporization() {
        let props = StandardProperties;

        let at_boiling = props
            .heat_of_vaporization(
                Species::Water,
                ThermodynamicTemperature::new::<kelvin>(373.15),
                kpa(101.325),
            )
            .unwrap();
        assert_relative_eq!(at_boiling.get::<kilojoule_per_mole>(), 40.66, epsilon = 1e-12);

        let under_vacuum = props
            .heat_of_vaporization(
                Species::Water,
                ThermodynamicTemperature::new::<degree_celsius>(80.0),
                kpa(20.0),
            )
            .unwrap();
        assert_relative_eq!(
            under_vacuum.get::<kilojoule_per_mole>(),
            41.7635,
            max_relative = 1e-4
        );
    }

    #[test]
    fn vaporization_domain_errors() {
        let props = StandardProperties;
        let t = ThermodynamicTemperature::new::<degree_celsius>(80.0);

        assert!(matches!(
            props.heat_of_vaporization(Species::Glucose, t, kpa(20.0)),
            Err(PropertyError::Undefined { .. })
        ));
        assert!(matches!(
            props.heat_of_vaporization(Species::Ethanol, t, kpa(20.0)),
            Err(PropertyError::Undefined { .. })
        ));
        assert!(matches!(
            props.heat_of_vaporization(
                Species::Water,
                ThermodynamicTemperature::new::<kelvin>(700.0),
                kpa(20.0)
            ),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            props.heat_of_vaporization(Species::Water, t, kpa(0.0)),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn heats_of_reaction() {
        let props = StandardProperties;
        let dh = |r: Reaction| props.heat_of_reaction(&r).unwrap().get::<kilojoule_per_mole>();

        assert_relative_eq!(dh(Reaction::homolactic()), -114.9, epsilon = 1e-9);
        assert_relative_eq!(dh(Reaction::alcoholic()), -69.1, epsilon = 1e-9);
        assert_relative_eq!(dh(Reaction::biomass_growth()), -3.945, epsilon = 1e-9);
    }
}
