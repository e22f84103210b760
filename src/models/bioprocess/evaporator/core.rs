//! Single-effect vacuum evaporation.
//!
//! Only water is volatile. The inlet is heated to the operating temperature
//! and the requested share of its water is boiled off; every other species
//! stays in the concentrate.

mod config;
mod results;

pub use config::{EvaporationTarget, EvaporatorConditions, EvaporatorConfig, EvaporatorSizing};
pub use results::{EvaporatorDesign, EvaporatorResults};

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{Area, MassRate, Power, Volume},
        mass_rate::kilogram_per_second,
        molar_energy::joule_per_mole,
        power::{kilowatt, watt},
    },
};

use crate::{
    models::bioprocess::properties::{molar_mass, sensible_heat},
    support::{
        process::{EnergyResult, Phase, ProcessError, Species, Stream},
        thermo::{PropertyError, capability::PropertyProvider},
    },
};

/// Evaluates the evaporator for one inlet stream.
///
/// When the target needs no water removed, the inlet passes through
/// unchanged with an empty vapor stream and no duty.
///
/// # Errors
///
/// - [`ProcessError::InvalidFeed`] if the inlet is malformed, carries no
///   water to remove, or lacks the species a concentration target names.
/// - [`ProcessError::InvalidOperatingCondition`] if the target would need
///   all of the inlet water removed, or a sizing parameter is not finite
///   (or, for the driving force, not positive).
/// - [`ProcessError::MassBalanceViolation`] if the outlets do not conserve
///   mass or elements.
/// - [`ProcessError::Property`] if the provider cannot supply a property.
pub(crate) fn evaporate(
    inlet: &Stream,
    conditions: &EvaporatorConditions,
    target: &EvaporationTarget,
    config: &EvaporatorConfig,
    props: &impl PropertyProvider,
) -> Result<EvaporatorResults, ProcessError> {
    inlet.validate_feed()?;

    config.sizing.validate()?;

    let temperature = conditions.temperature();
    let pressure = conditions.pressure();
    let water = inlet.mass_flow(Species::Water);

    let Some(removal) = removal_fraction(inlet, target)? else {
        debug!(?target, "no concentration needed, stream passes through");
        return Ok(EvaporatorResults {
            liquid: inlet.clone(),
            vapor: Stream::new(temperature, pressure, Phase::Gas),
            energy: EnergyResult::none(),
            design: size(inlet, Power::ZERO, config),
        });
    };

    let evaporated = water * removal;

    let mut flows = inlet.flow_map().clone();
    flows.insert(Species::Water, water - evaporated);
    let liquid = Stream::from_flows(flows, temperature, pressure, Phase::Liquid);
    let vapor = Stream::new(temperature, pressure, Phase::Gas)
        .with_mass_flow(Species::Water, evaporated);

    config.tolerance.check(&[inlet], &[&liquid, &vapor], props)?;

    let dh_vap = props
        .heat_of_vaporization(Species::Water, temperature, pressure)
        .map_err(|err| ProcessError::property("heat of vaporization of water", err))?;
    let evaporated_mol =
        evaporated.get::<kilogram_per_second>() / molar_mass(props, Species::Water)?;
    let latent = Power::new::<watt>(evaporated_mol * dh_vap.get::<joule_per_mole>());

    let sensible = sensible_heat(inlet, temperature, props)?;
    let energy = EnergyResult::from_parts(sensible, latent, Power::ZERO).map_err(|err| {
        ProcessError::property(
            "evaporator duty",
            PropertyError::Calculation {
                context: err.to_string(),
            },
        )
    })?;

    let design = size(inlet, energy.duty.heating(), config);

    debug!(
        removal,
        vapor_kg_s = evaporated.get::<kilogram_per_second>(),
        duty_kw = energy.signed_duty().get::<kilowatt>(),
        area_m2 = design.heat_transfer_area.value,
        "evaporator evaluated"
    );

    Ok(EvaporatorResults {
        liquid,
        vapor,
        energy,
        design,
    })
}

/// Resolves the target to a fraction of the inlet water to remove.
///
/// Returns `None` when no water needs to be removed.
fn removal_fraction(
    inlet: &Stream,
    target: &EvaporationTarget,
) -> Result<Option<f64>, ProcessError> {
    let water = inlet.mass_flow(Species::Water);

    let removal = match *target {
        EvaporationTarget::RemovalFraction(fraction) => fraction.into_inner(),
        EvaporationTarget::FinalConcentration {
            species,
            mass_fraction,
        } => {
            let solute = inlet.mass_flow(species);
            if solute <= MassRate::ZERO {
                return Err(ProcessError::invalid_feed(format!(
                    "concentration target names {species}, which the inlet does not carry"
                )));
            }

            let mass_fraction = mass_fraction.into_inner();
            let total = inlet.total_mass_flow();
            if mass_fraction <= (solute / total).value {
                return Ok(None);
            }

            if water <= MassRate::ZERO {
                return Err(ProcessError::invalid_feed(format!(
                    "reaching {mass_fraction} {species} needs water removed, \
                     but the inlet carries none"
                )));
            }

            let to_remove = total - solute / mass_fraction;
            if to_remove >= water {
                return Err(ProcessError::invalid_condition(format!(
                    "reaching {mass_fraction} {species} needs {to_remove:?} of water removed, \
                     but the inlet carries {water:?}"
                )));
            }
            (to_remove / water).value
        }
    };

    if removal == 0.0 {
        return Ok(None);
    }
    if water <= MassRate::ZERO {
        return Err(ProcessError::invalid_feed("inlet carries no water to evaporate"));
    }

    Ok(Some(removal))
}

fn size(inlet: &Stream, heating: Power, config: &EvaporatorConfig) -> EvaporatorDesign {
    let sizing = &config.sizing;

    let holdup_volume: Volume = inlet.total_mass_flow() / sizing.liquid_density.into_inner()
        * sizing.holdup_time.into_inner();
    let heat_transfer_area: Area =
        heating / (sizing.overall_u.into_inner() * sizing.driving_force);

    EvaporatorDesign {
        holdup_volume,
        heat_transfer_area,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;

    use crate::{
        models::bioprocess::test_support::{kg_per_h, liquid_at},
        support::thermo::StandardProperties,
    };

    proptest! {
        #[test]
        fn only_water_moves_and_mass_closes(
            water in 1.0_f64..20000.0,
            lactic in 0.0_f64..5000.0,
            biomass in 0.0_f64..500.0,
            removal in 0.0_f64..0.999,
            feed_c in 20.0_f64..80.0,
        ) {
            let inlet = liquid_at(feed_c)
                .with_mass_flow(Species::Water, kg_per_h(water))
                .with_mass_flow(Species::LacticAcid, kg_per_h(lactic))
                .with_mass_flow(Species::Biomass, kg_per_h(biomass));
            let target = EvaporationTarget::removal_fraction(removal).unwrap();

            let out = evaporate(
                &inlet,
                &EvaporatorConditions::default(),
                &target,
                &EvaporatorConfig::default(),
                &StandardProperties,
            )
            .expect("valid inputs evaluate");

            for species in [Species::LacticAcid, Species::Biomass] {
                prop_assert_eq!(out.liquid.mass_flow(species), inlet.mass_flow(species));
            }
            let water_in = inlet.mass_flow(Species::Water).get::<kilogram_per_second>();
            let water_out = (out.liquid.mass_flow(Species::Water)
                + out.vapor.mass_flow(Species::Water))
            .get::<kilogram_per_second>();
            prop_assert!((water_out - water_in).abs() <= 1e-12 * water_in);
            prop_assert!(out.liquid.mass_flow(Species::Water) > MassRate::ZERO);
        }
    }
}
