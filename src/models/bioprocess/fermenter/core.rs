//! Steady-state fermentation balance.
//!
//! The converted substrate is split over the product, growth, and optional
//! side reaction routes of a [`ReactionSpec`]. Each route advances its
//! reaction by the moles of substrate it receives; species flows change by
//! the stoichiometric multiples of that extent. The resulting broth is split
//! into liquid and gas outlets by species phase and checked for mass and
//! element closure before anything is returned.

mod config;
mod reaction_spec;
mod results;

pub use config::{FermenterConditions, FermenterConfig, FermenterSizing};
pub use reaction_spec::{ReactionSpec, SideReaction};
pub use results::{FermenterDesign, FermenterResults};

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        f64::{MassRate, Power, Volume},
        mass_rate::kilogram_per_second,
        molar_energy::joule_per_mole,
        power::{kilowatt, watt},
    },
};

use crate::{
    models::bioprocess::properties::{molar_mass, sensible_heat},
    support::{
        process::{EnergyResult, ProcessError, Reaction, Stream},
        thermo::{PropertyError, capability::PropertyProvider},
    },
};

/// Allowance for round-off when comparing the requested yield to the
/// stoichiometric maximum.
const YIELD_SLACK: f64 = 1e-12;

/// Evaluates the fermenter for one inlet stream.
///
/// Outlet species are split by natural phase, so gases dissolved in the feed
/// leave in the off-gas even at zero conversion. A feed without them passes
/// through unchanged.
///
/// # Errors
///
/// - [`ProcessError::InvalidFeed`] if the inlet is malformed, carries no
///   substrate, or lacks a co-reactant a route consumes.
/// - [`ProcessError::InvalidOperatingCondition`] if the requested yield
///   exceeds the product reaction's stoichiometric maximum, or a sizing
///   parameter is not finite.
/// - [`ProcessError::MassBalanceViolation`] if the outlets do not conserve
///   mass or elements.
/// - [`ProcessError::Property`] if the provider cannot supply a property.
pub(crate) fn ferment(
    inlet: &Stream,
    spec: &ReactionSpec,
    conditions: &FermenterConditions,
    config: &FermenterConfig,
    props: &impl PropertyProvider,
) -> Result<FermenterResults, ProcessError> {
    inlet.validate_feed()?;
    config.sizing.validate()?;

    let substrate = spec.substrate();
    let fed = inlet.mass_flow(substrate);
    if fed <= MassRate::ZERO {
        return Err(ProcessError::invalid_feed(format!(
            "{substrate} flow must be positive, got {fed:?}"
        )));
    }

    let routes = routes(spec, props)?;

    let conversion = spec.conversion();
    let converted_mol =
        (fed * conversion).get::<kilogram_per_second>() / molar_mass(props, substrate)?;

    let mut flows = inlet.flow_map().clone();
    flows.insert(substrate, fed * (1.0 - conversion));
    let mut reaction_heat = Power::ZERO;

    for (reaction, share) in routes {
        let extent = converted_mol * share;
        if extent == 0.0 {
            continue;
        }

        let dh = props.heat_of_reaction(reaction).map_err(|err| {
            ProcessError::property(format!("heat of reaction for `{reaction}`"), err)
        })?;
        reaction_heat += Power::new::<watt>(extent * dh.get::<joule_per_mole>());

        for (species, nu) in reaction.per_mole_reference() {
            if species == substrate {
                continue;
            }
            let delta = nu * extent * molar_mass(props, species)?;
            *flows.entry(species).or_insert(MassRate::ZERO) +=
                MassRate::new::<kilogram_per_second>(delta);
        }
    }

    if let Some((species, flow)) = flows.iter().find(|(_, flow)| **flow < MassRate::ZERO) {
        return Err(ProcessError::invalid_feed(format!(
            "not enough {species} for the requested conversion, outlet would be {flow:?}"
        )));
    }

    let (liquid, gas) = Stream::split_by_phase(flows, conditions.temperature(), inlet.pressure);
    config.tolerance.check(&[inlet], &[&liquid, &gas], props)?;

    let sensible = sensible_heat(inlet, conditions.temperature(), props)?;
    let energy = EnergyResult::from_parts(sensible, Power::ZERO, reaction_heat).map_err(|err| {
        ProcessError::property(
            "fermenter duty",
            PropertyError::Calculation {
                context: err.to_string(),
            },
        )
    })?;

    let design = size(&liquid, conditions, config);

    if conversion == 0.0 {
        debug!(%substrate, "zero conversion, broth passes through unreacted");
    }
    debug!(
        %substrate,
        conversion,
        product_kg_s = liquid.mass_flow(spec.product()).get::<kilogram_per_second>(),
        gas_kg_s = gas.total_mass_flow().get::<kilogram_per_second>(),
        duty_kw = energy.signed_duty().get::<kilowatt>(),
        reactors = design.reactor_count,
        "fermenter evaluated"
    );

    Ok(FermenterResults {
        liquid,
        gas,
        energy,
        design,
    })
}

/// Splits one unit of converted substrate over the reaction routes.
///
/// Shares always sum to one.
fn routes<'a>(
    spec: &'a ReactionSpec,
    props: &impl PropertyProvider,
) -> Result<Vec<(&'a Reaction, f64)>, ProcessError> {
    let product = spec.product();
    let context = || format!("stoichiometric yield of {product}");

    let max_yield = spec
        .product_reaction()
        .mass_yield(product, props)
        .map_err(|err| ProcessError::property(context(), err))?;

    if !max_yield.is_finite() || max_yield <= 0.0 {
        return Err(ProcessError::property(
            context(),
            PropertyError::Calculation {
                context: format!("expected a positive yield, got {max_yield}"),
            },
        ));
    }

    let product_yield = spec.product_yield();
    if product_yield > max_yield * (1.0 + YIELD_SLACK) {
        return Err(ProcessError::invalid_condition(format!(
            "product yield {product_yield} exceeds the stoichiometric maximum {max_yield} of `{}`",
            spec.product_reaction()
        )));
    }

    let side_fraction = spec.side_fraction();
    let remainder = 1.0 - side_fraction;
    let product_share = remainder * (product_yield / max_yield).min(1.0);
    let growth_share = remainder - product_share;

    let mut routes = vec![
        (spec.product_reaction(), product_share),
        (spec.growth_reaction(), growth_share),
    ];
    if let Some(side) = spec.side_reaction() {
        routes.push((&side.reaction, side_fraction));
    }

    Ok(routes)
}

fn size(
    liquid: &Stream,
    conditions: &FermenterConditions,
    config: &FermenterConfig,
) -> FermenterDesign {
    let sizing = &config.sizing;
    let working_volume: Volume = liquid.total_mass_flow() / sizing.broth_density.into_inner()
        * conditions.residence_time();

    let vessels = (working_volume / sizing.vessel_volume.into_inner()).value.ceil();

    FermenterDesign {
        working_volume,
        reactor_count: vessels as usize,
    }
}
