use std::fmt;

use tracing::warn;
use uom::{
    ConstZero,
    si::{f64::MassRate, mass_rate::kilogram_per_second, molar_mass::kilogram_per_mole},
};

use crate::support::thermo::capability::HasMolarMass;

use super::{Element, ProcessError, Stream};

/// A conservation balance checked across a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Total mass over all species.
    Mass,
    /// Mass of one element summed over all species.
    Element(Element),
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Mass => f.write_str("mass"),
            Balance::Element(element) => write!(f, "{element} element"),
        }
    }
}

/// Closure tolerance for mass and element balances.
///
/// Two totals are considered equal when their difference is within
/// `absolute`, or within `relative` times the larger magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceTolerance {
    pub relative: f64,
    pub absolute: MassRate,
}

impl Default for BalanceTolerance {
    fn default() -> Self {
        Self {
            relative: 1e-6,
            absolute: MassRate::new::<kilogram_per_second>(1e-12),
        }
    }
}

impl BalanceTolerance {
    /// Returns true if `inlet` and `outlet` agree within this tolerance.
    ///
    /// Non-finite totals never close.
    #[must_use]
    pub fn closes(&self, inlet: MassRate, outlet: MassRate) -> bool {
        let a = inlet.get::<kilogram_per_second>();
        let b = outlet.get::<kilogram_per_second>();
        if !a.is_finite() || !b.is_finite() {
            return false;
        }

        let diff = (a - b).abs();
        diff <= self.absolute.get::<kilogram_per_second>()
            || diff <= self.relative * a.abs().max(b.abs())
    }

    /// Checks that total mass and every element close between inlets and outlets.
    ///
    /// Element totals are carried as element mass flow, so both balances share
    /// one tolerance. Species molar masses come from `props`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::MassBalanceViolation`] for the first balance
    /// that fails, or [`ProcessError::Property`] if a molar mass is unavailable.
    pub(crate) fn check(
        &self,
        inlets: &[&Stream],
        outlets: &[&Stream],
        props: &impl HasMolarMass,
    ) -> Result<(), ProcessError> {
        let mass_in = total_mass(inlets);
        let mass_out = total_mass(outlets);
        self.require(Balance::Mass, mass_in, mass_out)?;

        for element in Element::ALL {
            let element_in = element_mass(inlets, element, props)?;
            let element_out = element_mass(outlets, element, props)?;
            self.require(Balance::Element(element), element_in, element_out)?;
        }

        Ok(())
    }

    fn require(
        &self,
        balance: Balance,
        inlet: MassRate,
        outlet: MassRate,
    ) -> Result<(), ProcessError> {
        if self.closes(inlet, outlet) {
            return Ok(());
        }

        let inlet = inlet.get::<kilogram_per_second>();
        let outlet = outlet.get::<kilogram_per_second>();
        warn!(%balance, inlet, outlet, "balance does not close");

        Err(ProcessError::MassBalanceViolation {
            balance,
            inlet,
            outlet,
        })
    }
}

fn total_mass(streams: &[&Stream]) -> MassRate {
    streams
        .iter()
        .map(|stream| stream.total_mass_flow())
        .fold(MassRate::ZERO, |acc, m| acc + m)
}

/// Mass flow of `element` carried by all species in `streams`.
fn element_mass(
    streams: &[&Stream],
    element: Element,
    props: &impl HasMolarMass,
) -> Result<MassRate, ProcessError> {
    let atomic_weight = element.atomic_weight() / 1000.0;
    let mut kg_per_s = 0.0;

    for stream in streams {
        for (species, mass_rate) in stream.flows() {
            let atoms = species.formula().count(element);
            if atoms == 0.0 {
                continue;
            }

            let molar_mass = props.molar_mass(species).map_err(|err| {
                ProcessError::property(format!("molar mass of {species}"), err)
            })?;
            let mol_per_s =
                mass_rate.get::<kilogram_per_second>() / molar_mass.get::<kilogram_per_mole>();
            kg_per_s += mol_per_s * atoms * atomic_weight;
        }
    }

    Ok(MassRate::new::<kilogram_per_second>(kg_per_s))
}
