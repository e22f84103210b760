use uom::si::f64::Volume;

use crate::support::process::{EnergyResult, Stream};

/// Outlets, duty, and vessel sizing from one fermenter evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct FermenterResults {
    /// Broth leaving the fermenter: product, residual substrate, biomass, water.
    pub liquid: Stream,

    /// Off-gas disengaged from the broth. Empty when nothing gaseous forms.
    pub gas: Stream,

    pub energy: EnergyResult,

    pub design: FermenterDesign,
}

/// Vessel sizing derived from the outlet broth flow and residence time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FermenterDesign {
    /// Total broth holdup needed for the residence time.
    pub working_volume: Volume,

    /// Number of vessels of the configured size needed to hold it.
    pub reactor_count: usize,
}
