use uom::si::f64::{Area, Volume};

use crate::support::process::{EnergyResult, Stream};

/// Outlets, duty, and equipment sizing from one evaporator evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaporatorResults {
    /// Concentrate. Every species except water leaves here unchanged.
    pub liquid: Stream,

    /// Overheads, carrying only the water boiled off.
    pub vapor: Stream,

    pub energy: EnergyResult,

    pub design: EvaporatorDesign,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporatorDesign {
    /// Liquid held in the evaporator body.
    pub holdup_volume: Volume,

    /// Heating surface needed to supply the heating duty.
    pub heat_transfer_area: Area,
}
