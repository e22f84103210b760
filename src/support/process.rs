//! Material streams, chemical species, and reactions.
//!
//! These are the value types exchanged between process units:
//!
//! - [`Species`] names a chemical component and knows its elemental
//!   [`Formula`] and the [`Phase`] it occupies at process conditions.
//! - [`Stream`] is an ordered species → mass flow mapping plus temperature,
//!   pressure, and phase.
//! - [`Reaction`] is an element-balanced list of stoichiometric terms.
//! - [`EnergyResult`] reports a unit's duty and how it was derived.
//!
//! All of them are immutable values: units take them by reference and
//! return freshly built outputs.

mod balance;
mod energy;
mod error;
mod reaction;
mod species;
mod stream;

pub use balance::{Balance, BalanceTolerance};
pub use energy::EnergyResult;
pub use error::ProcessError;
pub use reaction::{Reaction, ReactionError};
pub use species::{Element, Formula, Phase, Species};
pub use stream::Stream;
