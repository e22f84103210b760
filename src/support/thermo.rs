//! Physical property modeling for process units.
//!
//! Units never reach into a global property database. They are generic over
//! the capability traits in [`capability`], so any provider (the built-in
//! [`StandardProperties`] tables or a test double) can be substituted.

mod error;
mod heat_flow;
mod standard;

pub mod capability;

pub use error::PropertyError;
pub use heat_flow::HeatFlow;
pub use standard::StandardProperties;
