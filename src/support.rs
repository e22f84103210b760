//! Supporting utilities used by models.
//!
//! These modules are public because model inputs and outputs are expressed in
//! their types, but their APIs may change between releases.

pub mod constraint;
pub mod process;
pub mod thermo;
pub mod units;
