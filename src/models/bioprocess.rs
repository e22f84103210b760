//! Bioprocess unit models.
//!
//! Two steady-state units, evaluated in series by an external flowsheet:
//!
//! - [`fermenter`]: converts a glucose feed to lactic acid, biomass, and
//!   CO2 off-gas, and reports the duty to hold the broth at temperature.
//! - [`evaporator`]: concentrates the fermenter broth by boiling off water
//!   under vacuum.
//!
//! Both units are pure: evaluating twice with identical inputs returns
//! identical outputs.

pub mod evaporator;
pub mod fermenter;

mod properties;

#[cfg(test)]
mod test_support;
