//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (flows, temperatures,
//! pressures, duties). This module holds the small extensions the models need
//! that [`uom`] does not provide.
//!
//! ## Temperature differences
//!
//! Sensible heat needs `T_operating − T_inlet` as a temperature *interval*.
//! [`TemperatureDifference::minus`] provides that:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_bioprocess::support::units::TemperatureDifference;
//!
//! let feed = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//! let broth = ThermodynamicTemperature::new::<degree_celsius>(37.0);
//! let rise = broth.minus(feed);
//! assert!((rise.get::<temperature_interval::kelvin>() - 7.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
