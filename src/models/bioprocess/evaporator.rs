//! Vacuum evaporator for concentrating fermentation broth.
//!
//! [`Evaporator`] wraps the internal `core` balance as a [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use twine_bioprocess::{
//!     models::bioprocess::evaporator::{EvaporationTarget, Evaporator, EvaporatorConditions},
//!     support::{
//!         process::{Species, Stream},
//!         thermo::StandardProperties,
//!     },
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{MassRate, Pressure, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     pressure::atmosphere,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let evaporator = Evaporator::new(
//!     StandardProperties,
//!     EvaporationTarget::removal_fraction(0.5).unwrap(),
//!     EvaporatorConditions::default(),
//! );
//!
//! let broth = Stream::liquid(
//!     ThermodynamicTemperature::new::<degree_celsius>(37.0),
//!     Pressure::new::<atmosphere>(1.0),
//! )
//! .with_mass_flow(Species::Water, MassRate::new::<kilogram_per_second>(4.0))
//! .with_mass_flow(Species::LacticAcid, MassRate::new::<kilogram_per_second>(0.8));
//!
//! let out = evaporator.call(&broth).unwrap();
//! let vapor = out.vapor.mass_flow(Species::Water);
//! assert!((vapor.get::<kilogram_per_second>() - 2.0).abs() < 1e-12);
//! assert!(out.energy.signed_duty().value > 0.0);
//! ```

mod core;

pub use self::core::{
    EvaporationTarget, EvaporatorConditions, EvaporatorConfig, EvaporatorDesign,
    EvaporatorResults, EvaporatorSizing,
};

use twine_core::Model;

use crate::support::{
    process::{ProcessError, Stream},
    thermo::capability::PropertyProvider,
};

/// A steady-state evaporator as a [`Model`] from inlet [`Stream`] to
/// [`EvaporatorResults`].
#[derive(Debug, Clone)]
pub struct Evaporator<Props> {
    props: Props,
    target: EvaporationTarget,
    conditions: EvaporatorConditions,
    config: EvaporatorConfig,
}

impl<Props: PropertyProvider> Evaporator<Props> {
    /// Creates an evaporator with the default [`EvaporatorConfig`].
    #[must_use]
    pub fn new(props: Props, target: EvaporationTarget, conditions: EvaporatorConditions) -> Self {
        Self {
            props,
            target,
            conditions,
            config: EvaporatorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: EvaporatorConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn target(&self) -> &EvaporationTarget {
        &self.target
    }

    #[must_use]
    pub fn conditions(&self) -> &EvaporatorConditions {
        &self.conditions
    }

    #[must_use]
    pub fn config(&self) -> &EvaporatorConfig {
        &self.config
    }
}

impl<Props: PropertyProvider> Model for Evaporator<Props> {
    type Input = Stream;
    type Output = EvaporatorResults;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::evaporate(
            input,
            &self.conditions,
            &self.target,
            &self.config,
            &self.props,
        )
    }
}
