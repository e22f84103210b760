//! Lactic acid fermentation reactor.
//!
//! [`Fermenter`] is the [`twine_core::Model`] adapter. It owns the reaction
//! policy, operating conditions, and property provider, and evaluates one
//! inlet stream per call. The balance itself is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_bioprocess::{
//!     models::bioprocess::fermenter::{Fermenter, FermenterConditions, ReactionSpec},
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
//! let fermenter = Fermenter::new(
//!     StandardProperties,
//!     ReactionSpec::lactic_acid(0.9, 0.85).unwrap(),
//!     FermenterConditions::default(),
//! );
//!
//! let feed = Stream::liquid(
//!     ThermodynamicTemperature::new::<degree_celsius>(37.0),
//!     Pressure::new::<atmosphere>(1.0),
//! )
//! .with_mass_flow(Species::Glucose, MassRate::new::<kilogram_per_second>(1.0))
//! .with_mass_flow(Species::Water, MassRate::new::<kilogram_per_second>(4.0));
//!
//! let out = fermenter.call(&feed).unwrap();
//! let lactic = out.liquid.mass_flow(Species::LacticAcid);
//! assert!((lactic.get::<kilogram_per_second>() - 0.765).abs() < 1e-9);
//! ```

mod core;

pub use self::core::{
    FermenterConditions, FermenterConfig, FermenterDesign, FermenterResults, FermenterSizing,
    ReactionSpec, SideReaction,
};

use twine_core::Model;

use crate::support::{
    process::{ProcessError, Stream},
    thermo::capability::PropertyProvider,
};

/// A steady-state fermenter as a [`Model`] from inlet [`Stream`] to
/// [`FermenterResults`].
#[derive(Debug, Clone)]
pub struct Fermenter<Props> {
    props: Props,
    spec: ReactionSpec,
    conditions: FermenterConditions,
    config: FermenterConfig,
}

impl<Props: PropertyProvider> Fermenter<Props> {
    /// Creates a fermenter with the default [`FermenterConfig`].
    #[must_use]
    pub fn new(props: Props, spec: ReactionSpec, conditions: FermenterConditions) -> Self {
        Self {
            props,
            spec,
            conditions,
            config: FermenterConfig::default(),
        }
    }

    /// Replaces the balance tolerance and sizing parameters.
    #[must_use]
    pub fn with_config(self, config: FermenterConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn spec(&self) -> &ReactionSpec {
        &self.spec
    }

    #[must_use]
    pub fn conditions(&self) -> &FermenterConditions {
        &self.conditions
    }

    #[must_use]
    pub fn config(&self) -> &FermenterConfig {
        &self.config
    }
}

impl<Props: PropertyProvider> Model for Fermenter<Props> {
    type Input = Stream;
    type Output = FermenterResults;
    type Error = ProcessError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::ferment(
            input,
            &self.spec,
            &self.conditions,
            &self.config,
            &self.props,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Volume, volume::cubic_meter};

    use crate::{
        models::bioprocess::test_support::{in_kg_per_h, kg_per_h, liquid_at},
        support::{
            constraint::StrictlyPositive,
            process::Species,
            thermo::StandardProperties,
        },
    };

    fn fermenter() -> Fermenter<StandardProperties> {
        Fermenter::new(
            StandardProperties,
            ReactionSpec::lactic_acid(0.9, 0.85).unwrap(),
            FermenterConditions::default(),
        )
    }

    #[test]
    fn call_delegates_to_core() {
        let feed = liquid_at(37.0)
            .with_mass_flow(Species::Glucose, kg_per_h(1000.0))
            .with_mass_flow(Species::Water, kg_per_h(4000.0));

        let out = fermenter().call(&feed).unwrap();
        assert_relative_eq!(
            in_kg_per_h(out.liquid.mass_flow(Species::LacticAcid)),
            765.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn config_changes_sizing_only() {
        let feed = liquid_at(37.0)
            .with_mass_flow(Species::Glucose, kg_per_h(1000.0))
            .with_mass_flow(Species::Water, kg_per_h(9000.0));

        let mut config = FermenterConfig::default();
        config.sizing.vessel_volume =
            StrictlyPositive::new(Volume::new::<cubic_meter>(500.0)).unwrap();

        let default_out = fermenter().call(&feed).unwrap();
        let large_out = fermenter().with_config(config).call(&feed).unwrap();

        assert_eq!(default_out.liquid, large_out.liquid);
        assert_eq!(default_out.design.reactor_count, 5);
        assert_eq!(large_out.design.reactor_count, 1);
    }

    #[test]
    fn accessors_return_construction_values() {
        let spec = ReactionSpec::lactic_acid(0.8, 0.7).unwrap();
        let fermenter =
            Fermenter::new(StandardProperties, spec.clone(), FermenterConditions::default());

        assert_eq!(fermenter.spec(), &spec);
        assert_eq!(fermenter.conditions(), &FermenterConditions::default());
        assert_eq!(fermenter.config(), &FermenterConfig::default());
    }

    #[test]
    fn errors_propagate_unchanged() {
        let no_glucose = liquid_at(37.0).with_mass_flow(Species::Water, kg_per_h(1000.0));
        assert!(matches!(
            fermenter().call(&no_glucose),
            Err(ProcessError::InvalidFeed { .. })
        ));
    }
}
