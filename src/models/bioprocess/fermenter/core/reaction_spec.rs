use crate::support::{
    constraint::{Constrained, NonNegative, UnitInterval},
    process::{ProcessError, Reaction, Species},
};

/// A competing route that diverts part of the converted substrate.
#[derive(Debug, Clone, PartialEq)]
pub struct SideReaction {
    pub reaction: Reaction,

    /// Share of the converted substrate consumed by this route.
    pub fraction: Constrained<f64, UnitInterval>,
}

/// Conversion and yield policy for a fermentation.
///
/// A fraction `conversion` of the substrate fed is consumed. The converted
/// substrate is distributed over up to three routes:
///
/// 1. the side reaction, if any, takes its `fraction` of it;
/// 2. the product reaction takes enough of the remainder to deliver
///    `product_yield` kg of product per kg of substrate converted, scaled by
///    the remainder;
/// 3. the growth reaction takes whatever is left.
///
/// The product flow is therefore `converted × product_yield × (1 − side
/// fraction)`. A yield above the product reaction's stoichiometric maximum is
/// rejected when the fermenter is evaluated.
///
/// # Example
///
/// ```
/// use twine_bioprocess::models::bioprocess::fermenter::ReactionSpec;
///
/// let spec = ReactionSpec::lactic_acid(0.9, 0.85)
///     .unwrap()
///     .with_ethanol_byproduct(0.02)
///     .unwrap();
/// assert_eq!(spec.side_fraction(), 0.02);
///
/// assert!(ReactionSpec::lactic_acid(1.2, 0.85).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionSpec {
    substrate: Species,
    product: Species,
    product_reaction: Reaction,
    growth_reaction: Reaction,
    side: Option<SideReaction>,
    conversion: Constrained<f64, UnitInterval>,
    product_yield: Constrained<f64, NonNegative>,
}

impl ReactionSpec {
    /// Creates a reaction policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if `conversion` is
    /// outside `[0, 1]`, `product_yield` is negative or NaN, either reaction
    /// does not consume `substrate` as its reference reactant, the product
    /// reaction does not form `product`, or the growth reaction does.
    pub fn new(
        substrate: Species,
        product: Species,
        product_reaction: Reaction,
        growth_reaction: Reaction,
        conversion: f64,
        product_yield: f64,
    ) -> Result<Self, ProcessError> {
        let conversion = UnitInterval::new(conversion).map_err(|err| {
            ProcessError::invalid_condition(format!("conversion fraction {conversion}: {err}"))
        })?;
        let product_yield = NonNegative::new(product_yield).map_err(|err| {
            ProcessError::invalid_condition(format!("product yield {product_yield}: {err}"))
        })?;

        check_consumes(&product_reaction, substrate)?;
        check_consumes(&growth_reaction, substrate)?;
        if !product_reaction.produces(product) {
            return Err(ProcessError::invalid_condition(format!(
                "product reaction `{product_reaction}` does not form {product}"
            )));
        }
        check_does_not_form(&growth_reaction, product)?;

        Ok(Self {
            substrate,
            product,
            product_reaction,
            growth_reaction,
            side: None,
            conversion,
            product_yield,
        })
    }

    /// Glucose to lactic acid via homolactic fermentation, with the balance
    /// of the converted glucose going to cell growth.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if `conversion` is
    /// outside `[0, 1]` or `product_yield` is negative.
    pub fn lactic_acid(conversion: f64, product_yield: f64) -> Result<Self, ProcessError> {
        Self::new(
            Species::Glucose,
            Species::LacticAcid,
            Reaction::homolactic(),
            Reaction::biomass_growth(),
            conversion,
            product_yield,
        )
    }

    /// Adds a competing route consuming `fraction` of the converted substrate.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if `fraction` is
    /// outside `[0, 1]`, the reaction does not consume the substrate as its
    /// reference reactant, or it forms the product.
    pub fn with_side_reaction(
        self,
        reaction: Reaction,
        fraction: f64,
    ) -> Result<Self, ProcessError> {
        let fraction = UnitInterval::new(fraction).map_err(|err| {
            ProcessError::invalid_condition(format!("side reaction fraction {fraction}: {err}"))
        })?;
        check_consumes(&reaction, self.substrate)?;
        check_does_not_form(&reaction, self.product)?;

        Ok(Self {
            side: Some(SideReaction { reaction, fraction }),
            ..self
        })
    }

    /// Adds alcoholic fermentation as the competing route.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidOperatingCondition`] if `fraction` is
    /// outside `[0, 1]`.
    pub fn with_ethanol_byproduct(self, fraction: f64) -> Result<Self, ProcessError> {
        self.with_side_reaction(Reaction::alcoholic(), fraction)
    }

    #[must_use]
    pub fn substrate(&self) -> Species {
        self.substrate
    }

    #[must_use]
    pub fn product(&self) -> Species {
        self.product
    }

    #[must_use]
    pub fn product_reaction(&self) -> &Reaction {
        &self.product_reaction
    }

    #[must_use]
    pub fn growth_reaction(&self) -> &Reaction {
        &self.growth_reaction
    }

    #[must_use]
    pub fn side_reaction(&self) -> Option<&SideReaction> {
        self.side.as_ref()
    }

    /// Fraction of the substrate fed that is consumed.
    #[must_use]
    pub fn conversion(&self) -> f64 {
        self.conversion.into_inner()
    }

    /// Product formed per unit mass of substrate converted, before the side
    /// reaction takes its share.
    #[must_use]
    pub fn product_yield(&self) -> f64 {
        self.product_yield.into_inner()
    }

    /// Share of the converted substrate taken by the side reaction, or zero.
    #[must_use]
    pub fn side_fraction(&self) -> f64 {
        self.side
            .as_ref()
            .map_or(0.0, |side| side.fraction.into_inner())
    }
}

fn check_consumes(reaction: &Reaction, substrate: Species) -> Result<(), ProcessError> {
    if reaction.reference() == substrate {
        Ok(())
    } else {
        Err(ProcessError::invalid_condition(format!(
            "reaction `{reaction}` must consume {substrate} as its reference reactant"
        )))
    }
}

fn check_does_not_form(reaction: &Reaction, product: Species) -> Result<(), ProcessError> {
    if reaction.produces(product) {
        Err(ProcessError::invalid_condition(format!(
            "reaction `{reaction}` must not form the product {product}"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_must_be_a_fraction() {
        for conversion in [-0.1, 1.2, f64::NAN] {
            assert!(
                matches!(
                    ReactionSpec::lactic_acid(conversion, 0.85),
                    Err(ProcessError::InvalidOperatingCondition { .. })
                ),
                "{conversion}"
            );
        }
        assert!(ReactionSpec::lactic_acid(0.0, 0.85).is_ok());
        assert!(ReactionSpec::lactic_acid(1.0, 0.85).is_ok());
    }

    #[test]
    fn yield_must_be_non_negative() {
        assert!(matches!(
            ReactionSpec::lactic_acid(0.9, -0.1),
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));
    }

    #[test]
    fn side_reaction_cannot_form_product() {
        let spec = ReactionSpec::lactic_acid(0.9, 0.85).unwrap();
        assert!(matches!(
            spec.with_side_reaction(Reaction::homolactic(), 0.1),
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));
    }

    #[test]
    fn side_reaction_must_consume_substrate() {
        let reverse_growth = Reaction::new([
            (Species::Biomass, -5.0),
            (Species::CarbonDioxide, -1.0),
            (Species::Water, -1.5),
            (Species::Glucose, 1.0),
        ])
        .unwrap();
        let spec = ReactionSpec::lactic_acid(0.9, 0.85).unwrap();
        assert!(matches!(
            spec.with_side_reaction(reverse_growth, 0.1),
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));
    }

    #[test]
    fn growth_reaction_cannot_form_product() {
        let result = ReactionSpec::new(
            Species::Glucose,
            Species::LacticAcid,
            Reaction::homolactic(),
            Reaction::homolactic(),
            0.9,
            0.85,
        );
        assert!(matches!(
            result,
            Err(ProcessError::InvalidOperatingCondition { .. })
        ));
    }

    #[test]
    fn side_fraction_defaults_to_zero() {
        let spec = ReactionSpec::lactic_acid(0.9, 0.85).unwrap();
        assert_eq!(spec.side_fraction(), 0.0);
        assert!(spec.side_reaction().is_none());

        let spec = spec.with_ethanol_byproduct(0.02).unwrap();
        assert_eq!(spec.side_fraction(), 0.02);
        assert_eq!(
            spec.side_reaction().map(|side| &side.reaction),
            Some(&Reaction::alcoholic())
        );
    }
}
