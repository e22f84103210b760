use std::fmt;

use thiserror::Error;
use uom::si::molar_mass::kilogram_per_mole;

use crate::support::thermo::{PropertyError, capability::HasMolarMass};

use super::{Element, Species};

/// Element closure tolerance, relative to the element throughput.
const CLOSURE_TOL: f64 = 1e-9;

/// Errors raised when a reaction definition is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReactionError {
    /// No term has a negative coefficient.
    #[error("reaction has no reactant")]
    NoReactant,

    /// No term has a positive coefficient.
    #[error("reaction has no product")]
    NoProduct,

    /// A coefficient is zero, NaN, or infinite.
    #[error("{species} coefficient must be finite and non-zero, got {coefficient}")]
    InvalidCoefficient { species: Species, coefficient: f64 },

    /// A species appears in more than one term.
    #[error("{species} appears more than once")]
    DuplicateSpecies { species: Species },

    /// Atoms of an element are created or destroyed.
    ///
    /// `residual` is the net atoms of `element` produced per reaction event.
    #[error("{element} does not balance: residual {residual}")]
    Unbalanced { element: Element, residual: f64 },
}

/// An element-balanced stoichiometric reaction.
///
/// Terms are `(species, coefficient)` pairs in the order given. Reactants
/// carry negative coefficients and products positive ones. The first
/// reactant is the reference reactant: extents, yields, and heats of
/// reaction are expressed per mole (or kg) of it consumed.
///
/// # Example
///
/// ```
/// use twine_bioprocess::support::process::{Reaction, Species};
///
/// let homolactic = Reaction::new([
///     (Species::Glucose, -1.0),
///     (Species::LacticAcid, 2.0),
/// ])
/// .unwrap();
/// assert_eq!(homolactic, Reaction::homolactic());
///
/// // Carbon is not conserved.
/// assert!(Reaction::new([(Species::Glucose, -1.0), (Species::LacticAcid, 1.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    terms: Vec<(Species, f64)>,
    reference: Species,
}

impl Reaction {
    /// Creates a reaction from its terms.
    ///
    /// # Errors
    ///
    /// Returns a [`ReactionError`] if there is no reactant or no product,
    /// a coefficient is zero or non-finite, a species repeats, or any of
    /// C, H, O, N fails to balance.
    pub fn new(terms: impl IntoIterator<Item = (Species, f64)>) -> Result<Self, ReactionError> {
        let terms: Vec<_> = terms.into_iter().collect();

        for (i, &(species, coefficient)) in terms.iter().enumerate() {
            if !coefficient.is_finite() || coefficient == 0.0 {
                return Err(ReactionError::InvalidCoefficient {
                    species,
                    coefficient,
                });
            }
            if terms[..i].iter().any(|&(seen, _)| seen == species) {
                return Err(ReactionError::DuplicateSpecies { species });
            }
        }

        let reference = terms
            .iter()
            .find(|(_, coefficient)| *coefficient < 0.0)
            .map(|&(species, _)| species)
            .ok_or(ReactionError::NoReactant)?;

        if !terms.iter().any(|(_, coefficient)| *coefficient > 0.0) {
            return Err(ReactionError::NoProduct);
        }

        for element in Element::ALL {
            let (net, throughput) =
                terms
                    .iter()
                    .fold((0.0, 0.0), |(net, throughput), &(species, coefficient)| {
                        let atoms = coefficient * species.formula().count(element);
                        (net + atoms, throughput + atoms.abs())
                    });
            if net.abs() > CLOSURE_TOL * throughput.max(1.0) {
                return Err(ReactionError::Unbalanced {
                    element,
                    residual: net,
                });
            }
        }

        Ok(Self { terms, reference })
    }

    /// Homolactic fermentation: `C6H12O6 → 2 C3H6O3`.
    #[must_use]
    pub fn homolactic() -> Self {
        Self::new_unchecked(vec![
            (Species::Glucose, -1.0),
            (Species::LacticAcid, 2.0),
        ])
    }

    /// Cell growth on glucose: `C6H12O6 → 5 CH1.8O0.5 + CO2 + 1.5 H2O`.
    #[must_use]
    pub fn biomass_growth() -> Self {
        Self::new_unchecked(vec![
            (Species::Glucose, -1.0),
            (Species::Biomass, 5.0),
            (Species::CarbonDioxide, 1.0),
            (Species::Water, 1.5),
        ])
    }

    /// Alcoholic fermentation: `C6H12O6 → 2 C2H5OH + 2 CO2`.
    #[must_use]
    pub fn alcoholic() -> Self {
        Self::new_unchecked(vec![
            (Species::Glucose, -1.0),
            (Species::Ethanol, 2.0),
            (Species::CarbonDioxide, 2.0),
        ])
    }

    /// Builds a reaction known to satisfy every check in [`Reaction::new`].
    fn new_unchecked(terms: Vec<(Species, f64)>) -> Self {
        let reference = terms[0].0;
        Self { terms, reference }
    }

    /// Terms in definition order.
    #[must_use]
    pub fn terms(&self) -> &[(Species, f64)] {
        &self.terms
    }

    /// The reference reactant.
    #[must_use]
    pub fn reference(&self) -> Species {
        self.reference
    }

    /// Stoichiometric coefficient of `species`, or zero if it does not take part.
    #[must_use]
    pub fn coefficient(&self, species: Species) -> f64 {
        self.terms
            .iter()
            .find(|(s, _)| *s == species)
            .map_or(0.0, |&(_, coefficient)| coefficient)
    }

    /// True if the reaction forms `species`.
    #[must_use]
    pub fn produces(&self, species: Species) -> bool {
        self.coefficient(species) > 0.0
    }

    /// Terms scaled to one mole of the reference reactant consumed.
    pub fn per_mole_reference(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        let scale = self.coefficient(self.reference).abs();
        self.terms
            .iter()
            .map(move |&(species, coefficient)| (species, coefficient / scale))
    }

    /// Mass of `species` formed per unit mass of reference reactant consumed.
    ///
    /// Negative for reactants.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if either molar mass is unavailable.
    pub fn mass_yield(
        &self,
        species: Species,
        props: &impl HasMolarMass,
    ) -> Result<f64, PropertyError> {
        let reference_mw = props.molar_mass(self.reference)?.get::<kilogram_per_mole>();
        let species_mw = props.molar_mass(species)?.get::<kilogram_per_mole>();
        let nu_reference = self.coefficient(self.reference).abs();

        Ok(self.coefficient(species) * species_mw / (nu_reference * reference_mw))
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |sign: f64| {
            self.terms
                .iter()
                .filter(move |(_, coefficient)| coefficient.signum() == sign)
                .map(|&(species, coefficient)| {
                    let nu = coefficient.abs();
                    if nu == 1.0 {
                        species.to_string()
                    } else {
                        format!("{nu} {species}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(f, "{} -> {}", side(-1.0), side(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::thermo::StandardProperties;

    #[test]
    fn builtin_reactions_validate() {
        for reaction in [
            Reaction::homolactic(),
            Reaction::biomass_growth(),
            Reaction::alcoholic(),
        ] {
            let rebuilt = Reaction::new(reaction.terms().iter().copied())
                .unwrap_or_else(|err| panic!("{reaction}: {err}"));
            assert_eq!(rebuilt, reaction);
            assert_eq!(reaction.reference(), Species::Glucose);
        }
    }

    #[test]
    fn rejects_malformed_terms() {
        assert_eq!(
            Reaction::new([(Species::LacticAcid, 2.0)]),
            Err(ReactionError::NoReactant)
        );
        assert_eq!(Reaction::new([]), Err(ReactionError::NoReactant));
        assert_eq!(
            Reaction::new([(Species::Glucose, -1.0)]),
            Err(ReactionError::NoProduct)
        );
        assert!(matches!(
            Reaction::new([(Species::Glucose, -1.0), (Species::LacticAcid, f64::NAN)]),
            Err(ReactionError::InvalidCoefficient { .. })
        ));
        assert!(matches!(
            Reaction::new([(Species::Glucose, -1.0), (Species::Water, 0.0)]),
            Err(ReactionError::InvalidCoefficient {
                species: Species::Water,
                ..
            })
        ));
        assert_eq!(
            Reaction::new([
                (Species::Glucose, -1.0),
                (Species::LacticAcid, 1.0),
                (Species::LacticAcid, 1.0),
            ]),
            Err(ReactionError::DuplicateSpecies {
                species: Species::LacticAcid
            })
        );
    }

    #[test]
    fn rejects_unbalanced_elements() {
        let err = Reaction::new([(Species::Glucose, -1.0), (Species::Ethanol, 3.0)]).unwrap_err();
        assert_eq!(
            err,
            ReactionError::Unbalanced {
                element: Element::Hydrogen,
                residual: 6.0,
            }
        );
    }

    #[test]
    fn reference_is_first_reactant() {
        let reaction = Reaction::new([
            (Species::LacticAcid, 2.0),
            (Species::Glucose, -1.0),
        ])
        .unwrap();
        assert_eq!(reaction.reference(), Species::Glucose);
    }

    #[test]
    fn scaled_terms_follow_reference() {
        let doubled = Reaction::new([
            (Species::Glucose, -2.0),
            (Species::LacticAcid, 4.0),
        ])
        .unwrap();
        let scaled: Vec<_> = doubled.per_mole_reference().collect();
        assert_eq!(
            scaled,
            vec![(Species::Glucose, -1.0), (Species::LacticAcid, 2.0)]
        );
    }

    #[test]
    fn mass_yields() {
        let props = StandardProperties;

        let homolactic = Reaction::homolactic();
        assert_relative_eq!(
            homolactic.mass_yield(Species::LacticAcid, &props).unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            homolactic.mass_yield(Species::Glucose, &props).unwrap(),
            -1.0,
            epsilon = 1e-12
        );

        let growth = Reaction::biomass_growth();
        let total: f64 = [Species::Biomass, Species::CarbonDioxide, Species::Water]
            .into_iter()
            .map(|s| growth.mass_yield(s, &props).unwrap())
            .sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn display_lists_both_sides() {
        assert_eq!(
            Reaction::alcoholic().to_string(),
            "Glucose -> 2 Ethanol + 2 CarbonDioxide"
        );
    }
}
