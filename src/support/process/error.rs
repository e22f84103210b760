use thiserror::Error;

use crate::support::thermo::PropertyError;

use super::Balance;

/// Errors that can occur while evaluating a process unit.
///
/// Every variant is terminal for the evaluation that raised it: units never
/// substitute defaults, clamp, or retry.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The inlet stream cannot be processed.
    ///
    /// Raised for missing required species, a zero or negative flow of the
    /// limiting reagent, non-finite values, or an inlet in the wrong phase.
    #[error("invalid feed: {context}")]
    InvalidFeed { context: String },

    /// A configuration value lies outside its valid domain.
    #[error("invalid operating condition: {context}")]
    InvalidOperatingCondition { context: String },

    /// Computed outlets do not conserve mass or elements.
    ///
    /// This indicates inconsistent stoichiometry or property data and is
    /// always surfaced rather than corrected.
    #[error("{balance} balance does not close: in={inlet}, out={outlet}")]
    MassBalanceViolation {
        /// The balance that failed.
        balance: Balance,

        /// Inlet total in kg/s. Element balances report element mass flow.
        inlet: f64,

        /// Outlet total, in the same units as `inlet`.
        outlet: f64,
    },

    /// A property provider could not evaluate a required property.
    #[error("property evaluation failed: {context}")]
    Property {
        /// What was being evaluated.
        context: String,

        /// Underlying property error.
        #[source]
        source: PropertyError,
    },
}

impl ProcessError {
    pub(crate) fn invalid_feed(context: impl Into<String>) -> Self {
        Self::InvalidFeed {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_condition(context: impl Into<String>) -> Self {
        Self::InvalidOperatingCondition {
            context: context.into(),
        }
    }

    pub(crate) fn property(context: impl Into<String>, source: PropertyError) -> Self {
        Self::Property {
            context: context.into(),
            source,
        }
    }
}
