use thiserror::Error;

/// Errors a property provider may return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The provider has no data for this property of this species.
    ///
    /// For example, a heat of vaporization for a dissolved solid.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The requested temperature or pressure lies outside the range the
    /// provider's correlation covers.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// A property was available but produced a non-physical result.
    ///
    /// Non-positive molar masses and non-finite duties are reported this way.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
