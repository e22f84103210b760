//! # Twine Bioprocess
//!
//! Steady-state process-unit models for converting a sugar feedstock into an
//! organic acid and concentrating it, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Streams, reactions, property capabilities, and numeric
//!   constraints used by the models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because models exchange
//! their types (streams, reactions, energy results), but their APIs are not
//! stable. Breaking changes may occur as needed.
//!
//! Utility code follows the same progression as in other Twine model crates:
//! it starts in a model's internal `core` module, moves to a domain-level
//! module when a second model needs it, and finally lands in [`support`].

pub mod models;
pub mod support;
