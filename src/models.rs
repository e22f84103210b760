//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently the only
//! domain is [`bioprocess`]: biological conversion and downstream
//! concentration units.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; only its configuration and result types are
//! re-exported.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that owns the
//! unit's immutable configuration and delegates each call to the core.

pub mod bioprocess;
