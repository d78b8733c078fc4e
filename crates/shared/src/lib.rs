//! # enumeration-shared
//!
//! Shared error types for the enumeration workspace.
//!
//! This crate provides the foundational error currency used across all other crates:
//!
//! - [`ErrorEnvelope`] - structured, serializable error with a namespaced code
//! - [`Result`] - workspace result alias defaulting to [`ErrorEnvelope`]
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Serde-compatible** - All public types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;

pub use errors::{ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};

/// Shared result type used across the workspace.
pub type Result<T, E = ErrorEnvelope> = std::result::Result<T, E>;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
