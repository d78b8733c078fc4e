//! # enumeration-core
//!
//! Typed, closed-set enumeration values.
//!
//! An enumeration is a type with a fixed table of named, integer-valued
//! members. This crate provides:
//!
//! - **Trait** - [`Enumeration`]: member table, lookups by value and display
//!   name, validity checks, listing, comparison
//! - **Erasure** - [`EnumerationType`] runtime handles and [`Member`] values
//!   that keep equality type-discriminating
//! - **Validation** - [`validate_members`] rejects duplicate values and names
//! - **Registry** - [`EnumerationRegistry`] resolves enumerations by name or `TypeId`
//! - **Serde** - [`codec`] bindings by value or display name
//!
//! ## Dependency Rules
//!
//! - Depends only on the `shared` crate
//! - Pure value logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use enumeration_shared::shared_crate_version;

// =============================================================================
// ENUMERATION MODULES
// =============================================================================

pub mod codec;
pub mod enumeration;
pub mod error;
pub mod member;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use enumeration::{
    Enumeration, MemberListing, absolute_difference, compare, list_all_untyped,
};
pub use error::EnumerationError;
pub use member::{EnumerationType, Member};
pub use registry::{EnumerationRegistry, EnumerationRegistryBuilder};
pub use validation::validate_members;

/// Returns the core crate version.
#[must_use]
pub const fn core_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_crate_compiles() {
        assert!(!core_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
