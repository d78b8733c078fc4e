//! # enumeration-docs
//!
//! API documentation consumer for registered enumerations.
//!
//! Operation parameters annotated with an [`EnumParameter`] get the members
//! of their enumeration appended to their description, one
//! `value = displayName` line per member in value order.
//!
//! ## Dependency Rules
//!
//! - Depends on `core` for registry lookups and `shared` for error envelopes
//! - Layout options load from JSON or TOML

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod describe;
pub mod error;
pub mod filter;
pub mod options;

pub use describe::{append_member_description, render_member_lines};
pub use error::DocsError;
pub use filter::{EnumOperationFilter, EnumParameter, OperationDoc, ParameterDoc};
pub use options::{
    DescriptionOptions, MAX_BLANK_LINES, parse_description_options_json,
    parse_description_options_toml,
};

/// Returns the docs crate version.
#[must_use]
pub const fn docs_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_crate_compiles() {
        assert!(!docs_crate_version().is_empty());
    }
}
