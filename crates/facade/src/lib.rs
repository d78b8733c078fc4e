//! # enumeration
//!
//! Facade API for consumers of the enumeration workspace.
//! This crate re-exports `core`, `derive`, `docs`, and `shared` so a single
//! dependency is enough. Derived types must point the macro at this crate:
//!
//! ```
//! use enumeration::Enumeration;
//!
//! #[derive(Debug, Clone, Copy, Enumeration)]
//! #[enumeration(crate = "enumeration")]
//! enum Status {
//!     Active = 1,
//!     Inactive = 2,
//! }
//!
//! assert_eq!(Status::from_value(2), Ok(Status::Inactive));
//! assert_eq!(Status::Active.to_string(), "Active");
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use enumeration_core::{
    Enumeration, EnumerationError, EnumerationRegistry, EnumerationRegistryBuilder,
    EnumerationType, Member, MemberListing, absolute_difference, codec, compare,
    list_all_untyped, validate_members,
};
/// Derive macro for [`Enumeration`].
pub use enumeration_derive::Enumeration;
/// Documentation consumer types.
pub use enumeration_docs::{
    DescriptionOptions, DocsError, EnumOperationFilter, EnumParameter, OperationDoc,
    ParameterDoc, append_member_description, parse_description_options_json,
    parse_description_options_toml, render_member_lines,
};
/// Shared error envelope.
pub use enumeration_shared::{ErrorCode, ErrorEnvelope, ErrorKind};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::error::Error;

    #[derive(Debug, Clone, Copy, Enumeration)]
    #[enumeration(crate = "crate")]
    enum Level {
        Low = 1,
        High = 3,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Ticket {
        #[serde(with = "codec::by_value")]
        level: Level,
        #[serde(with = "codec::by_display_name")]
        escalation: Level,
    }

    #[test]
    fn facade_exposes_the_whole_surface() -> Result<(), Box<dyn Error>> {
        assert!(!facade_crate_version().is_empty());
        assert_eq!(absolute_difference(&Level::Low, &Level::High), 2);

        let registry = EnumerationRegistry::builder().register::<Level>()?.build();
        let mut operation: OperationDoc =
            serde_json::from_str(r#"{"parameters":[{"name":"level"}]}"#)?;
        EnumOperationFilter::new(&registry)
            .apply(&mut operation, &[EnumParameter::of::<Level>("level")])?;
        assert_eq!(
            operation.parameters.first().and_then(|p| p.description.as_deref()),
            Some("1 = Low\n3 = High")
        );
        Ok(())
    }

    #[test]
    fn codecs_bind_through_the_facade() -> Result<(), Box<dyn Error>> {
        let ticket = Ticket {
            level: Level::High,
            escalation: Level::Low,
        };
        let json = serde_json::to_string(&ticket)?;
        assert_eq!(json, r#"{"level":3,"escalation":"Low"}"#);
        assert_eq!(serde_json::from_str::<Ticket>(&json)?, ticket);

        let envelope: ErrorEnvelope = Level::from_value(2)
            .err()
            .map(Into::into)
            .ok_or("expected lookup failure")?;
        assert!(envelope.is_not_found());
        Ok(())
    }
}
