//! Lookup, comparison, and declaration failures.

use enumeration_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;

/// Failures raised by enumeration lookups, comparisons, and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// No member of the enumeration carries the requested value.
    ValueNotFound {
        /// Enumeration type name.
        type_name: &'static str,
        /// Requested value.
        value: i32,
    },
    /// No member of the enumeration carries the requested display name.
    DisplayNameNotFound {
        /// Enumeration type name.
        type_name: &'static str,
        /// Requested display name (exact, case-sensitive).
        display_name: String,
    },
    /// A runtime type handle does not name a registered enumeration.
    UnknownEnumeration {
        /// Type name or identifier that failed to resolve.
        type_name: String,
    },
    /// Two members of different enumeration types were compared.
    IncompatibleTypes {
        /// Type name of the left-hand member.
        left: &'static str,
        /// Type name of the right-hand member.
        right: &'static str,
    },
    /// Two members of one enumeration share a value.
    DuplicateValue {
        /// Enumeration type name.
        type_name: &'static str,
        /// Shared value.
        value: i32,
        /// Display name of the first member declared with the value.
        first: &'static str,
        /// Display name of the later member declared with the value.
        second: &'static str,
    },
    /// Two members of one enumeration share a display name.
    DuplicateDisplayName {
        /// Enumeration type name.
        type_name: &'static str,
        /// Shared display name.
        display_name: &'static str,
        /// Value of the first member declared with the display name.
        first: i32,
        /// Value of the later member declared with the display name.
        second: i32,
    },
    /// A registry already holds a different enumeration under this name.
    DuplicateRegistration {
        /// Enumeration type name.
        type_name: &'static str,
    },
}

impl EnumerationError {
    /// Returns true for `ValueNotFound` and `DisplayNameNotFound`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ValueNotFound { .. } | Self::DisplayNameNotFound { .. }
        )
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::ValueNotFound { .. } | Self::DisplayNameNotFound { .. } => {
                ErrorCode::new("enumeration", "not_found")
            },
            Self::UnknownEnumeration { .. } => ErrorCode::new("enumeration", "invalid_argument"),
            Self::IncompatibleTypes { .. } => ErrorCode::new("enumeration", "incompatible_types"),
            Self::DuplicateValue { .. } | Self::DuplicateDisplayName { .. } => {
                ErrorCode::new("enumeration", "duplicate_member")
            },
            Self::DuplicateRegistration { .. } => {
                ErrorCode::new("enumeration", "duplicate_registration")
            },
        }
    }

    const fn is_invariant(&self) -> bool {
        matches!(
            self,
            Self::IncompatibleTypes { .. }
                | Self::DuplicateValue { .. }
                | Self::DuplicateDisplayName { .. }
                | Self::DuplicateRegistration { .. }
        )
    }
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueNotFound { type_name, value } => {
                write!(formatter, "'{value}' is not a valid value in {type_name}")
            },
            Self::DisplayNameNotFound {
                type_name,
                display_name,
            } => write!(
                formatter,
                "'{display_name}' is not a valid display name in {type_name}"
            ),
            Self::UnknownEnumeration { type_name } => {
                write!(formatter, "'{type_name}' is not a registered enumeration type")
            },
            Self::IncompatibleTypes { left, right } => {
                write!(formatter, "cannot compare {left} with {right}")
            },
            Self::DuplicateValue {
                type_name,
                value,
                first,
                second,
            } => write!(
                formatter,
                "{type_name} declares value {value} twice ('{first}' and '{second}')"
            ),
            Self::DuplicateDisplayName {
                type_name,
                display_name,
                first,
                second,
            } => write!(
                formatter,
                "{type_name} declares display name '{display_name}' twice (values {first} and {second})"
            ),
            Self::DuplicateRegistration { type_name } => {
                write!(formatter, "enumeration '{type_name}' is already registered")
            },
        }
    }
}

impl std::error::Error for EnumerationError {}

impl From<EnumerationError> for ErrorEnvelope {
    fn from(error: EnumerationError) -> Self {
        let mut envelope = if error.is_invariant() {
            Self::invariant(error.error_code(), error.to_string())
        } else {
            Self::expected(error.error_code(), error.to_string())
        };

        match error {
            EnumerationError::ValueNotFound { type_name, value } => {
                envelope = envelope
                    .with_metadata("type_name", type_name)
                    .with_metadata("value", value.to_string());
            },
            EnumerationError::DisplayNameNotFound {
                type_name,
                display_name,
            } => {
                envelope = envelope
                    .with_metadata("type_name", type_name)
                    .with_metadata("display_name", display_name);
            },
            EnumerationError::UnknownEnumeration { type_name } => {
                envelope = envelope.with_metadata("type_name", type_name);
            },
            EnumerationError::IncompatibleTypes { left, right } => {
                envelope = envelope
                    .with_metadata("left", left)
                    .with_metadata("right", right);
            },
            EnumerationError::DuplicateValue {
                type_name, value, ..
            } => {
                envelope = envelope
                    .with_metadata("type_name", type_name)
                    .with_metadata("value", value.to_string());
            },
            EnumerationError::DuplicateDisplayName {
                type_name,
                display_name,
                ..
            } => {
                envelope = envelope
                    .with_metadata("type_name", type_name)
                    .with_metadata("display_name", display_name);
            },
            EnumerationError::DuplicateRegistration { type_name } => {
                envelope = envelope.with_metadata("type_name", type_name);
            },
        }

        envelope
    }
}
