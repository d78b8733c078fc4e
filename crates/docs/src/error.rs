//! Documentation consumer errors.

use enumeration_core::EnumerationError;
use enumeration_shared::{ErrorCode, ErrorEnvelope};

/// Failures raised while configuring or applying the operation filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocsError {
    /// An annotation names an enumeration the registry does not know.
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    /// A description option failed validation.
    #[error("description option `{field}` {reason}")]
    InvalidOptions {
        /// Option name as written in config files (e.g. `itemSeparator`).
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<DocsError> for ErrorEnvelope {
    fn from(error: DocsError) -> Self {
        match error {
            DocsError::Enumeration(inner) => inner.into(),
            DocsError::InvalidOptions { field, .. } => Self::expected(
                ErrorCode::new("config", "invalid_description_options"),
                error.to_string(),
            )
            .with_metadata("field", field),
        }
    }
}
