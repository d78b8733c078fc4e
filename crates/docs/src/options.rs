//! Description rendering options.
//!
//! Options load from JSON or TOML (`camelCase` keys, unknown keys rejected)
//! and are validated before use. Every field has a default matching the
//! classic `value = displayName` layout separated from the existing text by
//! one blank line.

use crate::DocsError;
use enumeration_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};

/// Upper bound for [`DescriptionOptions::blank_lines`].
pub const MAX_BLANK_LINES: u32 = 8;

/// Layout of the member block appended to a parameter description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DescriptionOptions {
    /// Line separator.
    pub newline: String,
    /// Blank lines between existing description text and the member block,
    /// at most [`MAX_BLANK_LINES`]. Negative or non-integer input is a parse
    /// error (`config:invalid_json` / `config:invalid_toml`) rather than a
    /// field-scoped `invalid_description_options`.
    pub blank_lines: u32,
    /// Separator between a member's value and its display name.
    pub item_separator: String,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self {
            newline: "\n".to_string(),
            blank_lines: 1,
            item_separator: " = ".to_string(),
        }
    }
}

impl DescriptionOptions {
    /// Check field constraints.
    pub fn validate(&self) -> Result<(), DocsError> {
        if self.newline.is_empty() {
            return Err(DocsError::InvalidOptions {
                field: "newline",
                reason: "must be non-empty".to_string(),
            });
        }
        if self.item_separator.is_empty() {
            return Err(DocsError::InvalidOptions {
                field: "itemSeparator",
                reason: "must be non-empty".to_string(),
            });
        }
        if self.blank_lines > MAX_BLANK_LINES {
            return Err(DocsError::InvalidOptions {
                field: "blankLines",
                reason: format!("must be at most {MAX_BLANK_LINES}"),
            });
        }
        Ok(())
    }
}

/// Parse description options from a JSON string, applying validation.
pub fn parse_description_options_json(input: &str) -> Result<DescriptionOptions, ErrorEnvelope> {
    let options: DescriptionOptions = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid description options JSON: {error}"),
        )
    })?;

    options.validate()?;
    Ok(options)
}

/// Parse description options from a TOML string, applying validation.
pub fn parse_description_options_toml(input: &str) -> Result<DescriptionOptions, ErrorEnvelope> {
    let options: DescriptionOptions = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid description options TOML: {error}"),
        )
    })?;

    options.validate()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_documents_yield_defaults() -> Result<(), ErrorEnvelope> {
        assert_eq!(
            parse_description_options_json("{}")?,
            DescriptionOptions::default()
        );
        assert_eq!(
            parse_description_options_toml("")?,
            DescriptionOptions::default()
        );
        Ok(())
    }

    #[test]
    fn camel_case_keys_override_defaults() -> Result<(), ErrorEnvelope> {
        let options = parse_description_options_toml(
            "newline = \"\\r\\n\"\nblankLines = 0\nitemSeparator = \": \"\n",
        )?;
        assert_eq!(options.newline, "\r\n");
        assert_eq!(options.blank_lines, 0);
        assert_eq!(options.item_separator, ": ");

        let options = parse_description_options_json(r#"{"itemSeparator":" -> "}"#)?;
        assert_eq!(options.item_separator, " -> ");
        assert_eq!(options.newline, "\n");
        Ok(())
    }

    #[test]
    fn blank_line_limit_is_reported_with_its_bound() {
        let error = parse_description_options_toml("blankLines = 300").err();
        assert_eq!(
            error.map(|error| error.message),
            Some(format!(
                "description option `blankLines` must be at most {MAX_BLANK_LINES}"
            ))
        );

        let error = parse_description_options_json(r#"{"blankLines":-1}"#).err();
        assert_eq!(
            error.map(|error| error.code.code().to_string()),
            Some("invalid_json".to_string())
        );
    }

    #[test]
    fn unknown_keys_and_bad_syntax_are_rejected() {
        let error = parse_description_options_json(r#"{"separator":"x"}"#).err();
        assert_eq!(
            error.map(|error| error.code.code().to_string()),
            Some("invalid_json".to_string())
        );

        let error = parse_description_options_toml("newline = ").err();
        assert_eq!(
            error.map(|error| error.code.code().to_string()),
            Some("invalid_toml".to_string())
        );
    }

    #[test]
    fn constraint_violations_surface_the_field() {
        let cases = [
            (r#"{"newline":""}"#, "newline"),
            (r#"{"itemSeparator":""}"#, "itemSeparator"),
            (r#"{"blankLines":9}"#, "blankLines"),
            (r#"{"blankLines":300}"#, "blankLines"),
        ];
        for (input, field) in cases {
            let error = parse_description_options_json(input).err();
            assert_eq!(
                error
                    .as_ref()
                    .map(|error| error.code.code().to_string()),
                Some("invalid_description_options".to_string())
            );
            assert_eq!(
                error.and_then(|error| error.metadata.get("field").cloned()),
                Some(field.to_string())
            );
        }
    }
}
