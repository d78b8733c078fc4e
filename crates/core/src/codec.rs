//! Serde bindings for enumeration members.
//!
//! Use with `#[serde(with = "...")]`:
//!
//! ```
//! use enumeration_core::Enumeration;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub struct Flag(i32, &'static str);
//!
//! impl Enumeration for Flag {
//!     const TYPE_NAME: &'static str = "Flag";
//!     const MEMBERS: &'static [Self] = &[Flag(0, "Off"), Flag(1, "On")];
//!
//!     fn value(&self) -> i32 {
//!         self.0
//!     }
//!
//!     fn display_name(&self) -> &'static str {
//!         self.1
//!     }
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Query {
//!     #[serde(with = "enumeration_core::codec::by_value")]
//!     flag: Flag,
//! }
//!
//! let query: Query = serde_json::from_str(r#"{"flag":1}"#).unwrap();
//! assert_eq!(query.flag, Flag(1, "On"));
//! assert!(serde_json::from_str::<Query>(r#"{"flag":7}"#).is_err());
//! ```

/// Encode a member as its integer value.
pub mod by_value {
    use crate::Enumeration;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `member` as its value.
    pub fn serialize<T, S>(member: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Enumeration,
        S: Serializer,
    {
        serializer.serialize_i32(member.value())
    }

    /// Deserialize a value and resolve it to a declared member.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Enumeration,
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        T::from_value(value).map_err(D::Error::custom)
    }
}

/// Encode a member as its display name.
pub mod by_display_name {
    use crate::Enumeration;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `member` as its display name.
    pub fn serialize<T, S>(member: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Enumeration,
        S: Serializer,
    {
        serializer.serialize_str(member.display_name())
    }

    /// Deserialize a display name and resolve it to a declared member.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Enumeration,
        D: Deserializer<'de>,
    {
        let display_name = String::deserialize(deserializer)?;
        T::from_display_name(&display_name).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{Color, Priority};
    use serde::{Deserialize, Serialize};
    use std::error::Error;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Filter {
        #[serde(with = "crate::codec::by_value")]
        priority: Priority,
        #[serde(with = "crate::codec::by_display_name")]
        color: Color,
    }

    #[test]
    fn members_serialize_by_value_and_name() -> Result<(), Box<dyn Error>> {
        let filter = Filter {
            priority: Priority::URGENT,
            color: Color::Blue,
        };
        let value = serde_json::to_value(&filter)?;
        assert_eq!(
            value,
            serde_json::json!({ "priority": -5, "color": "Blue" })
        );

        let decoded: Filter = serde_json::from_value(value)?;
        assert_eq!(decoded, filter);
        Ok(())
    }

    #[test]
    fn unknown_members_fail_with_lookup_message() {
        let error = serde_json::from_str::<Filter>(r#"{"priority":3,"color":"Red"}"#)
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert!(error.contains("'3' is not a valid value in Priority"));

        let error = serde_json::from_str::<Filter>(r#"{"priority":1,"color":"red"}"#)
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert!(error.contains("'red' is not a valid display name in Color"));
    }
}
