//! The `Enumeration` trait and typed lookups.

use crate::EnumerationError;
use crate::member::EnumerationType;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Value to display name mapping for one enumeration, ordered by value.
pub type MemberListing = BTreeMap<i32, &'static str>;

/// A closed set of named, integer-valued members.
///
/// Implementors declare every member once in [`Enumeration::MEMBERS`]; all
/// discovery and lookup is derived from that table. The usual way to
/// implement this trait is `#[derive(Enumeration)]` on a unit-only enum,
/// which also rejects duplicate values and display names at compile time.
/// Hand-written impls should be checked with
/// [`validate_members`](crate::validate_members) (the registry does this on
/// registration).
///
/// # Example
///
/// ```
/// use enumeration_core::{Enumeration, EnumerationError};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub struct Level {
///     value: i32,
///     name: &'static str,
/// }
///
/// impl Level {
///     pub const LOW: Self = Self { value: 1, name: "Low" };
///     pub const HIGH: Self = Self { value: 2, name: "High" };
/// }
///
/// impl Enumeration for Level {
///     const TYPE_NAME: &'static str = "Level";
///     const MEMBERS: &'static [Self] = &[Self::LOW, Self::HIGH];
///
///     fn value(&self) -> i32 {
///         self.value
///     }
///
///     fn display_name(&self) -> &'static str {
///         self.name
///     }
/// }
///
/// assert_eq!(Level::from_value(2), Ok(Level::HIGH));
/// assert!(matches!(
///     Level::from_display_name("low"),
///     Err(EnumerationError::DisplayNameNotFound { .. })
/// ));
/// ```
pub trait Enumeration: Copy + 'static {
    /// Stable type name used by registries and error messages.
    const TYPE_NAME: &'static str;

    /// Every declared member, in declaration order.
    const MEMBERS: &'static [Self];

    /// Integer discriminator of this member.
    fn value(&self) -> i32;

    /// Human-readable label of this member.
    fn display_name(&self) -> &'static str;

    /// All declared members in declaration order.
    fn list_all() -> Vec<Self> {
        Self::MEMBERS.to_vec()
    }

    /// Declared members accepted by `predicate`, in declaration order.
    fn list_all_where<P>(mut predicate: P) -> Vec<Self>
    where
        P: FnMut(&Self) -> bool,
    {
        Self::MEMBERS
            .iter()
            .filter(|member| predicate(member))
            .copied()
            .collect()
    }

    /// Look up the member carrying `value`.
    fn from_value(value: i32) -> Result<Self, EnumerationError> {
        Self::MEMBERS
            .iter()
            .find(|member| member.value() == value)
            .copied()
            .ok_or(EnumerationError::ValueNotFound {
                type_name: Self::TYPE_NAME,
                value,
            })
    }

    /// Look up the member whose display name equals `display_name` exactly.
    fn from_display_name(display_name: &str) -> Result<Self, EnumerationError> {
        Self::MEMBERS
            .iter()
            .find(|member| member.display_name() == display_name)
            .copied()
            .ok_or_else(|| EnumerationError::DisplayNameNotFound {
                type_name: Self::TYPE_NAME,
                display_name: display_name.to_owned(),
            })
    }

    /// Returns true when a member carries `value`.
    fn is_valid_value(value: i32) -> bool {
        Self::MEMBERS.iter().any(|member| member.value() == value)
    }

    /// Returns true when a member's display name equals `display_name` exactly.
    fn is_valid_display_name(display_name: &str) -> bool {
        Self::MEMBERS
            .iter()
            .any(|member| member.display_name() == display_name)
    }

    /// Value to display name mapping. The first declared member wins when
    /// an unvalidated impl repeats a value.
    fn listing() -> MemberListing {
        let mut listing = MemberListing::new();
        for member in Self::MEMBERS {
            listing
                .entry(member.value())
                .or_insert_with(|| member.display_name());
        }
        listing
    }

    /// Compare two members by value.
    fn compare_to(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// Runtime handle for this enumeration type.
    fn enumeration_type() -> EnumerationType {
        EnumerationType::of::<Self>()
    }
}

/// Compare two members of the same enumeration by value.
pub fn compare<T: Enumeration>(left: &T, right: &T) -> Ordering {
    left.compare_to(right)
}

/// Absolute distance between the values of two members.
pub fn absolute_difference<T: Enumeration>(left: &T, right: &T) -> u32 {
    left.value().abs_diff(right.value())
}

/// List the members behind a runtime type handle.
pub fn list_all_untyped(enumeration: EnumerationType) -> MemberListing {
    enumeration.list_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Empty, Priority, Shade};
    use proptest::prelude::*;

    #[test]
    fn list_all_returns_members_in_declaration_order() {
        assert_eq!(
            Priority::list_all(),
            vec![Priority::HIGH, Priority::LOW, Priority::URGENT]
        );
        assert_eq!(Priority::list_all(), Priority::list_all());
        assert!(Empty::list_all().is_empty());
    }

    #[test]
    fn list_all_where_filters_without_reordering() {
        let positive = Priority::list_all_where(|member| member.value() > 0);
        assert_eq!(positive, vec![Priority::HIGH, Priority::LOW]);
        assert!(Priority::list_all_where(|_| false).is_empty());
    }

    #[test]
    fn lookups_hit_and_miss() {
        assert_eq!(Priority::from_value(-5), Ok(Priority::URGENT));
        assert_eq!(Priority::from_display_name("Low"), Ok(Priority::LOW));
        assert_eq!(
            Priority::from_value(7),
            Err(EnumerationError::ValueNotFound {
                type_name: "Priority",
                value: 7,
            })
        );
        assert_eq!(
            Priority::from_display_name("low"),
            Err(EnumerationError::DisplayNameNotFound {
                type_name: "Priority",
                display_name: "low".to_string(),
            })
        );
        assert!(Priority::is_valid_value(10));
        assert!(!Priority::is_valid_value(0));
        assert!(Priority::is_valid_display_name("Urgent"));
        assert!(!Priority::is_valid_display_name("URGENT"));
        assert!(!Empty::is_valid_value(0));
    }

    #[test]
    fn listing_is_ordered_by_value() {
        let listing = Priority::listing();
        let entries: Vec<(i32, &str)> = listing.into_iter().collect();
        assert_eq!(entries, vec![(-5, "Urgent"), (1, "Low"), (10, "High")]);
    }

    #[test]
    fn listing_keeps_first_declared_duplicate() {
        assert_eq!(Shade::listing().get(&1), Some(&"Light"));
        assert_eq!(Shade::from_value(1), Ok(Shade::LIGHT));
    }

    #[test]
    fn compare_and_difference_use_values() {
        assert_eq!(compare(&Priority::LOW, &Priority::HIGH), Ordering::Less);
        assert_eq!(Priority::URGENT.compare_to(&Priority::LOW), Ordering::Less);
        assert_eq!(absolute_difference(&Priority::URGENT, &Priority::HIGH), 15);
        assert_eq!(absolute_difference(&Priority::HIGH, &Priority::HIGH), 0);
    }

    #[test]
    fn untyped_listing_matches_typed_listing() {
        let handle = Priority::enumeration_type();
        assert_eq!(handle.name(), "Priority");
        assert_eq!(list_all_untyped(handle), Priority::listing());
    }

    fn priority() -> impl Strategy<Value = Priority> {
        proptest::sample::select(Priority::list_all())
    }

    proptest! {
        #[test]
        fn lookup_round_trips_every_member(member in priority()) {
            prop_assert_eq!(Priority::from_value(member.value()), Ok(member));
            prop_assert_eq!(Priority::from_display_name(member.display_name()), Ok(member));
        }

        #[test]
        fn undeclared_values_are_rejected(value in any::<i32>()) {
            prop_assume!(![-5, 1, 10].contains(&value));
            prop_assert!(!Priority::is_valid_value(value));
            prop_assert!(Priority::from_value(value).is_err_and(|error| error.is_not_found()));
        }

        #[test]
        fn absolute_difference_is_symmetric(a in priority(), b in priority()) {
            prop_assert_eq!(absolute_difference(&a, &b), absolute_difference(&b, &a));
            prop_assert_eq!(absolute_difference(&a, &b) == 0, a.value() == b.value());
            prop_assert_eq!(compare(&a, &b), a.value().cmp(&b.value()));
        }
    }
}
