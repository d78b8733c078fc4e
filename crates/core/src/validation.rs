//! Declaration checks for hand-written enumerations.

use crate::{Enumeration, EnumerationError};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Reject duplicate values and duplicate display names in `T::MEMBERS`.
///
/// `#[derive(Enumeration)]` performs the same check at compile time; this
/// is the runtime counterpart for hand-written impls.
pub fn validate_members<T: Enumeration>() -> Result<(), EnumerationError> {
    check_unique(
        T::TYPE_NAME,
        T::MEMBERS
            .iter()
            .map(|member| (member.value(), member.display_name())),
    )
}

fn check_unique(
    type_name: &'static str,
    members: impl IntoIterator<Item = (i32, &'static str)>,
) -> Result<(), EnumerationError> {
    let mut values: BTreeMap<i32, &'static str> = BTreeMap::new();
    let mut names: BTreeMap<&'static str, i32> = BTreeMap::new();

    for (value, display_name) in members {
        match values.entry(value) {
            Entry::Occupied(first) => {
                return Err(EnumerationError::DuplicateValue {
                    type_name,
                    value,
                    first: *first.get(),
                    second: display_name,
                });
            },
            Entry::Vacant(slot) => {
                slot.insert(display_name);
            },
        }
        match names.entry(display_name) {
            Entry::Occupied(first) => {
                return Err(EnumerationError::DuplicateDisplayName {
                    type_name,
                    display_name,
                    first: *first.get(),
                    second: value,
                });
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            },
        }
    }

    Ok(())
}
