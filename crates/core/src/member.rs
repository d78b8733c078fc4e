//! Type-erased enumeration handles.
//!
//! [`EnumerationType`] lets callers that only hold a runtime handle (a
//! registry entry, a documentation annotation) list and look up members.
//! [`Member`] carries one member together with its owning type so equality
//! and ordering stay type-discriminating after erasure.

use crate::{Enumeration, EnumerationError, MemberListing};
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime handle for one enumeration type.
#[derive(Clone, Copy)]
pub struct EnumerationType {
    type_id: TypeId,
    name: &'static str,
    members: fn() -> Vec<Member>,
}

impl EnumerationType {
    /// Handle for `T`.
    pub fn of<T: Enumeration>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::TYPE_NAME,
            members: erased_members::<T>,
        }
    }

    /// Declared type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rust type identifier of the concrete enumeration.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns true when this handle refers to `T`.
    pub fn is<T: Enumeration>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// All declared members, erased, in declaration order.
    pub fn members(&self) -> Vec<Member> {
        (self.members)()
    }

    /// Value to display name mapping, ordered by value.
    pub fn list_all(&self) -> MemberListing {
        let mut listing = MemberListing::new();
        for member in self.members() {
            listing
                .entry(member.value)
                .or_insert(member.display_name);
        }
        listing
    }

    /// Look up an erased member by value.
    pub fn from_value(&self, value: i32) -> Result<Member, EnumerationError> {
        self.members()
            .into_iter()
            .find(|member| member.value == value)
            .ok_or(EnumerationError::ValueNotFound {
                type_name: self.name,
                value,
            })
    }

    /// Look up an erased member by exact display name.
    pub fn from_display_name(&self, display_name: &str) -> Result<Member, EnumerationError> {
        self.members()
            .into_iter()
            .find(|member| member.display_name == display_name)
            .ok_or_else(|| EnumerationError::DisplayNameNotFound {
                type_name: self.name,
                display_name: display_name.to_owned(),
            })
    }
}

fn erased_members<T: Enumeration>() -> Vec<Member> {
    T::MEMBERS.iter().copied().map(Member::new).collect()
}

impl PartialEq for EnumerationType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EnumerationType {}

impl Hash for EnumerationType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for EnumerationType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EnumerationType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One enumeration member with its owning type erased.
///
/// Equality and hashing include the owning type: members of two different
/// enumerations are never equal, even with the same value. Ordering across
/// types is undefined (`partial_cmp` returns `None`,
/// [`Member::try_compare`] returns [`EnumerationError::IncompatibleTypes`]).
#[derive(Clone, Copy)]
pub struct Member {
    enumeration: EnumerationType,
    value: i32,
    display_name: &'static str,
}

impl Member {
    /// Erase a typed member.
    pub fn new<T: Enumeration>(member: T) -> Self {
        Self {
            enumeration: EnumerationType::of::<T>(),
            value: member.value(),
            display_name: member.display_name(),
        }
    }

    /// Integer discriminator.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Owning enumeration type.
    #[must_use]
    pub const fn enumeration(&self) -> EnumerationType {
        self.enumeration
    }

    /// Returns true when the member belongs to `T`.
    pub fn is<T: Enumeration>(&self) -> bool {
        self.enumeration.is::<T>()
    }

    /// Recover the typed member when it belongs to `T`.
    pub fn downcast<T: Enumeration>(&self) -> Option<T> {
        if !self.is::<T>() {
            return None;
        }
        T::MEMBERS
            .iter()
            .find(|member| {
                member.value() == self.value && member.display_name() == self.display_name
            })
            .copied()
    }

    /// Compare by value, rejecting members of different enumerations.
    pub fn try_compare(&self, other: &Self) -> Result<Ordering, EnumerationError> {
        self.ensure_compatible(other)?;
        Ok(self.value.cmp(&other.value))
    }

    /// Absolute distance between values, rejecting members of different
    /// enumerations.
    pub fn absolute_difference(&self, other: &Self) -> Result<u32, EnumerationError> {
        self.ensure_compatible(other)?;
        Ok(self.value.abs_diff(other.value))
    }

    fn ensure_compatible(&self, other: &Self) -> Result<(), EnumerationError> {
        if self.enumeration == other.enumeration {
            Ok(())
        } else {
            Err(EnumerationError::IncompatibleTypes {
                left: self.enumeration.name,
                right: other.enumeration.name,
            })
        }
    }
}

impl<T: Enumeration> From<T> for Member {
    fn from(member: T) -> Self {
        Self::new(member)
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.enumeration == other.enumeration && self.value == other.value
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.enumeration.hash(state);
        self.value.hash(state);
    }
}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_compare(other).ok()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.display_name)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Member")
            .field("type_name", &self.enumeration.name)
            .field("value", &self.value)
            .field("display_name", &self.display_name)
            .finish()
    }
}
