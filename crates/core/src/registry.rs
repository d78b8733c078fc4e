//! Runtime registry of enumeration types.
//!
//! Consumers that only know an enumeration by name or `TypeId` (API
//! documentation generators, parameter binders) resolve it here. The
//! registry is assembled once through [`EnumerationRegistryBuilder`] and is
//! read-only afterwards, so it can be shared across threads freely.

use crate::validation::validate_members;
use crate::{Enumeration, EnumerationError, EnumerationType, MemberListing};
use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};

/// Immutable lookup table from type name / `TypeId` to enumeration handle.
#[derive(Debug, Clone, Default)]
pub struct EnumerationRegistry {
    by_name: BTreeMap<&'static str, EnumerationType>,
    by_id: HashMap<TypeId, EnumerationType>,
}

impl EnumerationRegistry {
    /// Start assembling a registry.
    #[must_use]
    pub fn builder() -> EnumerationRegistryBuilder {
        EnumerationRegistryBuilder::default()
    }

    /// Handle registered under `type_name`.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<EnumerationType> {
        self.by_name.get(type_name).copied()
    }

    /// Handle registered for `type_id`.
    #[must_use]
    pub fn get_by_id(&self, type_id: TypeId) -> Option<EnumerationType> {
        self.by_id.get(&type_id).copied()
    }

    /// Resolve `type_name`, failing with `UnknownEnumeration`.
    pub fn resolve(&self, type_name: &str) -> Result<EnumerationType, EnumerationError> {
        self.get(type_name)
            .ok_or_else(|| EnumerationError::UnknownEnumeration {
                type_name: type_name.to_owned(),
            })
    }

    /// Value to display name mapping for the enumeration named `type_name`.
    pub fn list_all(&self, type_name: &str) -> Result<MemberListing, EnumerationError> {
        self.resolve(type_name).map(|enumeration| enumeration.list_all())
    }

    /// Value to display name mapping for the enumeration with `type_id`.
    pub fn list_all_by_id(&self, type_id: TypeId) -> Result<MemberListing, EnumerationError> {
        self.get_by_id(type_id)
            .map(|enumeration| enumeration.list_all())
            .ok_or_else(|| EnumerationError::UnknownEnumeration {
                type_name: format!("{type_id:?}"),
            })
    }

    /// Returns true when `T` is registered.
    pub fn contains<T: Enumeration>(&self) -> bool {
        self.by_id.contains_key(&TypeId::of::<T>())
    }

    /// Registered handles ordered by type name.
    pub fn types(&self) -> impl Iterator<Item = EnumerationType> + '_ {
        self.by_name.values().copied()
    }

    /// Number of registered enumerations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Builder validating each enumeration as it is registered.
#[derive(Debug, Default)]
pub struct EnumerationRegistryBuilder {
    registry: EnumerationRegistry,
}

impl EnumerationRegistryBuilder {
    /// Register `T` after checking its members for duplicates.
    ///
    /// Registering the same type twice is a no-op; registering a different
    /// type under an existing name fails with `DuplicateRegistration`.
    pub fn register<T: Enumeration>(mut self) -> Result<Self, EnumerationError> {
        validate_members::<T>()?;

        let enumeration = EnumerationType::of::<T>();
        if let Some(existing) = self.registry.by_name.get(T::TYPE_NAME) {
            if *existing == enumeration {
                tracing::debug!(type_name = T::TYPE_NAME, "enumeration already registered");
                return Ok(self);
            }
            return Err(EnumerationError::DuplicateRegistration {
                type_name: T::TYPE_NAME,
            });
        }

        self.registry.by_name.insert(T::TYPE_NAME, enumeration);
        self.registry
            .by_id
            .insert(enumeration.type_id(), enumeration);
        tracing::debug!(
            type_name = T::TYPE_NAME,
            members = T::MEMBERS.len(),
            "registered enumeration"
        );
        Ok(self)
    }

    /// Finish assembling the registry.
    #[must_use]
    pub fn build(self) -> EnumerationRegistry {
        self.registry
    }
}
