//! Operation documentation filter.
//!
//! An [`EnumParameter`] annotation marks an operation parameter as backed by
//! a registered enumeration. [`EnumOperationFilter::apply`] appends the
//! member block of each annotated enumeration to the parameter description.

use crate::{DescriptionOptions, DocsError, append_member_description};
use enumeration_core::{Enumeration, EnumerationRegistry, MemberListing};
use serde::{Deserialize, Serialize};

/// A documented API operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDoc {
    /// Operation parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDoc>,
}

impl OperationDoc {
    fn parameter_mut(&mut self, name: &str) -> Option<&mut ParameterDoc> {
        self.parameters
            .iter_mut()
            .find(|parameter| parameter.name == name)
    }
}

/// A documented operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDoc {
    /// Parameter name.
    pub name: String,
    /// Free-form description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParameterDoc {
    /// Parameter with an optional description.
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(ToOwned::to_owned),
        }
    }
}

/// Annotation binding a parameter to an enumeration type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumParameter {
    /// Name of the annotated parameter.
    pub parameter: String,
    /// Registered type name of the backing enumeration.
    pub enumeration: String,
}

impl EnumParameter {
    /// Bind `parameter` to the enumeration registered as `enumeration`.
    #[must_use]
    pub fn new(parameter: impl Into<String>, enumeration: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            enumeration: enumeration.into(),
        }
    }

    /// Bind `parameter` to `T`.
    #[must_use]
    pub fn of<T: Enumeration>(parameter: impl Into<String>) -> Self {
        Self::new(parameter, T::TYPE_NAME)
    }
}

/// Appends enumeration members to annotated parameter descriptions.
#[derive(Debug, Clone)]
pub struct EnumOperationFilter<'a> {
    registry: &'a EnumerationRegistry,
    options: DescriptionOptions,
}

impl<'a> EnumOperationFilter<'a> {
    /// Filter using the default description layout.
    #[must_use]
    pub fn new(registry: &'a EnumerationRegistry) -> Self {
        Self {
            registry,
            options: DescriptionOptions::default(),
        }
    }

    /// Filter using a custom layout, rejecting invalid options.
    pub fn with_options(
        registry: &'a EnumerationRegistry,
        options: DescriptionOptions,
    ) -> Result<Self, DocsError> {
        options.validate()?;
        Ok(Self { registry, options })
    }

    /// Describe every annotated parameter of `operation`.
    ///
    /// All annotations are resolved before the operation is touched, so an
    /// unknown enumeration leaves it unchanged. Returns the number of
    /// parameters whose description was extended.
    pub fn apply(
        &self,
        operation: &mut OperationDoc,
        annotations: &[EnumParameter],
    ) -> Result<usize, DocsError> {
        let resolved = annotations
            .iter()
            .map(|annotation| {
                self.registry
                    .list_all(&annotation.enumeration)
                    .map(|listing| (annotation, listing))
            })
            .collect::<Result<Vec<(&EnumParameter, MemberListing)>, _>>()?;

        let mut described = 0;
        for (annotation, listing) in resolved {
            let Some(parameter) = operation.parameter_mut(&annotation.parameter) else {
                tracing::warn!(
                    parameter = %annotation.parameter,
                    enumeration = %annotation.enumeration,
                    "annotated parameter not present on operation"
                );
                continue;
            };

            parameter.description = Some(append_member_description(
                parameter.description.as_deref(),
                &listing,
                &self.options,
            ));
            described += 1;
            tracing::debug!(
                parameter = %annotation.parameter,
                enumeration = %annotation.enumeration,
                members = listing.len(),
                "described enumeration parameter"
            );
        }
        Ok(described)
    }
}
