//! Parameter validation.
//!
//! Validates actual argument values against their declared
//! [`ParamConstraint`]s. Base values (strings and integers) are checked
//! directly through their textual form; object-typed parameters enumerate
//! their constrained fields explicitly via [`ValidateParams`] instead of
//! being discovered through runtime introspection.

use crate::constraint::ParamConstraint;
use crate::error::{ForumError, Result};

/// Checks one value against its constraint.
///
/// A value is empty when it is absent or its textual form has zero
/// characters. Length bounds and the regex check only apply to non-empty
/// values; boundary lengths pass.
pub fn check_value(name: &str, value: Option<&str>, constraint: &ParamConstraint) -> Result<()> {
    let is_empty = value.is_none_or(|v| v.is_empty());
    let length = value.map_or(0, |v| v.chars().count());

    if is_empty && constraint.required {
        return Err(ForumError::invalid_parameter(format!(
            "{} is required",
            name
        )));
    }

    if !is_empty {
        if let Some(max) = constraint.max {
            if length > max {
                return Err(ForumError::invalid_parameter(format!(
                    "{} is longer than {} characters",
                    name, max
                )));
            }
        }
        if let Some(min) = constraint.min {
            if length < min {
                return Err(ForumError::invalid_parameter(format!(
                    "{} is shorter than {} characters",
                    name, min
                )));
            }
        }
        // value is non-empty here, unwrap cannot fail
        let text = value.unwrap_or_default();
        if !constraint.regex.matches(text) {
            return Err(ForumError::invalid_parameter(format!(
                "{} does not match the expected format",
                name
            )));
        }
    }

    Ok(())
}

/// One constrained value, extracted from an operation's arguments.
#[derive(Debug, Clone)]
pub struct ConstrainedField {
    pub name: &'static str,
    pub value: Option<String>,
    pub constraint: ParamConstraint,
}

impl ConstrainedField {
    pub fn new(name: &'static str, value: Option<String>, constraint: ParamConstraint) -> Self {
        Self {
            name,
            value,
            constraint,
        }
    }

    /// Field over a string value.
    pub fn text(name: &'static str, value: Option<&str>, constraint: ParamConstraint) -> Self {
        Self::new(name, value.map(str::to_string), constraint)
    }

    /// Field over an integer value, validated through its textual form.
    pub fn integer(name: &'static str, value: Option<i64>, constraint: ParamConstraint) -> Self {
        Self::new(name, value.map(|v| v.to_string()), constraint)
    }
}

/// Checks every field in declaration order; the first violation wins.
pub fn check_fields(fields: &[ConstrainedField]) -> Result<()> {
    for field in fields {
        check_value(field.name, field.value.as_deref(), &field.constraint)?;
    }
    Ok(())
}

/// A validated request type enumerates its own constrained fields.
///
/// This replaces reflection over declared fields: nested values are covered
/// by the implementing type returning fields for them as well.
pub trait ValidateParams {
    fn constrained_fields(&self) -> Vec<ConstrainedField>;

    /// Checks all constrained fields of this value.
    fn validate(&self) -> Result<()> {
        check_fields(&self.constrained_fields())
    }
}
