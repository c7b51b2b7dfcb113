//! Override editing errors.

use std::fmt;

use crate::property::PropertyType;

/// Errors returned by fallible override edits.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideError {
    /// The value's type does not match the property's declared type.
    TypeMismatch {
        property: String,
        expected: PropertyType,
        found: &'static str,
    },
    /// No override exists for the named property.
    UnknownProperty(String),
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                property,
                expected,
                found,
            } => write!(
                f,
                "type mismatch for '{property}': expected {expected:?}, found {found}"
            ),
            Self::UnknownProperty(name) => write!(f, "unknown property: {name}"),
        }
    }
}

impl std::error::Error for OverrideError {}
