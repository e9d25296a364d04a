//! Validation result types.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Why a body failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("{message}")]
pub struct SchemaError {
    /// Location of the offending field, when the validator knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl SchemaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }

    pub fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
        }
    }
}

/// Outcome of validating a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Parsed value; `None` when the schema accepted an absent body.
    Valid(Option<Value>),
    Invalid(SchemaError),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Validation::Valid(value) => value.as_ref(),
            Validation::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SchemaError> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Option<Value>, SchemaError> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(err) => Err(err),
        }
    }
}

/// `{"success": true, "data": ...}` or `{"success": false, "error": {...}}`.
impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Validation", 2)?;
        match self {
            Validation::Valid(value) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", value)?;
            }
            Validation::Invalid(err) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", err)?;
            }
        }
        state.end()
    }
}
