//! The request object handed to route handlers.
//!
//! # Responsibilities
//! - Describe which pattern matched (raw text and base segment)
//! - Carry the extracted path parameters as raw strings
//! - Carry the body: raw input, or the schema's verdict on it

use serde::Serialize;
use serde_json::Value;

use crate::routing::{Params, PathPattern};
use crate::schema::Validation;

/// Metadata about the matched pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    /// The pattern as registered, e.g. `/users/:id/:test`.
    pub raw: String,
    /// First non-empty segment of the pattern; `None` for the root pattern.
    pub base: Option<String>,
}

impl From<&PathPattern> for PathInfo {
    fn from(pattern: &PathPattern) -> Self {
        Self {
            raw: pattern.raw().to_string(),
            base: pattern.base().map(str::to_string),
        }
    }
}

/// Request body as seen by a handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// The route has no schema; this is the input untouched.
    Raw(Option<Value>),
    /// The route has a schema; this is its result, valid or not.
    Checked(Validation),
}

impl Body {
    /// The schema result, if the route declared a schema.
    pub fn validation(&self) -> Option<&Validation> {
        match self {
            Body::Raw(_) => None,
            Body::Checked(validation) => Some(validation),
        }
    }

    /// The usable value: the raw input, or the validated value when valid.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Body::Raw(value) => value.as_ref(),
            Body::Checked(validation) => validation.value(),
        }
    }
}

/// A matched request.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub path: PathInfo,
    pub params: Params,
    pub body: Body,
}
