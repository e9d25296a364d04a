//! Route segment classification and extracted parameters.
//!
//! # Responsibilities
//! - Classify a pattern segment as literal text or a named parameter
//! - Carry the declared parameter type (`:id.number`) alongside the name
//! - Hold the raw values bound during a match
//!
//! # Design Decisions
//! - Classification is total: an unrecognized type suffix still yields a
//!   parameter, marked [`ParamType::Unknown`]
//! - Bound values stay raw strings; coercion only happens on request through
//!   [`Params::typed`], which is where a bad type suffix becomes an error

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use thiserror::Error;

/// Declared type of a path parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParamType {
    #[default]
    String,
    Number,
    /// Suffix that is not a recognized type, kept verbatim.
    Unknown(String),
}

impl ParamType {
    /// Parse a type suffix. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "string" => ParamType::String,
            "number" => ParamType::Number,
            other => ParamType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => f.write_str("string"),
            ParamType::Number => f.write_str("number"),
            ParamType::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// One classified pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the incoming segment exactly.
    Literal(String),
    /// Binds whatever the incoming segment holds.
    Param { name: String, ty: ParamType },
}

/// Classify a single pattern segment.
///
/// `:name` is a string parameter, `:name.type` a parameter of that type (split
/// on the first `.`), anything else is a literal.
///
/// ```
/// use segment_router::routing::{classify, ParamType, Segment};
///
/// assert_eq!(
///     classify(":id.number"),
///     Segment::Param { name: "id".into(), ty: ParamType::Number }
/// );
/// assert_eq!(classify("users"), Segment::Literal("users".into()));
/// ```
pub fn classify(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(spec) => {
            let (name, ty) = spec
                .split_once('.')
                .map(|(name, ty)| (name, ParamType::parse(ty)))
                .unwrap_or((spec, ParamType::String));
            Segment::Param {
                name: name.to_string(),
                ty,
            }
        }
        None => Segment::Literal(segment.to_string()),
    }
}

/// A parameter value coerced to its declared type.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Number(f64),
}

/// Errors from [`Params::typed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("no parameter named `{0}` was bound")]
    Missing(String),

    #[error("parameter `{name}` declares unknown type `{declared}`")]
    UnknownType { name: String, declared: ParamType },

    #[error("parameter `{name}` is not a number: `{value}`")]
    NotANumber { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    name: String,
    ty: ParamType,
    value: String,
}

/// Parameters extracted from a matched path, in pattern order.
///
/// Serializes as a JSON object of raw string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    bindings: Vec<Binding>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value. Rebinding a name keeps its position and takes the new value.
    pub(crate) fn bind(&mut self, name: &str, ty: &ParamType, value: &str) {
        match self.bindings.iter_mut().find(|b| b.name == name) {
            Some(existing) => {
                existing.ty = ty.clone();
                existing.value = value.to_string();
            }
            None => self.bindings.push(Binding {
                name: name.to_string(),
                ty: ty.clone(),
                value: value.to_string(),
            }),
        }
    }

    /// Raw value bound under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.binding(name).map(|b| b.value.as_str())
    }

    /// Value bound under `name`, coerced to the type its pattern declared.
    pub fn typed(&self, name: &str) -> Result<ParamValue, ParamError> {
        let binding = self
            .binding(name)
            .ok_or_else(|| ParamError::Missing(name.to_string()))?;

        match &binding.ty {
            ParamType::String => Ok(ParamValue::String(binding.value.clone())),
            ParamType::Number => binding
                .value
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(ParamValue::Number)
                .ok_or_else(|| ParamError::NotANumber {
                    name: binding.name.clone(),
                    value: binding.value.clone(),
                }),
            ParamType::Unknown(_) => Err(ParamError::UnknownType {
                name: binding.name.clone(),
                declared: binding.ty.clone(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|b| (b.name.as_str(), b.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.name == name)
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
