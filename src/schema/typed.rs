//! Stock schemas built on serde.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use crate::schema::types::{SchemaError, Validation};
use crate::schema::Schema;

/// Accepts any body that deserializes into `T`.
///
/// The validated value is `T` serialized back to JSON, so unknown fields are
/// dropped and defaults are filled in.
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Typed<{}>", std::any::type_name::<T>())
    }
}

impl<T> Schema for Typed<T>
where
    T: DeserializeOwned + Serialize,
{
    fn validate(&self, value: Option<&Value>) -> Validation {
        let Some(value) = value else {
            return Validation::Invalid(SchemaError::new("body is required"));
        };

        let parsed = match T::deserialize(value) {
            Ok(parsed) => parsed,
            Err(e) => return Validation::Invalid(SchemaError::new(e.to_string())),
        };

        match serde_json::to_value(&parsed) {
            Ok(normalized) => Validation::Valid(Some(normalized)),
            Err(e) => Validation::Invalid(SchemaError::new(e.to_string())),
        }
    }
}

/// Lets an absent body through; present bodies go to the inner schema.
#[derive(Debug, Clone)]
pub struct Optional<S>(S);

pub fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional(inner)
}

impl<S: Schema> Schema for Optional<S> {
    fn validate(&self, value: Option<&Value>) -> Validation {
        match value {
            None => Validation::Valid(None),
            Some(_) => self.0.validate(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct Payload {
        test: f64,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn test_typed_accepts_matching_body() {
        let schema = Typed::<Payload>::new();
        let result = schema.validate(Some(&json!({"test": 1, "extra": true})));
        assert_eq!(result, Validation::Valid(Some(json!({"test": 1.0, "tags": []}))));
    }

    #[test]
    fn test_typed_rejects_wrong_shape() {
        let schema = Typed::<Payload>::new();
        let result = schema.validate(Some(&json!({"test": "abc"})));
        let err = result.error().expect("should be invalid");
        assert!(err.message.contains("invalid type"), "{}", err.message);
    }

    #[test]
    fn test_typed_requires_body() {
        let schema = Typed::<Payload>::new();
        assert_eq!(
            schema.validate(None),
            Validation::Invalid(SchemaError::new("body is required"))
        );
    }

    #[test]
    fn test_optional_allows_absent_body() {
        let schema = optional(Typed::<Payload>::new());
        assert_eq!(schema.validate(None), Validation::Valid(None));
        assert!(schema.validate(Some(&json!({"test": 2}))).is_valid());
        assert!(!schema.validate(Some(&json!(null))).is_valid());
    }
}
