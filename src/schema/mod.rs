//! Request body validation.
//!
//! # Data Flow
//! ```text
//! Matched route with a body schema:
//!     raw body (Option<Value>)
//!     → Schema::validate
//!     → Validation (Valid | Invalid)
//!     → delivered to the handler as Body::Checked
//! ```
//!
//! # Design Decisions
//! - The validator is opaque to the router: anything implementing [`Schema`]
//! - Validation is advisory; an `Invalid` result still reaches the handler
//! - Absent bodies are passed as `None` so a schema can tell "missing" from
//!   an explicit `null`

pub mod typed;
pub mod types;

use serde_json::Value;

pub use typed::{optional, Optional, Typed};
pub use types::{SchemaError, Validation};

/// A body validator.
///
/// Closures of the form `Fn(Option<&Value>) -> Validation` are schemas.
pub trait Schema: Send + Sync {
    fn validate(&self, value: Option<&Value>) -> Validation;
}

impl<F> Schema for F
where
    F: Fn(Option<&Value>) -> Validation + Send + Sync,
{
    fn validate(&self, value: Option<&Value>) -> Validation {
        self(value)
    }
}
