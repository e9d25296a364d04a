//! Route definitions.
//!
//! A [`Route`] is built once by [`RouterBuilder`](super::RouterBuilder) and is
//! never modified afterwards. Its pattern is classified up front so matching
//! only compares segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::http::handler::HandlerFn;
use crate::routing::param::{classify, Segment};
use crate::routing::segment::segments;
use crate::schema::Schema;

/// Supported request methods. Anything else never matches a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported method: {0}")]
pub struct UnsupportedMethod(pub String);

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(UnsupportedMethod(other.to_string())),
        }
    }
}

/// A route pattern such as `/users/:id.number/posts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Classify every segment of `raw`. Accepts any input.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: segments(raw).into_iter().map(classify).collect(),
        }
    }

    /// The pattern exactly as registered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// First non-empty `/`-separated piece of the raw pattern.
    pub fn base(&self) -> Option<&str> {
        self.raw.split('/').find(|part| !part.is_empty())
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Handler and optional body schema attached to a route.
#[derive(Clone)]
pub struct RouteOptions {
    pub(crate) body_schema: Option<Arc<dyn Schema>>,
    pub(crate) handler: HandlerFn,
}

impl RouteOptions {
    pub fn new(handler: HandlerFn) -> Self {
        Self {
            body_schema: None,
            handler,
        }
    }

    /// Validate request bodies with `schema` before they reach the handler.
    pub fn body_schema<S: Schema + 'static>(mut self, schema: S) -> Self {
        self.body_schema = Some(Arc::new(schema));
        self
    }
}

/// A registered route.
#[derive(Clone)]
pub struct Route {
    pattern: PathPattern,
    method: Method,
    body_schema: Option<Arc<dyn Schema>>,
    handler: HandlerFn,
}

impl Route {
    pub fn new(pattern: &str, method: Method, options: RouteOptions) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            method,
            body_schema: options.body_schema,
            handler: options.handler,
        }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body_schema(&self) -> Option<&dyn Schema> {
        self.body_schema.as_deref()
    }

    pub fn handler(&self) -> &HandlerFn {
        &self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.raw)
            .field("method", &self.method)
            .field("has_body_schema", &self.body_schema.is_some())
            .finish()
    }
}
