//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     RouterBuilder::register(pattern, method, options)
//!     → segment.rs (split pattern)
//!     → param.rs (classify each segment: literal or :param[.type])
//!     → Freeze as immutable Router
//!
//! Incoming request (path, method):
//!     → segment.rs (split path)
//!     → router.rs (scan routes in registration order, method first)
//!     → matcher.rs (compare segments, bind params)
//!     → Return: RouteMatch or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex, no wildcards, no trie
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by registration)

pub mod matcher;
pub mod param;
pub mod route;
pub mod router;
pub mod segment;

pub use param::{classify, ParamError, ParamType, ParamValue, Params, Segment};
pub use route::{Method, PathPattern, Route, RouteOptions, UnsupportedMethod};
pub use router::{RouteMatch, Router, RouterBuilder};
pub use segment::segments;
