//! Segment-based request router.
//!
//! Routes are `(pattern, method)` pairs registered in order; a request is
//! matched by a linear scan where the first compatible route wins. Patterns
//! are `/`-separated literals and `:name` or `:name.type` parameters.
//!
//! ```
//! use segment_router::http::{from_fn, Request, Response};
//! use segment_router::routing::{Method, Router};
//! use serde_json::json;
//!
//! let router = Router::builder()
//!     .get("/users", from_fn(|_| Response::ok(json!([]))))
//!     .get("/users/:id", from_fn(|req: Request| {
//!         Response::ok(json!({ "id": req.params.get("id") }))
//!     }))
//!     .build();
//!
//! let found = router.match_route("/users/42", Method::Get).unwrap();
//! assert_eq!(found.route.pattern().raw(), "/users/:id");
//! assert_eq!(found.params.get("id"), Some("42"));
//! ```

pub mod config;
pub mod demo;
pub mod http;
pub mod observability;
pub mod routing;
pub mod schema;

pub use config::ServerConfig;
pub use http::{dispatch, HttpServer, Request, Response};
pub use routing::{Method, Router, RouterBuilder};
