//! Route lookup.
//!
//! # Responsibilities
//! - Store registered routes in registration order
//! - Look up the route for a (path, method) pair
//! - Return the matched route with its parameters, or no match
//!
//! # Design Decisions
//! - Immutable after [`RouterBuilder::build`] (thread-safe without locks)
//! - O(n) linear scan; registration order is match priority, so the list is
//!   never reordered or indexed
//! - Method is compared before any segment work
//! - Explicit `None` rather than a silent default route

use std::sync::Arc;

use crate::http::handler::HandlerFn;
use crate::routing::matcher::match_segments;
use crate::routing::param::Params;
use crate::routing::route::{Method, Route, RouteOptions};
use crate::routing::segment::segments;

/// A successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<'r> {
    pub route: &'r Route,
    pub params: Params,
}

/// Ordered, immutable route table.
///
/// Cloning is cheap; clones share the same routes.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Arc<[Route]>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Find the first registered route matching `path` and `method`.
    ///
    /// ```
    /// use segment_router::http::{handler, Response};
    /// use segment_router::routing::{Method, Router};
    ///
    /// let router = Router::builder()
    ///     .get("/users/:id", handler::from_fn(|_| Response::new(200)))
    ///     .build();
    ///
    /// let found = router.match_route("/users/42", Method::Get).unwrap();
    /// assert_eq!(found.params.get("id"), Some("42"));
    /// assert!(router.match_route("/users/42", Method::Post).is_none());
    /// ```
    pub fn match_route(&self, path: &str, method: Method) -> Option<RouteMatch<'_>> {
        let incoming = segments(path);

        self.routes
            .iter()
            .filter(|route| route.method() == method)
            .find_map(|route| {
                match_segments(route.pattern(), &incoming)
                    .map(|params| RouteMatch { route, params })
            })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Accumulates routes, then freezes them into a [`Router`].
///
/// Patterns are not validated and duplicates are accepted; a route shadowed by
/// an earlier one is simply never reached.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Earlier registrations take priority.
    pub fn register(mut self, pattern: &str, method: Method, options: RouteOptions) -> Self {
        self.routes.push(Route::new(pattern, method, options));
        self
    }

    pub fn get(self, pattern: &str, handler: HandlerFn) -> Self {
        self.register(pattern, Method::Get, RouteOptions::new(handler))
    }

    pub fn post(self, pattern: &str, handler: HandlerFn) -> Self {
        self.register(pattern, Method::Post, RouteOptions::new(handler))
    }

    pub fn put(self, pattern: &str, handler: HandlerFn) -> Self {
        self.register(pattern, Method::Put, RouteOptions::new(handler))
    }

    pub fn delete(self, pattern: &str, handler: HandlerFn) -> Self {
        self.register(pattern, Method::Delete, RouteOptions::new(handler))
    }

    pub fn build(self) -> Router {
        tracing::debug!(routes = self.routes.len(), "Router built");
        Router {
            routes: self.routes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::handler;
    use crate::http::Response;

    fn noop() -> HandlerFn {
        handler::from_fn(|_| Response::new(200))
    }

    #[test]
    fn test_empty_router_never_matches() {
        let router = Router::builder().build();
        assert!(router.is_empty());
        assert!(router.match_route("/", Method::Get).is_none());
        assert!(router.match_route("/users", Method::Delete).is_none());
    }

    #[test]
    fn test_first_registered_wins() {
        let router = Router::builder()
            .get("/users/:id", noop())
            .get("/users/me", noop())
            .build();

        let found = router.match_route("/users/me", Method::Get).unwrap();
        assert_eq!(found.route.pattern().raw(), "/users/:id");
        assert_eq!(found.params.get("id"), Some("me"));
    }

    #[test]
    fn test_literal_registered_first_shadows_param() {
        let router = Router::builder()
            .get("/users/me", noop())
            .get("/users/:id", noop())
            .build();

        let found = router.match_route("/users/me", Method::Get).unwrap();
        assert_eq!(found.route.pattern().raw(), "/users/me");
        assert!(found.params.is_empty());

        let found = router.match_route("/users/7", Method::Get).unwrap();
        assert_eq!(found.route.pattern().raw(), "/users/:id");
    }

    #[test]
    fn test_method_filter() {
        let router = Router::builder()
            .post("/users", noop())
            .get("/users", noop())
            .build();

        let found = router.match_route("/users", Method::Get).unwrap();
        assert_eq!(found.route.method(), Method::Get);
        assert!(router.match_route("/users", Method::Put).is_none());
    }

    #[test]
    fn test_mismatch_moves_on_to_next_route() {
        let router = Router::builder()
            .get("/users/:id/posts", noop())
            .get("/users/:id/:test", noop())
            .build();

        let found = router.match_route("/users/10/aaa", Method::Get).unwrap();
        assert_eq!(found.route.pattern().raw(), "/users/:id/:test");
        let collected: Vec<_> = found.params.iter().collect();
        assert_eq!(collected, vec![("id", "10"), ("test", "aaa")]);
    }

    #[test]
    fn test_trailing_slash_is_insignificant() {
        let router = Router::builder().get("users/:id/", noop()).build();
        assert!(router.match_route("/users/1", Method::Get).is_some());
        assert!(router.match_route("users/1/", Method::Get).is_some());
    }

    #[test]
    fn test_clones_share_routes() {
        let router = Router::builder().get("/a", noop()).build();
        let clone = router.clone();
        assert_eq!(clone.len(), 1);
        assert!(std::ptr::eq(router.routes(), clone.routes()));
    }
}
