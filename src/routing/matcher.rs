//! Pattern-against-path comparison.
//!
//! # Design Decisions
//! - Segment counts must be equal: no prefix matches, nothing absorbs extra
//!   segments
//! - Parameter segments accept any value, including the empty string
//! - The first literal mismatch abandons the pattern; partial bindings are
//!   dropped with it

use crate::routing::param::{Params, Segment};
use crate::routing::route::PathPattern;

/// Match already-split request segments against `pattern`.
///
/// Returns the bound parameters on success.
pub fn match_segments(pattern: &PathPattern, incoming: &[&str]) -> Option<Params> {
    if pattern.segments().len() != incoming.len() {
        return None;
    }

    let mut params = Params::new();
    for (segment, value) in pattern.segments().iter().zip(incoming) {
        match segment {
            Segment::Param { name, ty } => params.bind(name, ty, value),
            Segment::Literal(text) if text == value => {}
            Segment::Literal(_) => return None,
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::segment::segments;

    fn matches(pattern: &str, path: &str) -> Option<Params> {
        match_segments(&PathPattern::parse(pattern), &segments(path))
    }

    #[test]
    fn test_literal_match() {
        let params = matches("/users", "/users").unwrap();
        assert!(params.is_empty());
        assert!(matches("/users", "/posts").is_none());
    }

    #[test]
    fn test_param_binds_raw_value() {
        let params = matches("/users/:id.number", "/users/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));
    }

    #[test]
    fn test_segment_count_must_agree() {
        assert!(matches("/users/:id", "/users/1/2").is_none());
        assert!(matches("/users/:id", "/users").is_none());
        assert!(matches("/:a/:b", "/x/y/z").is_none());
    }

    #[test]
    fn test_late_literal_mismatch_rejects() {
        assert!(matches("/users/:id/posts", "/users/1/comments").is_none());
    }

    #[test]
    fn test_param_accepts_empty_segment() {
        let params = matches("/users/:id", "/users//").unwrap();
        assert_eq!(params.get("id"), Some(""));
    }

    #[test]
    fn test_root_only_matches_root() {
        assert!(matches("/", "/").is_some());
        assert!(matches("/", "").is_some());
        assert!(matches("/", "/users").is_none());
        assert!(matches("/users", "/").is_none());
    }
}
