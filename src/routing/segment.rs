//! Path normalization and splitting.
//!
//! Both request paths and route patterns go through [`segments`], so the two
//! sides of a match always agree on how separators are treated.

/// Split a path into its `/`-delimited segments.
///
/// Exactly one leading and one trailing `/` are removed before splitting.
/// Runs of separators are *not* collapsed: `"/a//b"` yields `["a", "", "b"]`.
/// The root path yields a single empty segment.
pub fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    trimmed.split('/').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(segments("/a/b/"), vec!["a", "b"]);
        assert_eq!(segments("a/b"), vec!["a", "b"]);
        assert_eq!(segments("/a/b"), segments("a/b/"));
    }

    #[test]
    fn test_root_is_single_empty_segment() {
        assert_eq!(segments("/"), vec![""]);
        assert_eq!(segments(""), vec![""]);
    }

    #[test]
    fn test_only_one_separator_stripped() {
        assert_eq!(segments("//a//"), vec!["", "a", ""]);
        assert_eq!(segments("//"), vec![""]);
    }

    #[test]
    fn test_empty_inner_segments_preserved() {
        assert_eq!(segments("/users//posts"), vec!["users", "", "posts"]);
    }
}
