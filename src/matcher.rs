//! Commit-title matching.

use once_cell::sync::Lazy;
use regex::Regex;

/// Commit titles produced by the issue queue: `Issue #<id> ... by <authors>: <summary>`.
/// Anchored and case-sensitive; anything else is an unrelated commit.
pub static COMMIT_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Issue #(\d+).* by ([^:]+):(.*)$").expect("Failed to compile commit title regex")
});

/// Issue id referenced by a commit title, or `None` for commits that do not
/// reference an issue.
pub fn issue_id(title: &str) -> Option<u64> {
    COMMIT_TITLE_PATTERN
        .captures(title)
        .and_then(|captures| captures.get(1))
        .and_then(|id| id.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_referenced_issue_id() {
        assert_eq!(issue_id("Issue #12345 by jdoe: Fix crash"), Some(12345));
    }

    #[test]
    fn extracts_ids_from_multi_author_titles() {
        assert_eq!(
            issue_id("Issue #3371535 by alice, bob, carol: Convert everything to CSS logical properties"),
            Some(3371535)
        );
    }

    #[test]
    fn unrelated_titles_do_not_match() {
        assert_eq!(issue_id("Cleanup whitespace"), None);
    }

    #[test]
    fn the_prefix_is_anchored_and_case_sensitive() {
        assert_eq!(issue_id("Revert \"Issue #12345 by jdoe: Fix crash\""), None);
        assert_eq!(issue_id("issue #12345 by jdoe: Fix crash"), None);
    }

    #[test]
    fn titles_without_an_author_segment_do_not_match() {
        assert_eq!(issue_id("Issue #12345 fix the crash"), None);
    }

    #[test]
    fn titles_without_digits_do_not_match() {
        assert_eq!(issue_id("Issue # by jdoe: Fix crash"), None);
    }
}
