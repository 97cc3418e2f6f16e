//! Intersection of commit-referenced issues with release-note-tagged issues.

use crate::tracker::Issue;
use std::collections::HashSet;

/// Filter `issues` down to those whose id appears in `committed`, preserving
/// the tracker's listing order. Issues are keyed uniquely by id, so a
/// duplicate listing contributes nothing beyond its first occurrence.
pub fn reconcile(committed: &HashSet<u64>, issues: Vec<Issue>) -> Vec<Issue> {
    let mut seen = HashSet::new();
    issues
        .into_iter()
        .filter(|issue| committed.contains(&issue.nid) && seen.insert(issue.nid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::IssueBody;

    fn issue(nid: u64, title: &str) -> Issue {
        Issue {
            nid,
            title: title.to_string(),
            body: IssueBody::default(),
        }
    }

    #[test]
    fn keeps_only_committed_issues_in_listing_order() {
        let committed: HashSet<u64> = [22, 11].into_iter().collect();
        let issues = vec![issue(11, "first"), issue(33, "skipped"), issue(22, "second")];

        let reconciled = reconcile(&committed, issues);

        let ids: Vec<u64> = reconciled.iter().map(|issue| issue.nid).collect();
        assert_eq!(ids, vec![11, 22]);
    }

    #[test]
    fn empty_intersection_is_valid() {
        let committed: HashSet<u64> = [99].into_iter().collect();
        let issues = vec![issue(11, "first")];

        assert!(reconcile(&committed, issues).is_empty());
    }

    #[test]
    fn duplicate_listings_collapse_to_the_first_occurrence() {
        let committed: HashSet<u64> = [11].into_iter().collect();
        let issues = vec![issue(11, "first"), issue(11, "again")];

        let reconciled = reconcile(&committed, issues);

        assert_eq!(reconciled.len(), 1);
        assert_eq!(reconciled[0].title, "first");
    }
}
