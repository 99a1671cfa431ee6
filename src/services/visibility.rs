//! Which nodes must stay visible in a collapsed report.
//!
//! Hiding a category is purely a display choice; it never touches the
//! underlying budget amounts. Whether a deselected category should also be
//! zeroed is the caller's policy.

use std::collections::HashSet;

use crate::services::tree::CategoryTree;

/// Every selected id plus the full ancestor chain of each, so a selected
/// deep leaf keeps its parents on screen even when no sibling is selected.
pub fn visible_set(selected: &HashSet<String>, tree: &CategoryTree) -> HashSet<String> {
    let mut visible = HashSet::with_capacity(selected.len());
    for id in selected {
        visible.insert(id.clone());
        for ancestor in tree.ancestors_of(id) {
            visible.insert(ancestor.id.clone());
        }
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryKind};

    fn selection(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn tree() -> CategoryTree {
        CategoryTree::build(&[
            Category::new("root", "Root", CategoryKind::Expense),
            Category::new("mid", "Mid", CategoryKind::Expense).with_parent("root"),
            Category::new("leaf", "Leaf", CategoryKind::Expense).with_parent("mid"),
            Category::new("other", "Other", CategoryKind::Expense),
        ])
        .unwrap()
    }

    #[test]
    fn test_deep_leaf_keeps_chain_visible() {
        let visible = visible_set(&selection(&["leaf"]), &tree());
        assert_eq!(visible, selection(&["leaf", "mid", "root"]));
    }

    #[test]
    fn test_unselected_subtree_excluded() {
        let visible = visible_set(&selection(&["mid"]), &tree());
        assert!(!visible.contains("other"));
        assert!(!visible.contains("leaf"));
    }

    #[test]
    fn test_empty_selection() {
        assert!(visible_set(&HashSet::new(), &tree()).is_empty());
    }
}
