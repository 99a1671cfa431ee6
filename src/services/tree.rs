//! Parent/child structure over the flat category list.
//!
//! Construction validates the graph once (duplicate ids and cycles are
//! build-time errors) so every later walk can assume a finite forest.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{Category, CategoryGroup, CategoryKind, MonthlyBudgets};

/// Payload of a validated node: a leaf owns its budget vector, an aggregate
/// node owns only its children. A record that arrives with both loses its
/// budgets here, keeping "parents never carry independent amounts" structural.
#[derive(Debug, Clone)]
pub enum NodePayload {
    Leaf { budgets: MonthlyBudgets },
    Aggregate { children: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    pub kind: CategoryKind,
    pub group: Option<CategoryGroup>,
    pub parent_id: Option<String>,
    pub payload: NodePayload,
}

impl CategoryNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.payload, NodePayload::Leaf { .. })
    }

    pub fn children(&self) -> &[String] {
        match &self.payload {
            NodePayload::Leaf { .. } => &[],
            NodePayload::Aggregate { children } => children,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryTree {
    nodes: HashMap<String, CategoryNode>,
    roots: Vec<String>,
    order: Vec<String>,
}

impl CategoryTree {
    /// Build and validate the tree from the store's flat category list.
    ///
    /// A `parent_id` pointing at an id that does not exist makes the node an
    /// implicit root rather than an error; missing references surface as
    /// "Uncategorized" at the point of use, never here.
    pub fn build(categories: &[Category]) -> EngineResult<Self> {
        let mut ids = HashSet::new();
        for category in categories {
            if !ids.insert(category.id.as_str()) {
                return Err(EngineError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut children: HashMap<&str, Vec<String>> = HashMap::new();
        let mut roots = Vec::new();
        let mut order = Vec::with_capacity(categories.len());
        for category in categories {
            order.push(category.id.clone());
            match category.parent_id.as_deref() {
                Some(parent) if ids.contains(parent) => {
                    children
                        .entry(parent)
                        .or_default()
                        .push(category.id.clone());
                }
                Some(parent) => {
                    warn!(
                        category = %category.id,
                        parent = %parent,
                        "parent id not found, treating category as root"
                    );
                    roots.push(category.id.clone());
                }
                None => roots.push(category.id.clone()),
            }
        }

        let mut nodes = HashMap::with_capacity(categories.len());
        for category in categories {
            let child_ids = children.remove(category.id.as_str()).unwrap_or_default();
            let payload = if child_ids.is_empty() {
                NodePayload::Leaf {
                    budgets: category.monthly_budgets.unwrap_or_default(),
                }
            } else {
                if category
                    .monthly_budgets
                    .is_some_and(|budgets| !budgets.is_zero())
                {
                    warn!(
                        category = %category.id,
                        "discarding budgets on a node with children"
                    );
                }
                NodePayload::Aggregate {
                    children: child_ids,
                }
            };
            nodes.insert(
                category.id.clone(),
                CategoryNode {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    kind: category.kind,
                    group: category.group,
                    parent_id: category.parent_id.clone(),
                    payload,
                },
            );
        }

        let tree = Self {
            nodes,
            roots,
            order,
        };
        tree.check_acyclic()?;
        Ok(tree)
    }

    /// Every node must be reachable from a root; anything left over hangs
    /// from a parent cycle.
    fn check_acyclic(&self) -> EngineResult<()> {
        let mut visited = HashSet::new();
        let mut stack: Vec<&str> = self.roots.iter().map(String::as_str).collect();
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.children().iter().map(String::as_str));
            }
        }

        for id in &self.order {
            if !visited.contains(id.as_str()) {
                return Err(EngineError::CycleDetected(id.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CategoryNode> {
        self.nodes.get(id)
    }

    pub fn children_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map(|n| n.children()).unwrap_or(&[])
    }

    pub fn is_leaf(&self, id: &str) -> bool {
        self.children_of(id).is_empty()
    }

    /// Root ids in input order.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// All ids in input order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ancestor ids from immediate parent up to the root. Stops silently at
    /// a parent id that is missing from the map (an implicit root).
    pub fn ancestors_of<'a>(&'a self, id: &str) -> Ancestors<'a> {
        let current = self
            .nodes
            .get(id)
            .and_then(|n| n.parent_id.as_deref())
            .and_then(|p| self.nodes.get(p));
        Ancestors {
            tree: self,
            current,
        }
    }

    /// Depth of a node: roots are 0.
    pub fn depth(&self, id: &str) -> usize {
        self.ancestors_of(id).count()
    }

    /// Breadcrumb path from root to the node, e.g. "Housing / Rent".
    pub fn path(&self, id: &str) -> String {
        let mut parts: Vec<&str> = self.ancestors_of(id).map(|a| a.name.as_str()).collect();
        parts.reverse();
        if let Some(node) = self.nodes.get(id) {
            parts.push(&node.name);
        }
        parts.join(" / ")
    }
}

pub struct Ancestors<'a> {
    tree: &'a CategoryTree,
    current: Option<&'a CategoryNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a CategoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node
            .parent_id
            .as_deref()
            .and_then(|p| self.tree.nodes.get(p));
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind::Expense;

    fn category(id: &str, parent: Option<&str>) -> Category {
        let mut c = Category::new(id, id, Expense);
        if let Some(p) = parent {
            c = c.with_parent(p);
        }
        c
    }

    #[test]
    fn test_build_simple_forest() {
        let tree = CategoryTree::build(&[
            category("a", None),
            category("a1", Some("a")),
            category("a2", Some("a")),
            category("b", None),
        ])
        .unwrap();

        assert_eq!(tree.roots(), &["a", "b"]);
        assert_eq!(tree.children_of("a"), &["a1", "a2"]);
        assert!(tree.is_leaf("a1"));
        assert!(!tree.is_leaf("a"));
    }

    #[test]
    fn test_missing_parent_is_implicit_root() {
        let tree = CategoryTree::build(&[category("orphan", Some("ghost"))]).unwrap();
        assert_eq!(tree.roots(), &["orphan"]);
        assert_eq!(tree.ancestors_of("orphan").count(), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CategoryTree::build(&[category("a", None), category("a", None)]).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateCategory(id) if id == "a"));
    }

    #[test]
    fn test_cycle_rejected() {
        let err = CategoryTree::build(&[
            category("a", Some("b")),
            category("b", Some("a")),
        ])
        .unwrap_err();
        assert!(matches!(err, EngineError::CycleDetected(_)));
    }

    #[test]
    fn test_self_parent_rejected() {
        let err = CategoryTree::build(&[category("a", Some("a"))]).unwrap_err();
        assert!(matches!(err, EngineError::CycleDetected(id) if id == "a"));
    }

    #[test]
    fn test_parent_budgets_discarded() {
        let parent = category("a", None).with_budgets(MonthlyBudgets::uniform(10.0));
        let tree = CategoryTree::build(&[parent, category("a1", Some("a"))]).unwrap();
        assert!(matches!(
            tree.get("a").unwrap().payload,
            NodePayload::Aggregate { .. }
        ));
    }

    #[test]
    fn test_ancestors_walk_and_path() {
        let tree = CategoryTree::build(&[
            category("a", None),
            category("b", Some("a")),
            category("c", Some("b")),
        ])
        .unwrap();

        let chain: Vec<&str> = tree.ancestors_of("c").map(|n| n.id.as_str()).collect();
        assert_eq!(chain, ["b", "a"]);
        assert_eq!(tree.depth("c"), 2);
        assert_eq!(tree.path("c"), "a / b / c");
    }
}
