//! Flatten the category tree into ordered rows for tabular display.

use std::collections::HashSet;

use crate::config::ClassificationConfig;
use crate::models::{AnnualAggregate, ReportRow, SUMMARY_ID_PREFIX};
use crate::services::rollup::Rollup;
use crate::services::tree::CategoryTree;

/// Pre-order, depth-first rows starting at each root in tree order.
/// A collapsed node is still emitted; only its subtree is skipped.
pub fn flatten(
    tree: &CategoryTree,
    rollup: &mut Rollup,
    collapsed: &HashSet<String>,
) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(tree.len());
    for root in tree.roots() {
        emit(tree, rollup, collapsed, root, 0, &mut rows);
    }
    rows
}

fn emit(
    tree: &CategoryTree,
    rollup: &mut Rollup,
    collapsed: &HashSet<String>,
    id: &str,
    level: usize,
    rows: &mut Vec<ReportRow>,
) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let monthly = rollup.vector(id);
    rows.push(ReportRow {
        id: node.id.clone(),
        name: node.name.clone(),
        level,
        is_parent: !node.is_leaf(),
        monthly,
        annual_total: monthly.total(),
    });

    if collapsed.contains(id) {
        return;
    }
    for child in tree.children_of(id) {
        emit(tree, rollup, collapsed, child, level + 1, rows);
    }
}

/// Synthesized After-Tax Income and Net Monthly Cash Flow rows, appended
/// after the tree rows. Their ids live in the reserved summary namespace so
/// they can never collide with a category id.
pub fn summary_rows(rollup: &mut Rollup, config: &ClassificationConfig) -> Vec<ReportRow> {
    let after_tax = AnnualAggregate::from_monthly(rollup.after_tax_income(config));
    let cash_flow = AnnualAggregate::from_monthly(rollup.net_cash_flow(config));

    vec![
        ReportRow {
            id: format!("{}after-tax-income", SUMMARY_ID_PREFIX),
            name: "After-Tax Income".into(),
            level: 0,
            is_parent: false,
            monthly: after_tax.monthly,
            annual_total: after_tax.total,
        },
        ReportRow {
            id: format!("{}net-cash-flow", SUMMARY_ID_PREFIX),
            name: "Net Monthly Cash Flow".into(),
            level: 0,
            is_parent: false,
            monthly: cash_flow.monthly,
            annual_total: cash_flow.total,
        },
    ]
}
