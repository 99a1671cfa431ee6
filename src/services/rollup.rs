//! Bottom-up aggregation of monthly budget vectors.
//!
//! A `Rollup` owns a memo table scoped to one report pass: the first read of
//! an ancestor walks its subtree, later reads are O(1). Input records are
//! never mutated; dropping the value drops the cache, so a fresh `Rollup`
//! is always a full recompute.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ClassificationConfig;
use crate::models::{
    AnnualAggregate, BucketAggregates, CategoryGroup, CategoryKind, MonthlyBudgets,
};
use crate::services::tree::{CategoryTree, NodePayload};

pub struct Rollup<'a> {
    tree: &'a CategoryTree,
    memo: HashMap<String, MonthlyBudgets>,
}

impl<'a> Rollup<'a> {
    pub fn new(tree: &'a CategoryTree) -> Self {
        Self {
            tree,
            memo: HashMap::with_capacity(tree.len()),
        }
    }

    /// Monthly vector for a category: a leaf's own budgets, or the
    /// element-wise sum over an aggregate node's children. Unknown ids
    /// contribute zeros.
    pub fn vector(&mut self, id: &str) -> MonthlyBudgets {
        if let Some(cached) = self.memo.get(id) {
            return *cached;
        }

        let tree = self.tree;
        let vector = match tree.get(id) {
            Some(node) => match &node.payload {
                NodePayload::Leaf { budgets } => *budgets,
                NodePayload::Aggregate { children } => {
                    let mut sum = MonthlyBudgets::zeros();
                    for child in children {
                        let child_vector = self.vector(child);
                        sum.accumulate(&child_vector);
                    }
                    sum
                }
            },
            None => {
                debug!(category = %id, "rollup of unknown category id");
                MonthlyBudgets::zeros()
            }
        };

        self.memo.insert(id.to_string(), vector);
        vector
    }

    pub fn annual_total(&mut self, id: &str) -> f64 {
        self.vector(id).total()
    }

    /// Classify every root into one of the five buckets and sum the rollups.
    ///
    /// Tax roots are matched first (they are expense-typed), then income by
    /// kind, then the saving/investing group tags; everything else is plain
    /// expenses.
    pub fn aggregates(&mut self, config: &ClassificationConfig) -> BucketAggregates {
        let mut income = MonthlyBudgets::zeros();
        let mut taxes = MonthlyBudgets::zeros();
        let mut saving = MonthlyBudgets::zeros();
        let mut investing = MonthlyBudgets::zeros();
        let mut expenses = MonthlyBudgets::zeros();

        let tree = self.tree;
        for root in tree.roots() {
            let vector = self.vector(root);
            let node = match tree.get(root) {
                Some(node) => node,
                None => continue,
            };
            let bucket = if config.tax_categories.contains(root) {
                &mut taxes
            } else if node.kind == CategoryKind::Income {
                &mut income
            } else {
                match node.group {
                    Some(CategoryGroup::Saving) => &mut saving,
                    Some(CategoryGroup::Investing) => &mut investing,
                    None => &mut expenses,
                }
            };
            bucket.accumulate(&vector);
        }

        BucketAggregates {
            income: AnnualAggregate::from_monthly(income),
            taxes: AnnualAggregate::from_monthly(taxes),
            saving: AnnualAggregate::from_monthly(saving),
            investing: AnnualAggregate::from_monthly(investing),
            expenses: AnnualAggregate::from_monthly(expenses),
        }
    }

    /// Income minus taxes, element-wise.
    pub fn after_tax_income(&mut self, config: &ClassificationConfig) -> MonthlyBudgets {
        let buckets = self.aggregates(config);
        buckets.income.monthly.minus(&buckets.taxes.monthly)
    }

    /// After-tax income minus saving, investing, and expenses, element-wise.
    pub fn net_cash_flow(&mut self, config: &ClassificationConfig) -> MonthlyBudgets {
        let buckets = self.aggregates(config);
        buckets
            .income
            .monthly
            .minus(&buckets.taxes.monthly)
            .minus(&buckets.saving.monthly)
            .minus(&buckets.investing.monthly)
            .minus(&buckets.expenses.monthly)
    }
}
