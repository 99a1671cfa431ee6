//! One full recompute pass: records in, summarizer-ready snapshot out.
//!
//! This is what a dashboard page runs on every data change. Derived values
//! are never persisted; the snapshot is rebuilt from current inputs each
//! time.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{
    net_worth, Account, AnnualAggregate, Category, FinancialSnapshot, PlannerSettings, Transaction,
};
use crate::services::classification::{health_report, spending_split, HealthInputs};
use crate::services::projection::{decimate_for_display, project, ProjectionAges};
use crate::services::rollup::Rollup;
use crate::services::tree::CategoryTree;

/// Projection series cap for the snapshot payload.
const MAX_PROJECTION_POINTS: usize = 24;

pub fn build_snapshot(
    categories: &[Category],
    accounts: &[Account],
    transactions: &[Transaction],
    settings: &PlannerSettings,
    config: &EngineConfig,
) -> EngineResult<FinancialSnapshot> {
    let tree = CategoryTree::build(categories)?;
    let mut rollup = Rollup::new(&tree);

    let buckets = rollup.aggregates(&config.classification);
    let after_tax_income = AnnualAggregate::from_monthly(
        buckets.income.monthly.minus(&buckets.taxes.monthly),
    );
    let net_cash_flow = AnnualAggregate::from_monthly(rollup.net_cash_flow(&config.classification));

    let split = spending_split(transactions, &tree, &config.classification);

    let inputs = HealthInputs::derive(
        &tree,
        &mut rollup,
        accounts,
        &config.classification,
        settings.current_age,
    );
    let health = health_report(&inputs, &config.scoring);

    let annual_savings = buckets.income.total - buckets.expenses.total;
    let current_net_worth = net_worth(accounts);
    let series = project(
        current_net_worth,
        annual_savings,
        settings.annual_return_rate,
        &ProjectionAges::from(settings),
    );
    let projection = decimate_for_display(&series, MAX_PROJECTION_POINTS);

    debug!(
        categories = categories.len(),
        accounts = accounts.len(),
        transactions = transactions.len(),
        score = health.score,
        "snapshot rebuilt"
    );

    Ok(FinancialSnapshot {
        net_worth: current_net_worth,
        buckets,
        after_tax_income,
        net_cash_flow,
        annual_savings,
        spending_split: split,
        health,
        projection,
    })
}
