use serde::Serialize;

use crate::models::category::MonthlyBudgets;

/// Ids of synthesized summary rows live in this namespace so they can never
/// collide with category ids from the store.
pub const SUMMARY_ID_PREFIX: &str = "summary:";

/// One row of the tabular budget report, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub level: usize,
    pub is_parent: bool,
    pub monthly: MonthlyBudgets,
    pub annual_total: f64,
}

impl ReportRow {
    pub fn indent(&self) -> String {
        "  ".repeat(self.level)
    }

    pub fn display_name(&self) -> String {
        if self.level > 0 {
            format!("{}└ {}", self.indent(), self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn is_summary(&self) -> bool {
        self.id.starts_with(SUMMARY_ID_PREFIX)
    }
}

/// A 12-month vector plus its annual sum, derived per top-level bucket.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AnnualAggregate {
    pub monthly: MonthlyBudgets,
    pub total: f64,
}

impl AnnualAggregate {
    pub fn from_monthly(monthly: MonthlyBudgets) -> Self {
        Self {
            total: monthly.total(),
            monthly,
        }
    }
}

/// Rolled-up totals for the five top-level financial buckets.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BucketAggregates {
    pub income: AnnualAggregate,
    pub taxes: AnnualAggregate,
    pub saving: AnnualAggregate,
    pub investing: AnnualAggregate,
    pub expenses: AnnualAggregate,
}
