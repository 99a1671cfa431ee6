use serde::Serialize;

use crate::format;
use crate::models::health::{HealthReport, SpendingSplit};
use crate::models::projection::ProjectionPoint;
use crate::models::report::{AnnualAggregate, BucketAggregates};
use crate::models::settings::PlannerSettings;

/// Pre-aggregated numbers handed to the external summarization service.
///
/// Everything in here is finalized derived data; the summarizer never sees
/// raw records or half-computed rollups.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSnapshot {
    pub net_worth: f64,
    pub buckets: BucketAggregates,
    pub after_tax_income: AnnualAggregate,
    pub net_cash_flow: AnnualAggregate,
    pub annual_savings: f64,
    pub spending_split: SpendingSplit,
    pub health: HealthReport,
    pub projection: Vec<ProjectionPoint>,
}

impl FinancialSnapshot {
    /// One-line headline for the summarizer prompt preamble.
    pub fn headline(&self, settings: &PlannerSettings) -> String {
        format!(
            "Net worth {}, annual savings {}, health score {} ({})",
            format::format_amount(self.net_worth, &settings.currency, &settings.locale),
            format::format_amount(self.annual_savings, &settings.currency, &settings.locale),
            self.health.score,
            self.health.label,
        )
    }

    /// Final projected net worth, if the projection produced any points.
    pub fn projected_net_worth(&self) -> Option<f64> {
        self.projection.last().map(|p| p.net_worth)
    }
}
