//! Policy configuration for classification and scoring.
//!
//! Everything the engines treat as policy (which category ids count as
//! essential, where the tier cutoffs sit, how many points each tier is
//! worth) lives here and is passed in explicitly, so an alternate scoring
//! scheme never requires touching the algorithms.

use std::collections::HashSet;

use crate::models::Tier;

/// Category-membership policy for the classification passes.
#[derive(Debug, Clone)]
pub struct ClassificationConfig {
    /// Top-level category ids whose spending counts as a "Need".
    pub essential_categories: HashSet<String>,
    /// Root category ids that form the Taxes bucket.
    pub tax_categories: HashSet<String>,
    /// Category ids whose rolled-up spending counts as debt service.
    pub debt_categories: HashSet<String>,
    /// Mandatory provident-fund contributions are excluded from the
    /// Needs/Wants/Savings split entirely.
    pub provident_fund_category: Option<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        let ids = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            essential_categories: ids(&[
                "housing",
                "food",
                "transportation",
                "health",
                "taxes",
                "family",
            ]),
            tax_categories: ids(&["taxes"]),
            debt_categories: ids(&["debt"]),
            provident_fund_category: None,
        }
    }
}

/// Descending `>=` cutoffs for the top three tiers; anything below `fair`
/// rates as Needs Improvement.
#[derive(Debug, Clone, Copy)]
pub struct RatioThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl RatioThresholds {
    pub fn tier_for(&self, value: f64) -> Tier {
        if value >= self.excellent {
            Tier::Excellent
        } else if value >= self.good {
            Tier::Good
        } else if value >= self.fair {
            Tier::Fair
        } else {
            Tier::NeedsImprovement
        }
    }
}

/// Ascending `>` cutoffs for ratios where lower is better (debt-to-income).
#[derive(Debug, Clone, Copy)]
pub struct InvertedThresholds {
    pub needs_improvement: f64,
    pub fair: f64,
    pub good: f64,
}

impl InvertedThresholds {
    pub fn tier_for(&self, value: f64) -> Tier {
        if value > self.needs_improvement {
            Tier::NeedsImprovement
        } else if value > self.fair {
            Tier::Fair
        } else if value > self.good {
            Tier::Good
        } else {
            Tier::Excellent
        }
    }
}

/// Point value each tier contributes to the composite score.
#[derive(Debug, Clone, Copy)]
pub struct TierPoints {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub needs_improvement: f64,
}

impl TierPoints {
    pub fn for_tier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Excellent => self.excellent,
            Tier::Good => self.good,
            Tier::Fair => self.fair,
            Tier::NeedsImprovement => self.needs_improvement,
        }
    }
}

/// Composite-score cutoffs for the qualitative label and summary text.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBands {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
}

/// Threshold tables and point values for the five-ratio health score.
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    pub tier_points: TierPoints,
    pub savings_rate: RatioThresholds,
    pub investment_rate: RatioThresholds,
    pub emergency_fund: RatioThresholds,
    pub debt_to_income: InvertedThresholds,
    pub net_worth_progress: RatioThresholds,
    pub score_bands: ScoreBands,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            tier_points: TierPoints {
                excellent: 100.0,
                good: 75.0,
                fair: 50.0,
                needs_improvement: 25.0,
            },
            savings_rate: RatioThresholds {
                excellent: 20.0,
                good: 15.0,
                fair: 10.0,
            },
            investment_rate: RatioThresholds {
                excellent: 15.0,
                good: 10.0,
                fair: 5.0,
            },
            emergency_fund: RatioThresholds {
                excellent: 6.0,
                good: 3.0,
                fair: 1.0,
            },
            debt_to_income: InvertedThresholds {
                needs_improvement: 43.0,
                fair: 36.0,
                good: 15.0,
            },
            net_worth_progress: RatioThresholds {
                excellent: 100.0,
                good: 75.0,
                fair: 50.0,
            },
            score_bands: ScoreBands {
                excellent: 80,
                good: 60,
                fair: 40,
            },
        }
    }
}

/// Everything the recompute pipeline needs besides the records themselves.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub classification: ClassificationConfig,
    pub scoring: ScoringPolicy,
}
