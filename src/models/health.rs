use serde::Serialize;

/// Ordinal rating band assigned to a computed ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Fair => "Fair",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One computed ratio with its assigned tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RatioScore {
    pub value: f64,
    pub tier: Tier,
}

/// The full five-ratio health assessment.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// (saving + investing) / income, as a percentage.
    pub savings_rate: RatioScore,
    /// investing / income, as a percentage.
    pub investment_rate: RatioScore,
    /// Liquid balances over one month of essential spending.
    pub emergency_fund_months: RatioScore,
    /// Monthly debt payments / gross monthly income, as a percentage.
    pub debt_to_income: RatioScore,
    /// Net worth over the age-scaled target, as a percentage.
    pub net_worth_progress: RatioScore,
    pub score: u32,
    pub label: String,
    pub summary: String,
}

/// Needs / Wants / Savings totals over the reporting window.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SpendingSplit {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub savings_pct: f64,
}

impl SpendingSplit {
    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.savings
    }
}
