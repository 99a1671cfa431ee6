//! Spending classification and the five-ratio financial health score.
//!
//! Both passes operate on inputs the caller has already scoped to the
//! trailing-12-month window; nothing here throws on missing references or
//! zero denominators.

use tracing::debug;

use crate::config::{ClassificationConfig, ScoringPolicy};
use crate::models::{
    liquid_balance, net_worth, Account, HealthReport, RatioScore, SpendingSplit, Tier, Transaction,
};
use crate::services::rollup::Rollup;
use crate::services::tree::CategoryTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpendingBucket {
    Needs,
    Wants,
    Savings,
}

/// Where one expense lands in the Needs/Wants/Savings breakdown.
///
/// Essential membership wins over the saving/investing group tag, and an
/// unknown or missing category is discretionary by default.
fn classify_expense(
    category_id: Option<&str>,
    tree: &CategoryTree,
    config: &ClassificationConfig,
) -> SpendingBucket {
    let Some(id) = category_id else {
        return SpendingBucket::Wants;
    };
    let Some(node) = tree.get(id) else {
        debug!(category = %id, "transaction references unknown category");
        return SpendingBucket::Wants;
    };

    if config.essential_categories.contains(id)
        || tree
            .ancestors_of(id)
            .any(|a| config.essential_categories.contains(&a.id))
    {
        return SpendingBucket::Needs;
    }

    let group = node
        .group
        .or_else(|| tree.ancestors_of(id).find_map(|a| a.group));
    if group.is_some() {
        return SpendingBucket::Savings;
    }

    SpendingBucket::Wants
}

/// Needs/Wants/Savings totals over a window of expense transactions.
///
/// Every expense except the configured provident-fund category lands in
/// exactly one bucket, so the three totals partition the filtered spend.
pub fn spending_split(
    transactions: &[Transaction],
    tree: &CategoryTree,
    config: &ClassificationConfig,
) -> SpendingSplit {
    let mut needs = 0.0;
    let mut wants = 0.0;
    let mut savings = 0.0;

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        if transaction.category_id.is_some()
            && transaction.category_id == config.provident_fund_category
        {
            continue;
        }
        match classify_expense(transaction.category_id.as_deref(), tree, config) {
            SpendingBucket::Needs => needs += transaction.amount,
            SpendingBucket::Wants => wants += transaction.amount,
            SpendingBucket::Savings => savings += transaction.amount,
        }
    }

    let total = needs + wants + savings;
    let pct = |part: f64| if total == 0.0 { 0.0 } else { part / total * 100.0 };

    SpendingSplit {
        needs,
        wants,
        savings,
        needs_pct: pct(needs),
        wants_pct: pct(wants),
        savings_pct: pct(savings),
    }
}

/// Pre-aggregated inputs for the health score, all annual unless noted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthInputs {
    pub annual_income: f64,
    pub annual_saving: f64,
    pub annual_investing: f64,
    pub annual_essential_expense: f64,
    pub monthly_debt_payments: f64,
    pub liquid_balance: f64,
    pub net_worth: f64,
    pub age: u32,
}

impl HealthInputs {
    /// Derive the inputs from rolled-up buckets plus account balances.
    pub fn derive(
        tree: &CategoryTree,
        rollup: &mut Rollup,
        accounts: &[Account],
        config: &ClassificationConfig,
        age: u32,
    ) -> Self {
        let buckets = rollup.aggregates(config);

        let mut annual_essential_expense = 0.0;
        for id in &config.essential_categories {
            if tree.get(id).is_some() {
                annual_essential_expense += rollup.annual_total(id);
            }
        }

        let mut annual_debt = 0.0;
        for id in &config.debt_categories {
            if tree.get(id).is_some() {
                annual_debt += rollup.annual_total(id);
            }
        }

        Self {
            annual_income: buckets.income.total,
            annual_saving: buckets.saving.total,
            annual_investing: buckets.investing.total,
            annual_essential_expense,
            monthly_debt_payments: annual_debt / 12.0,
            liquid_balance: liquid_balance(accounts),
            net_worth: net_worth(accounts),
            age,
        }
    }
}

fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Compute the five ratios, tier each against the policy tables, and fold
/// the tier points into the composite score.
pub fn health_report(inputs: &HealthInputs, policy: &ScoringPolicy) -> HealthReport {
    let savings_rate = ratio_pct(
        inputs.annual_saving + inputs.annual_investing,
        inputs.annual_income,
    );
    let investment_rate = ratio_pct(inputs.annual_investing, inputs.annual_income);

    let monthly_essential = inputs.annual_essential_expense / 12.0;
    let emergency_fund_months = if monthly_essential == 0.0 {
        0.0
    } else {
        inputs.liquid_balance / monthly_essential
    };

    // A zero income never throws: the ratio is 0, which the inverted table
    // rates as the best tier.
    let debt_to_income = ratio_pct(inputs.monthly_debt_payments, inputs.annual_income / 12.0);

    let target_net_worth = inputs.age as f64 * inputs.annual_income / 10.0;
    let net_worth_progress = ratio_pct(inputs.net_worth, target_net_worth);

    let ratios = [
        RatioScore {
            value: savings_rate,
            tier: policy.savings_rate.tier_for(savings_rate),
        },
        RatioScore {
            value: investment_rate,
            tier: policy.investment_rate.tier_for(investment_rate),
        },
        RatioScore {
            value: emergency_fund_months,
            tier: policy.emergency_fund.tier_for(emergency_fund_months),
        },
        RatioScore {
            value: debt_to_income,
            tier: policy.debt_to_income.tier_for(debt_to_income),
        },
        RatioScore {
            value: net_worth_progress,
            tier: policy.net_worth_progress.tier_for(net_worth_progress),
        },
    ];

    let total_points: f64 = ratios
        .iter()
        .map(|r| policy.tier_points.for_tier(r.tier))
        .sum();
    let score = (total_points / ratios.len() as f64).round() as u32;

    HealthReport {
        savings_rate: ratios[0],
        investment_rate: ratios[1],
        emergency_fund_months: ratios[2],
        debt_to_income: ratios[3],
        net_worth_progress: ratios[4],
        score,
        label: score_label(score, policy).to_string(),
        summary: score_summary(score, policy).to_string(),
    }
}

fn score_label(score: u32, policy: &ScoringPolicy) -> &'static str {
    if score >= policy.score_bands.excellent {
        Tier::Excellent.as_str()
    } else if score >= policy.score_bands.good {
        Tier::Good.as_str()
    } else if score >= policy.score_bands.fair {
        Tier::Fair.as_str()
    } else {
        Tier::NeedsImprovement.as_str()
    }
}

fn score_summary(score: u32, policy: &ScoringPolicy) -> &'static str {
    if score >= policy.score_bands.excellent {
        "Your finances are in excellent shape. Savings, investments, and debt \
         are well balanced; stay the course."
    } else if score >= policy.score_bands.good {
        "Your finances are on solid footing. A few ratios have room to grow; \
         consider raising your savings or investment rate."
    } else if score >= policy.score_bands.fair {
        "Your finances need attention. Focus on building an emergency fund \
         and trimming discretionary spending."
    } else {
        "Your finances need significant work. Prioritize an emergency cushion \
         and paying down debt before investing further."
    }
}
