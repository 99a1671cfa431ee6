use serde::{Deserialize, Deserializer, Serialize};

use crate::serde_utils;

/// Number of entries in a monthly budget vector, index 0 = January.
pub const MONTHS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(CategoryKind::Income),
            "expense" => Some(CategoryKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cross-cutting tag independent of tree position, consumed by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroup {
    Saving,
    Investing,
}

impl CategoryGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryGroup::Saving => "saving",
            CategoryGroup::Investing => "investing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "saving" => Some(CategoryGroup::Saving),
            "investing" => Some(CategoryGroup::Investing),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Twelve per-month amounts. Absent budgets are twelve zeros; shorter or
/// longer input vectors are padded/truncated to twelve on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MonthlyBudgets(pub [f64; MONTHS]);

impl MonthlyBudgets {
    pub fn zeros() -> Self {
        Self::default()
    }

    /// The same amount in every month.
    pub fn uniform(amount: f64) -> Self {
        Self([amount; MONTHS])
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn accumulate(&mut self, other: &MonthlyBudgets) {
        for (slot, value) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += value;
        }
    }

    pub fn minus(&self, other: &MonthlyBudgets) -> MonthlyBudgets {
        let mut result = *self;
        for (slot, value) in result.0.iter_mut().zip(other.0.iter()) {
            *slot -= value;
        }
        result
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }
}

impl<'de> Deserialize<'de> for MonthlyBudgets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_utils::lenient_f64_seq(deserializer)?;
        let mut months = [0.0; MONTHS];
        for (slot, value) in months.iter_mut().zip(raw.into_iter()) {
            *slot = value;
        }
        Ok(MonthlyBudgets(months))
    }
}

/// A budget category as stored by the external data store.
///
/// `monthly_budgets` is meaningful only on leaves; `CategoryTree::build`
/// discards it on nodes that turn out to have children, since aggregation
/// always derives parent amounts from the subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<CategoryGroup>,
    #[serde(
        default,
        rename = "parentCategoryId",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budgets: Option<MonthlyBudgets>,
}

impl Category {
    pub fn new(id: &str, name: &str, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            group: None,
            parent_id: None,
            monthly_budgets: None,
        }
    }

    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_group(mut self, group: CategoryGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_budgets(mut self, budgets: MonthlyBudgets) -> Self {
        self.monthly_budgets = Some(budgets);
        self
    }
}
