use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Cash,
    Securities,
    Liability,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Cash => "cash",
            AccountType::Securities => "securities",
            AccountType::Liability => "liability",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(AccountType::Cash),
            "securities" => Some(AccountType::Securities),
            "liability" => Some(AccountType::Liability),
            _ => None,
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Cash
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account balance snapshot. Liabilities carry negative balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
    #[serde(deserialize_with = "crate::serde_utils::lenient_f64")]
    pub balance: f64,
}

impl Account {
    pub fn new(id: &str, name: &str, account_type: AccountType, balance: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type,
            balance,
        }
    }
}

/// Net worth is the signed sum over every account.
pub fn net_worth(accounts: &[Account]) -> f64 {
    accounts.iter().map(|a| a.balance).sum()
}

/// Cash-like balances only, used as the emergency-fund numerator.
pub fn liquid_balance(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|a| a.account_type == AccountType::Cash)
        .map(|a| a.balance)
        .sum()
}
