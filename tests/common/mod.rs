//! Shared fixtures for integration tests.
//!
//! The sample ledger models a single-earner household: one income root, a
//! taxes root, three expense roots (two essential), tagged saving and
//! investing roots, and a debt root. Amounts are uniform across months so
//! expected totals stay easy to read.

#![allow(dead_code)]

use chrono::NaiveDate;
use fiscus::config::EngineConfig;
use fiscus::models::{
    Account, AccountType, Category, CategoryGroup, CategoryKind, MonthlyBudgets, PlannerSettings,
    Transaction, TransactionKind,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_categories() -> Vec<Category> {
    use CategoryKind::{Expense, Income};

    vec![
        Category::new("income", "Income", Income),
        Category::new("salary", "Salary", Income)
            .with_parent("income")
            .with_budgets(MonthlyBudgets::uniform(60_000.0)),
        Category::new("bonus", "Bonus", Income).with_parent("income"),
        Category::new("taxes", "Taxes", Expense),
        Category::new("income-tax", "Income Tax", Expense)
            .with_parent("taxes")
            .with_budgets(MonthlyBudgets::uniform(12_000.0)),
        Category::new("housing", "Housing", Expense),
        Category::new("rent", "Rent", Expense)
            .with_parent("housing")
            .with_budgets(MonthlyBudgets::uniform(15_000.0)),
        Category::new("utilities", "Utilities", Expense)
            .with_parent("housing")
            .with_budgets(MonthlyBudgets::uniform(2_000.0)),
        Category::new("food", "Food", Expense),
        Category::new("groceries", "Groceries", Expense)
            .with_parent("food")
            .with_budgets(MonthlyBudgets::uniform(6_000.0)),
        Category::new("dining", "Dining Out", Expense)
            .with_parent("food")
            .with_budgets(MonthlyBudgets::uniform(2_000.0)),
        Category::new("lifestyle", "Lifestyle", Expense),
        Category::new("travel", "Travel", Expense)
            .with_parent("lifestyle")
            .with_budgets(MonthlyBudgets::uniform(3_000.0)),
        Category::new("streaming", "Streaming", Expense)
            .with_parent("lifestyle")
            .with_budgets(MonthlyBudgets::uniform(500.0)),
        Category::new("saving", "Saving", Expense).with_group(CategoryGroup::Saving),
        Category::new("emergency", "Emergency Fund", Expense)
            .with_parent("saving")
            .with_budgets(MonthlyBudgets::uniform(5_000.0)),
        Category::new("investing", "Investing", Expense).with_group(CategoryGroup::Investing),
        Category::new("brokerage", "Brokerage", Expense)
            .with_parent("investing")
            .with_budgets(MonthlyBudgets::uniform(8_000.0)),
        Category::new("debt", "Debt", Expense),
        Category::new("car-loan", "Car Loan", Expense)
            .with_parent("debt")
            .with_budgets(MonthlyBudgets::uniform(1_500.0)),
    ]
}

pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("checking", "Checking", AccountType::Cash, 50_000.0),
        Account::new("savings-acct", "Savings", AccountType::Cash, 130_000.0),
        Account::new("brokerage-acct", "Brokerage", AccountType::Securities, 400_000.0),
        Account::new("mortgage", "Mortgage", AccountType::Liability, -180_000.0),
    ]
}

/// Expenses spread over spring 2025; one income entry the split must ignore.
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};

    vec![
        Transaction::new(date(2025, 3, 1), 60_000.0, Income).with_category("salary"),
        Transaction::new(date(2025, 3, 5), 15_000.0, Expense).with_category("rent"),
        Transaction::new(date(2025, 3, 8), 6_000.0, Expense).with_category("groceries"),
        Transaction::new(date(2025, 3, 12), 2_000.0, Expense).with_category("dining"),
        Transaction::new(date(2025, 3, 16), 3_000.0, Expense).with_category("travel"),
        Transaction::new(date(2025, 3, 20), 500.0, Expense).with_category("streaming"),
        Transaction::new(date(2025, 3, 24), 5_000.0, Expense).with_category("emergency"),
        Transaction::new(date(2025, 3, 28), 8_000.0, Expense).with_category("brokerage"),
        Transaction::new(date(2025, 4, 2), 1_000.0, Expense).with_category("mystery"),
        Transaction::new(date(2025, 4, 6), 700.0, Expense),
    ]
}

pub fn sample_settings() -> PlannerSettings {
    PlannerSettings {
        current_age: 35,
        ..PlannerSettings::default()
    }
}

pub fn sample_config() -> EngineConfig {
    EngineConfig::default()
}
