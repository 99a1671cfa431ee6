pub mod account;
pub mod category;
pub mod health;
pub mod projection;
pub mod report;
pub mod settings;
pub mod snapshot;
pub mod transaction;

pub use account::{liquid_balance, net_worth, Account, AccountType};
pub use category::{Category, CategoryGroup, CategoryKind, MonthlyBudgets, MONTHS};
pub use health::{HealthReport, RatioScore, SpendingSplit, Tier};
pub use projection::ProjectionPoint;
pub use report::{AnnualAggregate, BucketAggregates, ReportRow, SUMMARY_ID_PREFIX};
pub use settings::PlannerSettings;
pub use snapshot::FinancialSnapshot;
pub use transaction::{Transaction, TransactionKind};
