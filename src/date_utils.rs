use chrono::{Months, NaiveDate};

use crate::models::Transaction;

/// An inclusive date window. The classification pass expects its input
/// pre-filtered to a trailing-12-month window; this is the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// The `months`-month window ending at `end`, inclusive on both sides.
    pub fn trailing_months(end: NaiveDate, months: u32) -> Self {
        let from = end
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to: end }
    }

    pub fn trailing_year(end: NaiveDate) -> Self {
        Self::trailing_months(end, 12)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn filter_transactions(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date))
            .cloned()
            .collect()
    }
}
