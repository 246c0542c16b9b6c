//! Per-category totals
//!
//! The `InterestSummary` accumulates how many accounts of each category were
//! processed and what they hold and earn. Both processing strategies feed it
//! results in input order, which keeps floating-point totals identical
//! between them.

use crate::types::{AccountCategory, Balance, InterestRecord, MonthlyInterest};
use std::collections::BTreeMap;

/// Totals for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySummary {
    pub category: AccountCategory,

    /// Number of accounts seen
    pub accounts: u64,

    /// Sum of balances
    pub total_balance: Balance,

    /// Sum of monthly interest
    pub total_interest: MonthlyInterest,
}

impl CategorySummary {
    /// Create an empty summary for a category
    pub fn new(category: AccountCategory) -> Self {
        CategorySummary {
            category,
            accounts: 0,
            total_balance: 0.0,
            total_interest: 0.0,
        }
    }
}

/// Running totals across all categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestSummary {
    categories: BTreeMap<AccountCategory, CategorySummary>,
}

impl InterestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one computed record to the totals
    pub fn record(&mut self, result: &InterestRecord) {
        let entry = self
            .categories
            .entry(result.category)
            .or_insert_with(|| CategorySummary::new(result.category));

        entry.accounts += 1;
        entry.total_balance += result.balance;
        entry.total_interest += result.interest;
    }

    /// Totals for one category, if any account of it was seen
    pub fn get(&self, category: AccountCategory) -> Option<&CategorySummary> {
        self.categories.get(&category)
    }

    /// Totals for every category seen, in category order
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.categories.values().copied().collect()
    }

    /// Total number of accounts recorded
    pub fn accounts(&self) -> u64 {
        self.categories.values().map(|summary| summary.accounts).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interest_record(category: AccountCategory, balance: f64, interest: f64) -> InterestRecord {
        InterestRecord {
            account: 1,
            category,
            balance,
            interest,
        }
    }

    #[test]
    fn test_new_summary_is_empty() {
        let summary = InterestSummary::new();
        assert_eq!(summary.accounts(), 0);
        assert!(summary.categories().is_empty());
        assert!(summary.get(AccountCategory::Current).is_none());
    }

    #[test]
    fn test_record_accumulates_per_category() {
        let mut summary = InterestSummary::new();
        summary.record(&interest_record(AccountCategory::Savings, 100.0, 1.0));
        summary.record(&interest_record(AccountCategory::Savings, 200.0, 2.0));
        summary.record(&interest_record(AccountCategory::Current, 50.0, 0.5));

        let savings = summary.get(AccountCategory::Savings).unwrap();
        assert_eq!(savings.accounts, 2);
        assert_eq!(savings.total_balance, 300.0);
        assert_eq!(savings.total_interest, 3.0);

        let current = summary.get(AccountCategory::Current).unwrap();
        assert_eq!(current.accounts, 1);
        assert_eq!(summary.accounts(), 3);
    }

    #[test]
    fn test_categories_are_ordered() {
        let mut summary = InterestSummary::new();
        summary.record(&interest_record(AccountCategory::Unrecognized, 10.0, 0.0));
        summary.record(&interest_record(AccountCategory::HighRollerMoneyMarket, 10.0, 0.0));
        summary.record(&interest_record(AccountCategory::Current, 10.0, 0.0));

        let order: Vec<_> = summary
            .categories()
            .into_iter()
            .map(|summary| summary.category)
            .collect();

        assert_eq!(
            order,
            vec![
                AccountCategory::Current,
                AccountCategory::HighRollerMoneyMarket,
                AccountCategory::Unrecognized,
            ]
        );
    }
}
