//! Rate resolution
//!
//! Maps an [`AccountCategory`] to the rule that computes its interest. Each
//! rule lives in a `static`, so every lookup hands out the same instance for
//! the life of the process.

use crate::core::rules::{
    CalculationRule, CurrentAccountRule, HighRollerMoneyMarketRule, MoneyMarketRule,
    NoInterestRule, SavingsAccountRule,
};
use crate::types::AccountCategory;

static CURRENT_ACCOUNT: CurrentAccountRule = CurrentAccountRule;
static SAVINGS_ACCOUNT: SavingsAccountRule = SavingsAccountRule;
static MONEY_MARKET: MoneyMarketRule = MoneyMarketRule;
static HIGH_ROLLER_MONEY_MARKET: HighRollerMoneyMarketRule = HighRollerMoneyMarketRule;
static NO_INTEREST: NoInterestRule = NoInterestRule;

/// Select the calculation rule for a category
///
/// Total: unrecognized categories get the zero-interest rule.
///
/// # Examples
///
/// ```
/// use interest_calculator::core::resolver::resolve;
/// use interest_calculator::types::AccountCategory;
///
/// let rule = resolve(AccountCategory::StandardMoneyMarket);
/// assert_eq!(rule.apply(100.0), 0.5);
/// ```
pub fn resolve(category: AccountCategory) -> &'static dyn CalculationRule {
    match category {
        AccountCategory::Current => &CURRENT_ACCOUNT,
        AccountCategory::Savings => &SAVINGS_ACCOUNT,
        AccountCategory::StandardMoneyMarket => &MONEY_MARKET,
        AccountCategory::HighRollerMoneyMarket => &HIGH_ROLLER_MONEY_MARKET,
        AccountCategory::Unrecognized => &NO_INTEREST,
    }
}
