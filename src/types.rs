use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};

/// which side of the comparison a loan sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanLabel {
    A,
    B,
}

impl LoanLabel {
    /// short lowercase tag used in file names and CLI flags
    pub fn tag(&self) -> &'static str {
        match self {
            LoanLabel::A => "a",
            LoanLabel::B => "b",
        }
    }

    /// default export file name for this loan
    pub fn csv_file_name(&self) -> String {
        format!("mortgage-{}-amortization.csv", self.tag())
    }
}

impl fmt::Display for LoanLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanLabel::A => write!(f, "Mortgage A"),
            LoanLabel::B => write!(f, "Mortgage B"),
        }
    }
}

/// terms of a fixed-rate, fully-amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// annual rate as a fraction
    pub annual_rate: Rate,
    pub term_years: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate: Rate, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            term_years,
        }
    }

    /// build from an annual percentage such as `6.88`
    pub fn from_percent(principal: Money, annual_rate_percent: Decimal, term_years: u32) -> Self {
        Self::new(principal, Rate::from_percent(annual_rate_percent), term_years)
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }

    /// upper bound on schedule length
    pub fn term_months(&self) -> u32 {
        self.term_years * 12
    }
}

/// extra principal layered on top of the scheduled payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaymentScenario {
    /// paid every month
    pub extra_monthly: Money,
    /// paid every twelfth month
    pub extra_annual: Money,
    /// paid once, in `one_time_month`
    pub extra_one_time: Money,
    /// 1-based month of the one-time payment
    pub one_time_month: u32,
}

impl PrepaymentScenario {
    pub const DEFAULT_ONE_TIME_MONTH: u32 = 12;

    /// no extra payments at all
    pub fn none() -> Self {
        Self {
            extra_monthly: Money::ZERO,
            extra_annual: Money::ZERO,
            extra_one_time: Money::ZERO,
            one_time_month: Self::DEFAULT_ONE_TIME_MONTH,
        }
    }

    pub fn with_monthly(mut self, amount: Money) -> Self {
        self.extra_monthly = amount;
        self
    }

    pub fn with_annual(mut self, amount: Money) -> Self {
        self.extra_annual = amount;
        self
    }

    pub fn with_one_time(mut self, amount: Money, month: u32) -> Self {
        self.extra_one_time = amount;
        self.one_time_month = month;
        self
    }

    pub fn has_extras(&self) -> bool {
        self.extra_monthly.is_positive()
            || self.extra_annual.is_positive()
            || self.extra_one_time.is_positive()
    }
}

impl Default for PrepaymentScenario {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_terms_from_percent() {
        let loan = LoanTerms::from_percent(Money::from_major(290_000), dec!(6.88), 30);
        assert_eq!(loan.annual_rate.as_decimal(), dec!(0.0688));
        assert_eq!(loan.term_months(), 360);
    }

    #[test]
    fn test_scenario_builders() {
        let scenario = PrepaymentScenario::none()
            .with_monthly(Money::from_major(100))
            .with_one_time(Money::from_major(5_000), 24);

        assert!(scenario.has_extras());
        assert_eq!(scenario.extra_annual, Money::ZERO);
        assert_eq!(scenario.one_time_month, 24);
        assert!(!PrepaymentScenario::default().has_extras());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(LoanLabel::A.to_string(), "Mortgage A");
        assert_eq!(LoanLabel::B.csv_file_name(), "mortgage-b-amortization.csv");
    }
}
