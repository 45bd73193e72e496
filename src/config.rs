use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{MortgageError, Result};
use crate::types::LoanLabel;

/// Raw inputs for one mortgage, as entered by a user.
///
/// Values are kept signed and unchecked so that a bad entry survives
/// deserialization and is reported by validation with its field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageConfig {
    pub loan_amount: Decimal,
    /// annual rate in percent, e.g. `6.88`
    pub rate_percent: Decimal,
    pub years: i64,
    pub extra_monthly: Decimal,
    pub extra_annual: Decimal,
    pub extra_one_time: Decimal,
    pub one_time_month: i64,
}

impl MortgageConfig {
    /// create fixed-rate configuration with no prepayments
    pub fn fixed_rate(loan_amount: Decimal, rate_percent: Decimal, years: i64) -> Self {
        Self {
            loan_amount,
            rate_percent,
            years,
            extra_monthly: Decimal::ZERO,
            extra_annual: Decimal::ZERO,
            extra_one_time: Decimal::ZERO,
            one_time_month: 12,
        }
    }

    /// default for Mortgage A: 30 years at 6.88%
    pub fn default_a() -> Self {
        Self::fixed_rate(dec!(290000), dec!(6.88), 30)
    }

    /// default for Mortgage B: 20 years at 5.88%
    pub fn default_b() -> Self {
        Self::fixed_rate(dec!(290000), dec!(5.88), 20)
    }

    pub fn with_extra_monthly(mut self, amount: Decimal) -> Self {
        self.extra_monthly = amount;
        self
    }

    pub fn with_extra_annual(mut self, amount: Decimal) -> Self {
        self.extra_annual = amount;
        self
    }

    pub fn with_extra_one_time(mut self, amount: Decimal, month: i64) -> Self {
        self.extra_one_time = amount;
        self.one_time_month = month;
        self
    }
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self::default_a()
    }
}

/// both sides of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default = "MortgageConfig::default_a")]
    pub mortgage_a: MortgageConfig,
    #[serde(default = "MortgageConfig::default_b")]
    pub mortgage_b: MortgageConfig,
}

impl ComparisonConfig {
    pub fn new(mortgage_a: MortgageConfig, mortgage_b: MortgageConfig) -> Self {
        Self {
            mortgage_a,
            mortgage_b,
        }
    }

    pub fn mortgage(&self, label: LoanLabel) -> &MortgageConfig {
        match label {
            LoanLabel::A => &self.mortgage_a,
            LoanLabel::B => &self.mortgage_b,
        }
    }

    pub fn mortgage_mut(&mut self, label: LoanLabel) -> &mut MortgageConfig {
        match label {
            LoanLabel::A => &mut self.mortgage_a,
            LoanLabel::B => &mut self.mortgage_b,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("not a file: {}", path.display()),
            });
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::new(MortgageConfig::default_a(), MortgageConfig::default_b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.mortgage_a.rate_percent, dec!(6.88));
        assert_eq!(config.mortgage_a.years, 30);
        assert_eq!(config.mortgage_b.rate_percent, dec!(5.88));
        assert_eq!(config.mortgage_b.years, 20);
        assert_eq!(config.mortgage(LoanLabel::B).one_time_month, 12);
    }

    #[test]
    fn test_json_with_numbers_and_partial_fields() {
        let json = r#"{
            "mortgage_a": { "loan_amount": 350000, "rate_percent": 6.5, "years": 15, "extra_monthly": 250 },
            "mortgage_b": { "loan_amount": "350000", "rate_percent": "7.25", "years": 30 }
        }"#;
        let config = ComparisonConfig::from_json_str(json).unwrap();

        assert_eq!(config.mortgage_a.loan_amount, dec!(350000));
        assert_eq!(config.mortgage_a.rate_percent, dec!(6.5));
        assert_eq!(config.mortgage_a.extra_monthly, dec!(250));
        assert_eq!(config.mortgage_a.one_time_month, 12);
        assert_eq!(config.mortgage_b.rate_percent, dec!(7.25));
        assert_eq!(config.mortgage_b.extra_annual, Decimal::ZERO);
    }

    #[test]
    fn test_missing_mortgage_uses_default() {
        let json = r#"{ "mortgage_a": { "years": 10 } }"#;
        let config = ComparisonConfig::from_json_str(json).unwrap();
        assert_eq!(config.mortgage_a.years, 10);
        assert_eq!(config.mortgage_b, MortgageConfig::default_b());
    }

    #[test]
    fn test_fractional_years_rejected() {
        let json = r#"{ "mortgage_a": { "years": 30.5 } }"#;
        let err = ComparisonConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, MortgageError::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ComparisonConfig::new(
            MortgageConfig::default_a().with_extra_one_time(dec!(10000), 24),
            MortgageConfig::default_b().with_extra_annual(dec!(1200)),
        );
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ComparisonConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ComparisonConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, MortgageError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_overrides_through_mortgage_mut() {
        let mut config = ComparisonConfig::default();
        config.mortgage_mut(LoanLabel::A).extra_monthly = dec!(500);
        assert_eq!(config.mortgage_a.extra_monthly, dec!(500));
    }
}
