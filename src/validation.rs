//! Turns raw [`ComparisonConfig`] values into engine inputs.
//!
//! Every field of both mortgages is checked and all failures are returned
//! together, so the engine is only ever called with a complete, valid set
//! of inputs.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ComparisonConfig, MortgageConfig};
use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result, ValidationError};
use crate::types::{LoanLabel, LoanTerms, PrepaymentScenario};

/// longest accepted term, in years
pub const MAX_TERM_YEARS: i64 = 100;

/// highest accepted annual rate, in percent
pub const MAX_RATE_PERCENT: i64 = 100;

/// largest accepted loan amount or prepayment
///
/// At the term and rate limits the schedule totals stay below 1e15, well
/// inside what `Decimal` holds at the money scale.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// validated inputs for one mortgage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInputs {
    pub loan: LoanTerms,
    pub scenario: PrepaymentScenario,
}

/// validated inputs for both mortgages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInputs {
    pub mortgage_a: MortgageInputs,
    pub mortgage_b: MortgageInputs,
}

impl ComparisonInputs {
    pub fn mortgage(&self, label: LoanLabel) -> &MortgageInputs {
        match label {
            LoanLabel::A => &self.mortgage_a,
            LoanLabel::B => &self.mortgage_b,
        }
    }
}

impl MortgageConfig {
    /// check one mortgage, collecting every bad field
    pub fn validate(
        &self,
        label: LoanLabel,
    ) -> std::result::Result<MortgageInputs, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let amount_cap = Decimal::from(MAX_AMOUNT);

        let loan_amount = bounded(
            self.loan_amount,
            amount_cap,
            &mut errors,
            ValidationError::LoanAmount { label },
        );
        let rate_percent = bounded(
            self.rate_percent,
            Decimal::from(MAX_RATE_PERCENT),
            &mut errors,
            ValidationError::InterestRate { label },
        );

        let years = match u32::try_from(self.years) {
            Ok(y) if y >= 1 && self.years <= MAX_TERM_YEARS => Some(y),
            _ => {
                errors.push(ValidationError::Years { label });
                None
            }
        };

        let extra_monthly = bounded(
            self.extra_monthly,
            amount_cap,
            &mut errors,
            ValidationError::ExtraMonthly { label },
        );
        let extra_annual = bounded(
            self.extra_annual,
            amount_cap,
            &mut errors,
            ValidationError::ExtraAnnual { label },
        );
        let extra_one_time = bounded(
            self.extra_one_time,
            amount_cap,
            &mut errors,
            ValidationError::ExtraOneTime { label },
        );

        let one_time_month = match u32::try_from(self.one_time_month) {
            Ok(m) if m >= 1 => Some(m),
            _ => {
                errors.push(ValidationError::OneTimeMonth { label });
                None
            }
        };

        match (
            loan_amount,
            rate_percent,
            years,
            extra_monthly,
            extra_annual,
            extra_one_time,
            one_time_month,
        ) {
            (
                Some(amount),
                Some(rate),
                Some(years),
                Some(monthly),
                Some(annual),
                Some(one_time),
                Some(month),
            ) if errors.is_empty() => {
                let principal = Money::from_decimal(amount);
                Ok(MortgageInputs {
                    loan: LoanTerms::new(principal, Rate::from_percent(rate), years),
                    scenario: PrepaymentScenario {
                        extra_monthly: Money::from_decimal(monthly),
                        extra_annual: Money::from_decimal(annual),
                        extra_one_time: Money::from_decimal(one_time),
                        one_time_month: month,
                    },
                })
            }
            _ => Err(errors),
        }
    }
}

impl ComparisonConfig {
    /// validate both mortgages; fails with every field-level error found
    pub fn validate(&self) -> Result<ComparisonInputs> {
        let a = self.mortgage_a.validate(LoanLabel::A);
        let b = self.mortgage_b.validate(LoanLabel::B);

        match (a, b) {
            (Ok(mortgage_a), Ok(mortgage_b)) => Ok(ComparisonInputs {
                mortgage_a,
                mortgage_b,
            }),
            (a, b) => {
                let errors: Vec<ValidationError> = a
                    .err()
                    .into_iter()
                    .flatten()
                    .chain(b.err().into_iter().flatten())
                    .collect();
                warn!("rejected comparison input: {} invalid field(s)", errors.len());
                Err(MortgageError::Validation(errors))
            }
        }
    }
}

/// accept `value` when it lies in `0..=max`
fn bounded(
    value: Decimal,
    max: Decimal,
    errors: &mut Vec<ValidationError>,
    error: ValidationError,
) -> Option<Decimal> {
    if value < Decimal::ZERO || value > max {
        errors.push(error);
        None
    } else {
        Some(value)
    }
}
