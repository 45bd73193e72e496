use thiserror::Error;

use crate::types::LoanLabel;

/// one rejected input field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid loan amount for {label}")]
    LoanAmount { label: LoanLabel },

    #[error("Invalid interest rate for {label}")]
    InterestRate { label: LoanLabel },

    #[error("Invalid years for {label}")]
    Years { label: LoanLabel },

    #[error("Invalid monthly prepayment for {label}")]
    ExtraMonthly { label: LoanLabel },

    #[error("Invalid annual prepayment for {label}")]
    ExtraAnnual { label: LoanLabel },

    #[error("Invalid one-time prepayment for {label}")]
    ExtraOneTime { label: LoanLabel },

    #[error("Invalid one-time month for {label}")]
    OneTimeMonth { label: LoanLabel },
}

impl ValidationError {
    /// loan the rejected field belongs to
    pub fn label(&self) -> LoanLabel {
        match self {
            ValidationError::LoanAmount { label }
            | ValidationError::InterestRate { label }
            | ValidationError::Years { label }
            | ValidationError::ExtraMonthly { label }
            | ValidationError::ExtraAnnual { label }
            | ValidationError::ExtraOneTime { label }
            | ValidationError::OneTimeMonth { label } => *label,
        }
    }

    /// config field name, matching the serialized config keys
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::LoanAmount { .. } => "loan_amount",
            ValidationError::InterestRate { .. } => "rate_percent",
            ValidationError::Years { .. } => "years",
            ValidationError::ExtraMonthly { .. } => "extra_monthly",
            ValidationError::ExtraAnnual { .. } => "extra_annual",
            ValidationError::ExtraOneTime { .. } => "extra_one_time",
            ValidationError::OneTimeMonth { .. } => "one_time_month",
        }
    }
}

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("{}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl MortgageError {
    /// field-level errors, empty for every other kind
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            MortgageError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MortgageError>;
