pub mod chart;
pub mod comparison;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod payments;
pub mod report;
pub mod types;
pub mod validation;

// re-export key types
pub use chart::{BalanceChart, ChartPoint};
pub use comparison::{Comparison, ComparisonSummarizer, ComparisonSummary, Leader};
pub use config::{ComparisonConfig, MortgageConfig};
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result, ValidationError};
pub use export::{export_csv, to_csv_string, write_csv};
pub use payments::{
    build_schedule, monthly_payment, ExtraPayment, PaymentCalculator, Schedule, ScheduleBuilder,
    ScheduleRow,
};
pub use report::{format_currency, months_to_years_months, render_table, ScheduleSummary};
pub use types::{LoanLabel, LoanTerms, PrepaymentScenario};
pub use validation::{ComparisonInputs, MortgageInputs};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
