//! Side-by-side comparison of two schedules.
//!
//! Deltas are always taken as `A - B`: a positive delta means Mortgage B is
//! lower (better) on that metric, a negative one means Mortgage A is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;
use crate::payments::{build_schedule, Schedule};
use crate::report::format_currency;
use crate::types::LoanLabel;
use crate::validation::ComparisonInputs;

/// which loan comes out ahead on a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leader {
    Loan(LoanLabel),
    Tie,
}

impl Leader {
    fn from_interest(delta: Money) -> Self {
        if delta.is_positive() {
            Leader::Loan(LoanLabel::B)
        } else if delta.is_negative() {
            Leader::Loan(LoanLabel::A)
        } else {
            Leader::Tie
        }
    }

    fn from_months(delta: i64) -> Self {
        match delta {
            d if d > 0 => Leader::Loan(LoanLabel::B),
            d if d < 0 => Leader::Loan(LoanLabel::A),
            _ => Leader::Tie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// `a.total_interest - b.total_interest`
    pub interest_delta: Money,
    /// `a.payoff_months - b.payoff_months`
    pub payoff_delta: i64,
    pub interest_leader: Leader,
    pub payoff_leader: Leader,
    pub narrative: String,
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.narrative)
    }
}

pub struct ComparisonSummarizer;

impl ComparisonSummarizer {
    pub fn summarize(a: &Schedule, b: &Schedule) -> ComparisonSummary {
        let interest_delta = a.total_interest - b.total_interest;
        let payoff_delta = a.payoff_months as i64 - b.payoff_months as i64;

        let interest_leader = Leader::from_interest(interest_delta);
        let payoff_leader = Leader::from_months(payoff_delta);

        let interest_text = match interest_leader {
            Leader::Tie => "Both mortgages have the same total interest cost".to_string(),
            Leader::Loan(label) => format!(
                "{} saves about {} in total interest",
                label,
                format_currency(interest_delta.abs())
            ),
        };

        let payoff_text = match payoff_leader {
            Leader::Tie => "both mortgages pay off in the same time".to_string(),
            Leader::Loan(label) => format!(
                "{} pays off faster by {} months",
                label,
                payoff_delta.unsigned_abs()
            ),
        };

        ComparisonSummary {
            interest_delta,
            payoff_delta,
            interest_leader,
            payoff_leader,
            narrative: format!("{}. {}.", interest_text, payoff_text),
        }
    }
}

/// both schedules plus their summary, computed from one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub schedule_a: Schedule,
    pub schedule_b: Schedule,
    pub summary: ComparisonSummary,
}

impl Comparison {
    /// the two schedules share nothing and are built independently
    pub fn compute(inputs: &ComparisonInputs) -> Self {
        let schedule_a = build_schedule(&inputs.mortgage_a.loan, &inputs.mortgage_a.scenario);
        let schedule_b = build_schedule(&inputs.mortgage_b.loan, &inputs.mortgage_b.scenario);
        let summary = ComparisonSummarizer::summarize(&schedule_a, &schedule_b);

        Self {
            schedule_a,
            schedule_b,
            summary,
        }
    }

    pub fn schedule(&self, label: LoanLabel) -> &Schedule {
        match label {
            LoanLabel::A => &self.schedule_a,
            LoanLabel::B => &self.schedule_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparisonConfig;
    use crate::types::{LoanTerms, PrepaymentScenario};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn schedule(rate: rust_decimal::Decimal, years: u32) -> Schedule {
        build_schedule(
            &LoanTerms::from_percent(Money::from_major(290_000), rate, years),
            &PrepaymentScenario::none(),
        )
    }

    #[test]
    fn test_identical_schedules_tie() {
        let a = schedule(dec!(6.88), 30);
        let b = a.clone();
        let summary = ComparisonSummarizer::summarize(&a, &b);

        assert_eq!(summary.interest_leader, Leader::Tie);
        assert_eq!(summary.payoff_leader, Leader::Tie);
        assert_eq!(
            summary.narrative,
            "Both mortgages have the same total interest cost. both mortgages pay off in the same time."
        );
    }

    #[test]
    fn test_cheaper_shorter_b_wins_both() {
        let a = schedule(dec!(6.88), 30);
        let b = schedule(dec!(5.88), 20);
        let summary = ComparisonSummarizer::summarize(&a, &b);

        assert!(summary.interest_delta.is_positive());
        assert_eq!(summary.payoff_delta, 120);
        assert_eq!(summary.interest_leader, Leader::Loan(LoanLabel::B));
        assert_eq!(summary.payoff_leader, Leader::Loan(LoanLabel::B));
        assert!(summary.narrative.starts_with("Mortgage B saves about $"));
        assert!(summary.narrative.ends_with("Mortgage B pays off faster by 120 months."));
    }

    #[test]
    fn test_sign_convention_flips_with_order() {
        let a = schedule(dec!(5.88), 20);
        let b = schedule(dec!(6.88), 30);
        let summary = ComparisonSummarizer::summarize(&a, &b);

        assert!(summary.interest_delta.is_negative());
        assert_eq!(summary.payoff_delta, -120);
        assert_eq!(summary.interest_leader, Leader::Loan(LoanLabel::A));
        assert!(summary.narrative.contains("Mortgage A pays off faster by 120 months"));
    }

    #[test]
    fn test_payoff_tie_with_interest_winner() {
        let c = schedule(dec!(6), 30);
        let d = schedule(dec!(5), 30);
        let summary = ComparisonSummarizer::summarize(&c, &d);
        assert_eq!(summary.interest_leader, Leader::Loan(LoanLabel::B));
        assert_eq!(summary.payoff_leader, Leader::Tie);
        assert!(summary.narrative.ends_with("both mortgages pay off in the same time."));
    }

    #[test]
    fn test_compute_from_default_inputs() {
        let inputs = ComparisonConfig::default().validate().unwrap();
        let comparison = Comparison::compute(&inputs);

        assert_eq!(comparison.schedule(LoanLabel::A).payoff_months, 360);
        assert_eq!(comparison.schedule(LoanLabel::B).payoff_months, 240);
        assert_eq!(comparison.summary.payoff_leader, Leader::Loan(LoanLabel::B));
    }
}
