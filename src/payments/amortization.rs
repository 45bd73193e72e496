use chrono::{Months, NaiveDate};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{LoanTerms, PrepaymentScenario};

use super::calculator::PaymentCalculator;

/// one month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based, contiguous
    pub month: u32,
    /// principal + interest actually paid
    pub payment: Money,
    /// principal repaid, extra included
    pub principal: Money,
    pub interest: Money,
    /// extra principal actually applied
    pub extra: Money,
    /// remaining principal after this payment
    pub balance: Money,
}

impl ScheduleRow {
    /// principal repaid by the base payment alone
    pub fn scheduled_principal(&self) -> Money {
        self.principal - self.extra
    }
}

/// Month-by-month outcome of one loan under one prepayment scenario.
///
/// A schedule is built in one go by [`ScheduleBuilder`] and has no mutating
/// methods; recomputing on new inputs produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub base_payment: Money,
    rows: Vec<ScheduleRow>,
    pub total_interest: Money,
    pub total_paid: Money,
    pub payoff_months: u32,
}

impl Schedule {
    /// build the schedule for `loan` under `scenario`
    pub fn generate(loan: &LoanTerms, scenario: &PrepaymentScenario) -> Self {
        ScheduleBuilder::new(*loan, *scenario).build()
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// row for a 1-based month
    pub fn row(&self, month: u32) -> Option<&ScheduleRow> {
        month
            .checked_sub(1)
            .and_then(|index| self.rows.get(index as usize))
    }

    /// remaining balance after `month`; zero once the loan is paid off
    pub fn balance_after(&self, month: u32) -> Option<Money> {
        if month == 0 {
            return None;
        }
        match self.row(month) {
            Some(row) => Some(row.balance),
            None => self.rows.last().map(|last| last.balance),
        }
    }

    pub fn final_balance(&self) -> Money {
        self.rows.last().map(|r| r.balance).unwrap_or(Money::ZERO)
    }

    pub fn is_paid_off(&self) -> bool {
        self.final_balance().is_zero()
    }

    /// sum of all extra principal applied
    pub fn total_extra(&self) -> Money {
        self.rows.iter().map(|r| r.extra).sum()
    }

    /// calendar month of the last payment, given the month of the first one
    pub fn payoff_date(&self, first_payment: NaiveDate) -> Option<NaiveDate> {
        let last = self.payoff_months.checked_sub(1)?;
        first_payment.checked_add_months(Months::new(last))
    }
}

/// Builds a [`Schedule`] from loan terms and a prepayment scenario.
///
/// Each month accrues interest on the running balance, applies the scheduled
/// principal (capped at the balance) and then whatever extra principal the
/// scenario requests, clamped so the balance never goes negative. Iteration
/// stops at payoff or after `term_years * 12` months, whichever comes first.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBuilder {
    loan: LoanTerms,
    scenario: PrepaymentScenario,
}

impl ScheduleBuilder {
    pub fn new(loan: LoanTerms, scenario: PrepaymentScenario) -> Self {
        Self { loan, scenario }
    }

    pub fn build(&self) -> Schedule {
        let calculator = PaymentCalculator::new(self.loan);
        let base_payment = calculator.monthly_payment();
        let max_months = self.loan.term_months();

        let mut balance = self.loan.principal;
        let mut total_interest = Money::ZERO;
        let mut total_paid = Money::ZERO;
        let mut rows = Vec::new();

        let mut month = 1;
        while month <= max_months && balance.is_positive() {
            let interest = calculator.interest_on(balance);
            let scheduled_principal = (base_payment - interest).min(balance);

            let requested = self.scenario.extra_for_month(month);
            let extra = requested.applicable(balance - scheduled_principal);

            let principal = (scheduled_principal + extra).max(Money::ZERO);
            let payment = principal + interest;

            balance = (balance - principal).max(Money::ZERO);
            total_interest += interest;
            total_paid += payment;

            if extra.is_positive() {
                trace!(
                    "month {}: applied extra {} of {} requested",
                    month,
                    extra,
                    requested.total()
                );
            }

            rows.push(ScheduleRow {
                month,
                payment,
                principal,
                interest,
                extra,
                balance,
            });

            month += 1;
        }

        let payoff_months = rows.len() as u32;

        debug!(
            "built schedule: base payment {}, payoff {} of {} months, total interest {}",
            base_payment.to_cents(),
            payoff_months,
            max_months,
            total_interest.to_cents()
        );

        Schedule {
            base_payment,
            rows,
            total_interest,
            total_paid,
            payoff_months,
        }
    }
}

/// compute the schedule for one loan and its scenario
pub fn build_schedule(loan: &LoanTerms, scenario: &PrepaymentScenario) -> Schedule {
    ScheduleBuilder::new(*loan, *scenario).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn mortgage() -> LoanTerms {
        LoanTerms::from_percent(Money::from_major(290_000), dec!(6.88), 30)
    }

    #[test]
    fn test_plain_schedule_runs_full_term() {
        let schedule = build_schedule(&mortgage(), &PrepaymentScenario::none());

        assert_eq!(schedule.base_payment.to_cents(), Money::from_cents(190_606));
        assert_eq!(schedule.payoff_months, 360);
        assert_eq!(schedule.rows().len(), 360);
        assert!(schedule.final_balance() < Money::from_cents(1));
        assert_eq!(schedule.total_extra(), Money::ZERO);

        // every month but the last pays exactly the base payment
        for row in &schedule.rows()[..359] {
            assert_eq!(row.payment, schedule.base_payment);
        }
    }

    #[test]
    fn test_first_row_breakdown() {
        let schedule = build_schedule(&mortgage(), &PrepaymentScenario::none());
        let first = schedule.row(1).unwrap();

        // 290000 * 0.0688 / 12
        assert_eq!(first.interest.to_cents(), Money::from_cents(166_267));
        assert_eq!(first.payment, first.principal + first.interest);
        assert_eq!(first.balance, Money::from_major(290_000) - first.principal);
    }

    #[test]
    fn test_monthly_extra_shortens_payoff() {
        let plain = build_schedule(&mortgage(), &PrepaymentScenario::none());
        let extra = build_schedule(
            &mortgage(),
            &PrepaymentScenario::none().with_monthly(Money::from_major(500)),
        );

        assert!(extra.payoff_months < 360);
        assert!(extra.total_interest < plain.total_interest);
        assert!(extra.is_paid_off());
        assert_eq!(extra.final_balance(), Money::ZERO);
    }

    #[test]
    fn test_zero_principal_is_empty() {
        let loan = LoanTerms::from_percent(Money::ZERO, dec!(5), 30);
        let schedule = build_schedule(&loan, &PrepaymentScenario::none());

        assert!(schedule.is_empty());
        assert_eq!(schedule.payoff_months, 0);
        assert_eq!(schedule.total_interest, Money::ZERO);
        assert_eq!(schedule.total_paid, Money::ZERO);
        assert_eq!(schedule.row(1), None);
        assert_eq!(schedule.payoff_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), None);
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let loan = LoanTerms::new(Money::from_major(12_000), Rate::ZERO, 1);
        let schedule = build_schedule(&loan, &PrepaymentScenario::none());

        assert_eq!(schedule.payoff_months, 12);
        assert!(schedule.rows().iter().all(|r| r.interest.is_zero()));
        assert_eq!(schedule.total_paid, Money::from_major(12_000));
        assert_eq!(schedule.final_balance(), Money::ZERO);
    }

    #[test]
    fn test_one_time_extra_lands_in_its_month() {
        let loan = LoanTerms::new(Money::from_major(12_000), Rate::ZERO, 1);
        let scenario = PrepaymentScenario::none().with_one_time(Money::from_major(3_000), 3);
        let schedule = build_schedule(&loan, &scenario);

        let third = schedule.row(3).unwrap();
        assert_eq!(third.extra, Money::from_major(3_000));
        assert_eq!(third.principal, Money::from_major(4_000));
        assert_eq!(third.balance, Money::from_major(5_000));
        // 3 months at 1000 + 3000 extra, then 5 more months of 1000
        assert_eq!(schedule.payoff_months, 8);
        assert_eq!(schedule.total_extra(), Money::from_major(3_000));
    }

    #[test]
    fn test_extra_is_clamped_on_final_payment() {
        let loan = LoanTerms::new(Money::from_major(1_000), Rate::ZERO, 1);
        let scenario = PrepaymentScenario::none().with_one_time(Money::from_major(5_000), 1);
        let schedule = build_schedule(&loan, &scenario);

        assert_eq!(schedule.payoff_months, 1);
        let only = schedule.row(1).unwrap();
        assert_eq!(only.principal, Money::from_major(1_000));
        assert!(only.extra <= only.principal);
        assert_eq!(only.scheduled_principal() + only.extra, only.principal);
        assert_eq!(only.balance, Money::ZERO);
    }

    #[test]
    fn test_balance_after_and_payoff_date() {
        let loan = LoanTerms::new(Money::from_major(1_200), Rate::ZERO, 1);
        let schedule = build_schedule(&loan, &PrepaymentScenario::none());

        assert_eq!(schedule.balance_after(0), None);
        assert_eq!(schedule.balance_after(1), Some(Money::from_major(1_100)));
        assert_eq!(schedule.balance_after(40), Some(Money::ZERO));

        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(schedule.payoff_date(start), NaiveDate::from_ymd_opt(2026, 2, 1));
    }

    #[test]
    fn test_early_payoff_on_huge_term_allocates_only_used_rows() {
        // 1.2 billion scheduled months, paid off in the first
        let loan = LoanTerms::from_percent(Money::from_major(1_000), dec!(5), 100_000_000);
        let scenario = PrepaymentScenario::none().with_monthly(Money::from_major(5_000));
        let schedule = build_schedule(&loan, &scenario);

        assert_eq!(schedule.payoff_months, 1);
        assert_eq!(schedule.rows().len(), 1);
        assert!(schedule.is_paid_off());
    }
}
