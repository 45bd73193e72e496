use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::PrepaymentScenario;

/// extra principal requested for a single month, split by trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtraPayment {
    pub monthly: Money,
    pub annual: Money,
    pub one_time: Money,
}

impl ExtraPayment {
    /// sum of all triggers, before clamping
    pub fn total(&self) -> Money {
        self.monthly + self.annual + self.one_time
    }

    /// portion of the requested extra that can actually be applied
    ///
    /// `room` is what is left of the balance after the scheduled principal.
    /// The result never drives the balance below zero and a negative request
    /// is floored at zero.
    pub fn applicable(&self, room: Money) -> Money {
        self.total().clamp_between(Money::ZERO, room.max(Money::ZERO))
    }
}

impl PrepaymentScenario {
    /// Extra principal requested in `month` (1-based).
    ///
    /// The three triggers are independent and additive: the recurring
    /// monthly amount always applies, the annual amount lands on every
    /// multiple of 12, and the one-time amount lands on `one_time_month`.
    pub fn extra_for_month(&self, month: u32) -> ExtraPayment {
        let annual = if self.extra_annual.is_positive() && month % 12 == 0 {
            self.extra_annual
        } else {
            Money::ZERO
        };

        let one_time = if self.extra_one_time.is_positive() && month == self.one_time_month {
            self.extra_one_time
        } else {
            Money::ZERO
        };

        ExtraPayment {
            monthly: self.extra_monthly,
            annual,
            one_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> PrepaymentScenario {
        PrepaymentScenario::none()
            .with_monthly(Money::from_major(100))
            .with_annual(Money::from_major(1_000))
            .with_one_time(Money::from_major(10_000), 24)
    }

    #[test]
    fn test_monthly_only_month() {
        let extra = scenario().extra_for_month(5);
        assert_eq!(extra.total(), Money::from_major(100));
        assert_eq!(extra.annual, Money::ZERO);
        assert_eq!(extra.one_time, Money::ZERO);
    }

    #[test]
    fn test_annual_month() {
        let extra = scenario().extra_for_month(12);
        assert_eq!(extra.annual, Money::from_major(1_000));
        assert_eq!(extra.total(), Money::from_major(1_100));
    }

    #[test]
    fn test_triggers_stack() {
        // month 24 is both an anniversary and the one-time month
        let extra = scenario().extra_for_month(24);
        assert_eq!(extra.total(), Money::from_major(11_100));
    }

    #[test]
    fn test_one_time_off_anniversary() {
        let s = PrepaymentScenario::none().with_one_time(Money::from_major(500), 7);
        assert_eq!(s.extra_for_month(7).total(), Money::from_major(500));
        assert_eq!(s.extra_for_month(19).total(), Money::ZERO);
    }

    #[test]
    fn test_applicable_clamps_to_room() {
        let extra = scenario().extra_for_month(24);
        assert_eq!(extra.applicable(Money::from_major(300)), Money::from_major(300));
        assert_eq!(extra.applicable(Money::from_major(-20)), Money::ZERO);
        assert_eq!(extra.applicable(Money::from_major(50_000)), Money::from_major(11_100));
    }

    #[test]
    fn test_negative_request_is_floored() {
        let extra = ExtraPayment {
            monthly: Money::from_major(-10),
            ..Default::default()
        };
        assert_eq!(extra.applicable(Money::from_major(100)), Money::ZERO);
    }
}
