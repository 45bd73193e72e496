use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::LoanTerms;

/// Fixed base monthly payment for a fully-amortizing loan.
///
/// `annual_rate` is a fraction; the periodic rate is `annual_rate / 12`.
/// A zero rate degrades to a flat `principal / months` split. Callers must
/// reject a zero term upstream; for zero months the whole principal is
/// returned instead of dividing by zero.
pub fn monthly_payment(principal: Money, annual_rate: Rate, term_years: u32) -> Money {
    let months = term_years * 12;
    if months == 0 {
        return principal;
    }

    let r = annual_rate.monthly_rate().as_decimal();

    if r.is_zero() {
        return principal / Decimal::from(months);
    }

    // payment = P * r / (1 - (1 + r)^-n)
    let discount = discount_factor(r, months);
    let denominator = Decimal::ONE - discount;

    Money::from_decimal(principal.as_decimal() * r / denominator)
}

/// `(1 + r)^-n`, built from `1 / (1 + r)` so long terms shrink toward
/// zero instead of overflowing
fn discount_factor(r: Decimal, periods: u32) -> Decimal {
    let step = Decimal::ONE / (Decimal::ONE + r);

    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= step;
        if factor.is_zero() {
            break;
        }
    }
    factor
}

/// payment calculator bound to one set of loan terms
#[derive(Debug, Clone, Copy)]
pub struct PaymentCalculator {
    terms: LoanTerms,
}

impl PaymentCalculator {
    pub fn new(terms: LoanTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// fixed base payment for the bound terms
    pub fn monthly_payment(&self) -> Money {
        monthly_payment(self.terms.principal, self.terms.annual_rate, self.terms.term_years)
    }

    /// interest owed for one month on `balance`
    pub fn interest_on(&self, balance: Money) -> Money {
        balance.apply_rate(self.terms.monthly_rate())
    }
}
