pub mod amortization;
pub mod calculator;
pub mod prepayment;

pub use amortization::{build_schedule, Schedule, ScheduleBuilder, ScheduleRow};
pub use calculator::{monthly_payment, PaymentCalculator};
pub use prepayment::ExtraPayment;
