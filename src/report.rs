//! Presentation helpers: currency text, payoff durations, summary blocks and
//! the amortization table. Everything here reads a [`Schedule`] and never
//! changes it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::{builder::Builder, Table};

use crate::decimal::Money;
use crate::payments::Schedule;
use crate::types::LoanLabel;

pub const TABLE_HEADERS: [&str; 6] =
    ["Month", "Payment", "Principal", "Interest", "Extra", "Balance"];

/// format as US dollars, e.g. `$1,905.76`
pub fn format_currency(amount: Money) -> String {
    let cents = amount.to_cents();
    let text = format!("{:.2}", cents.as_decimal().abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if cents.is_negative() { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `Xy Zm (N months)`
pub fn months_to_years_months(months: u32) -> String {
    format!("{}y {}m ({} months)", months / 12, months % 12, months)
}

/// labelled headline figures for one schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub label: LoanLabel,
    pub entries: Vec<(String, String)>,
}

impl ScheduleSummary {
    pub fn from_schedule(label: LoanLabel, schedule: &Schedule) -> Self {
        let entries = vec![
            ("Base Monthly Payment".to_string(), format_currency(schedule.base_payment)),
            ("Total Interest".to_string(), format_currency(schedule.total_interest)),
            ("Total Paid".to_string(), format_currency(schedule.total_paid)),
            ("Time to Payoff".to_string(), months_to_years_months(schedule.payoff_months)),
        ];
        Self { label, entries }
    }

    /// adds a payoff date entry when the first payment month is known
    pub fn with_start(mut self, schedule: &Schedule, first_payment: NaiveDate) -> Self {
        if let Some(date) = schedule.payoff_date(first_payment) {
            self.entries
                .push(("Payoff Date".to_string(), date.format("%b %Y").to_string()));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(label, _)| label == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        let width = self.entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (name, value) in &self.entries {
            writeln!(f, "  {:<width$}  {}", name, value, width = width)?;
        }
        Ok(())
    }
}

/// full amortization table, currency formatted
pub fn render_table(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return "(no payments)".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(TABLE_HEADERS);
    for row in schedule.rows() {
        builder.push_record([
            row.month.to_string(),
            format_currency(row.payment),
            format_currency(row.principal),
            format_currency(row.interest),
            format_currency(row.extra),
            format_currency(row.balance),
        ]);
    }

    Table::from(builder).to_string()
}
