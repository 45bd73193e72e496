//! Balance-over-time chart data for two schedules.
//!
//! The chart shares one horizontal axis (months, up to the longer schedule)
//! and one vertical axis (balance, up to the larger balance after the first
//! payment). Pixel work is left to the caller; [`BalanceChart::render_text`]
//! is a plain-text rendering for terminals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::payments::Schedule;
use crate::report::format_currency;

/// fractions of each axis that get a tick label
pub const TICK_FRACTIONS: [(u32, u32); 5] = [(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)];

/// balances of both loans at one month, as shown in a hover tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: u32,
    pub balance_a: Money,
    pub balance_b: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceChart {
    series_a: Vec<Money>,
    series_b: Vec<Money>,
    max_months: u32,
    max_balance: Money,
}

impl BalanceChart {
    pub fn new(a: &Schedule, b: &Schedule) -> Self {
        let series_a: Vec<Money> = a.rows().iter().map(|r| r.balance).collect();
        let series_b: Vec<Money> = b.rows().iter().map(|r| r.balance).collect();

        let max_months = (series_a.len().max(series_b.len()).max(1)) as u32;
        let first = |s: &[Money]| s.first().copied().unwrap_or(Money::ZERO);
        let max_balance = first(&series_a).max(first(&series_b)).max(Money::ONE);

        Self {
            series_a,
            series_b,
            max_months,
            max_balance,
        }
    }

    pub fn max_months(&self) -> u32 {
        self.max_months
    }

    pub fn max_balance(&self) -> Money {
        self.max_balance
    }

    /// balance labels from the top of the axis down
    pub fn y_ticks(&self) -> Vec<Money> {
        TICK_FRACTIONS
            .iter()
            .map(|&(num, den)| {
                let remaining = Decimal::from(den - num) / Decimal::from(den);
                self.max_balance * remaining
            })
            .collect()
    }

    /// month labels from left to right, rounded half up
    pub fn x_ticks(&self) -> Vec<u32> {
        TICK_FRACTIONS
            .iter()
            .map(|&(num, den)| (self.max_months * num * 2 + den) / (den * 2))
            .collect()
    }

    /// Tooltip lookup for a month.
    ///
    /// Months below 1 snap to 1. A series that ended earlier reports its last
    /// balance; an empty series reports zero.
    pub fn point_at(&self, month: u32) -> ChartPoint {
        let month = month.max(1);
        ChartPoint {
            month,
            balance_a: clamped_balance(&self.series_a, month),
            balance_b: clamped_balance(&self.series_b, month),
        }
    }

    /// month under a horizontal position given as a fraction of the plot width
    pub fn month_for_fraction(&self, fraction: f64) -> u32 {
        let fraction = if fraction.is_finite() { fraction.max(0.0) } else { 0.0 };
        let month = (fraction * self.max_months as f64).round() as u32;
        month.max(1)
    }

    /// `Month 12: A $1,000.00 | B $2,000.00`
    pub fn tooltip(&self, month: u32) -> String {
        let point = self.point_at(month);
        format!(
            "Month {}: A {} | B {}",
            point.month,
            format_currency(point.balance_a),
            format_currency(point.balance_b)
        )
    }

    /// Draws both series on a character grid.
    ///
    /// `A` and `B` mark each loan, `*` marks cells both pass through.
    pub fn render_text(&self, width: usize, height: usize) -> String {
        let width = width.max(10);
        let height = height.max(4);
        let mut grid = vec![vec![' '; width]; height];

        self.plot(&mut grid, &self.series_a, 'A');
        self.plot(&mut grid, &self.series_b, 'B');

        let labels: Vec<String> = self.y_ticks().into_iter().map(format_currency).collect();
        let gutter = labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (i, line) in grid.iter().enumerate() {
            let label = tick_label_for_row(i, height)
                .map(|t| labels[t].as_str())
                .unwrap_or("");
            out.push_str(&format!("{:>gutter$} |", label, gutter = gutter));
            out.extend(line.iter());
            out.push('\n');
        }

        out.push_str(&format!("{:>gutter$} +{}\n", "", "-".repeat(width), gutter = gutter));

        let mut axis = vec![' '; width];
        for month in self.x_ticks() {
            let text = month.to_string();
            let col = self.column_for_month(month, width).min(width - text.len().min(width));
            for (offset, ch) in text.chars().enumerate() {
                if let Some(cell) = axis.get_mut(col + offset) {
                    *cell = ch;
                }
            }
        }
        out.push_str(&format!("{:>gutter$}  ", "", gutter = gutter));
        out.extend(axis.iter());
        out.push('\n');
        out.push_str(&format!(
            "{:>gutter$}  Months   A = Mortgage A, B = Mortgage B\n",
            "",
            gutter = gutter
        ));
        out
    }

    fn plot(&self, grid: &mut [Vec<char>], series: &[Money], mark: char) {
        let width = grid.first().map(|r| r.len()).unwrap_or(0);
        let height = grid.len();
        if width == 0 || height == 0 {
            return;
        }

        for col in 0..width {
            let month = self.month_for_column(col, width);
            let Some(balance) = series.get(month as usize - 1) else {
                continue;
            };
            let row = self.row_for_balance(*balance, height);
            let cell = &mut grid[row][col];
            *cell = if *cell == ' ' || *cell == mark { mark } else { '*' };
        }
    }

    fn month_for_column(&self, col: usize, width: usize) -> u32 {
        let fraction = (col as f64 + 1.0) / width as f64;
        self.month_for_fraction(fraction)
    }

    fn column_for_month(&self, month: u32, width: usize) -> usize {
        let fraction = month as f64 / self.max_months as f64;
        ((fraction * width as f64).round() as usize).saturating_sub(1).min(width - 1)
    }

    fn row_for_balance(&self, balance: Money, height: usize) -> usize {
        let ratio = (balance.as_decimal() / self.max_balance.as_decimal())
            .to_f64()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        let from_bottom = (ratio * (height - 1) as f64).round() as usize;
        height - 1 - from_bottom
    }
}

fn clamped_balance(series: &[Money], month: u32) -> Money {
    if series.is_empty() {
        return Money::ZERO;
    }
    let index = (month as usize - 1).min(series.len() - 1);
    series[index]
}

/// which y tick, if any, labels a grid row
fn tick_label_for_row(row: usize, height: usize) -> Option<usize> {
    let last = height - 1;
    (0..TICK_FRACTIONS.len()).find(|&t| (t * last + 2) / 4 == row)
}
