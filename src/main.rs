//! mortgage-compare CLI
//!
//! Compare two fixed-rate mortgages with optional prepayments.
//!
//! # Usage
//!
//! ```bash
//! # Compare the built-in defaults
//! mortgage-compare
//!
//! # Add $500/month extra to Mortgage A and compare
//! mortgage-compare --a-extra-monthly 500 compare
//!
//! # Full table for Mortgage B
//! mortgage-compare --config loans.json schedule --loan b
//!
//! # CSV export
//! mortgage-compare export --loan a --output mortgage-a-amortization.csv
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::debug;
use std::io;
use std::path::PathBuf;
use std::process;

use mortgage_compare::chrono::NaiveDate;
use mortgage_compare::{
    export_csv, render_table, write_csv, BalanceChart, Comparison, ComparisonConfig, Decimal,
    LoanLabel, MortgageError, Result, ScheduleSummary,
};

/// Compare amortization schedules for two mortgages
#[derive(Parser)]
#[command(name = "mortgage-compare", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with `mortgage_a` / `mortgage_b` inputs
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// First payment date (YYYY-MM-DD); adds a payoff date to summaries
    #[arg(long, global = true)]
    start: Option<NaiveDate>,

    #[command(flatten)]
    a: LoanOverridesA,

    #[command(flatten)]
    b: LoanOverridesB,
}

#[derive(Subcommand)]
enum Commands {
    /// Summaries for both mortgages and which one comes out ahead
    Compare,
    /// Month-by-month table for one mortgage
    Schedule {
        #[arg(long, value_enum, default_value = "a")]
        loan: LoanArg,
    },
    /// Remaining balance over time for both mortgages
    Chart {
        #[arg(long, default_value_t = 72)]
        width: usize,
        #[arg(long, default_value_t = 16)]
        height: usize,
    },
    /// Export one mortgage's schedule as CSV
    Export {
        #[arg(long, value_enum, default_value = "a")]
        loan: LoanArg,
        /// Output file; use `-` for stdout. Defaults to mortgage-<loan>-amortization.csv
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the default configuration as JSON
    Defaults,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LoanArg {
    A,
    B,
}

impl From<LoanArg> for LoanLabel {
    fn from(arg: LoanArg) -> Self {
        match arg {
            LoanArg::A => LoanLabel::A,
            LoanArg::B => LoanLabel::B,
        }
    }
}

/// per-field overrides applied on top of the configuration
#[derive(Debug, Default, Clone)]
struct LoanOverrides {
    amount: Option<Decimal>,
    rate: Option<Decimal>,
    years: Option<i64>,
    extra_monthly: Option<Decimal>,
    extra_annual: Option<Decimal>,
    extra_one_time: Option<Decimal>,
    one_time_month: Option<i64>,
}

#[derive(Args)]
struct LoanOverridesA {
    /// Mortgage A loan amount
    #[arg(
        id = "a_amount",
        long = "a-amount",
        global = true,
        allow_negative_numbers = true
    )]
    amount: Option<Decimal>,
    /// Mortgage A annual rate in percent
    #[arg(
        id = "a_rate",
        long = "a-rate",
        global = true,
        allow_negative_numbers = true
    )]
    rate: Option<Decimal>,
    /// Mortgage A term in years
    #[arg(
        id = "a_years",
        long = "a-years",
        global = true,
        allow_negative_numbers = true
    )]
    years: Option<i64>,
    /// Mortgage A extra principal every month
    #[arg(
        id = "a_extra_monthly",
        long = "a-extra-monthly",
        global = true,
        allow_negative_numbers = true
    )]
    extra_monthly: Option<Decimal>,
    /// Mortgage A extra principal every 12th month
    #[arg(
        id = "a_extra_annual",
        long = "a-extra-annual",
        global = true,
        allow_negative_numbers = true
    )]
    extra_annual: Option<Decimal>,
    /// Mortgage A one-time extra principal
    #[arg(
        id = "a_extra_one_time",
        long = "a-extra-one-time",
        global = true,
        allow_negative_numbers = true
    )]
    extra_one_time: Option<Decimal>,
    /// Month of Mortgage A's one-time payment
    #[arg(
        id = "a_one_time_month",
        long = "a-one-time-month",
        global = true,
        allow_negative_numbers = true
    )]
    one_time_month: Option<i64>,
}

#[derive(Args)]
struct LoanOverridesB {
    /// Mortgage B loan amount
    #[arg(
        id = "b_amount",
        long = "b-amount",
        global = true,
        allow_negative_numbers = true
    )]
    amount: Option<Decimal>,
    /// Mortgage B annual rate in percent
    #[arg(
        id = "b_rate",
        long = "b-rate",
        global = true,
        allow_negative_numbers = true
    )]
    rate: Option<Decimal>,
    /// Mortgage B term in years
    #[arg(
        id = "b_years",
        long = "b-years",
        global = true,
        allow_negative_numbers = true
    )]
    years: Option<i64>,
    /// Mortgage B extra principal every month
    #[arg(
        id = "b_extra_monthly",
        long = "b-extra-monthly",
        global = true,
        allow_negative_numbers = true
    )]
    extra_monthly: Option<Decimal>,
    /// Mortgage B extra principal every 12th month
    #[arg(
        id = "b_extra_annual",
        long = "b-extra-annual",
        global = true,
        allow_negative_numbers = true
    )]
    extra_annual: Option<Decimal>,
    /// Mortgage B one-time extra principal
    #[arg(
        id = "b_extra_one_time",
        long = "b-extra-one-time",
        global = true,
        allow_negative_numbers = true
    )]
    extra_one_time: Option<Decimal>,
    /// Month of Mortgage B's one-time payment
    #[arg(
        id = "b_one_time_month",
        long = "b-one-time-month",
        global = true,
        allow_negative_numbers = true
    )]
    one_time_month: Option<i64>,
}

impl From<&LoanOverridesA> for LoanOverrides {
    fn from(a: &LoanOverridesA) -> Self {
        Self {
            amount: a.amount,
            rate: a.rate,
            years: a.years,
            extra_monthly: a.extra_monthly,
            extra_annual: a.extra_annual,
            extra_one_time: a.extra_one_time,
            one_time_month: a.one_time_month,
        }
    }
}

impl From<&LoanOverridesB> for LoanOverrides {
    fn from(b: &LoanOverridesB) -> Self {
        Self {
            amount: b.amount,
            rate: b.rate,
            years: b.years,
            extra_monthly: b.extra_monthly,
            extra_annual: b.extra_annual,
            extra_one_time: b.extra_one_time,
            one_time_month: b.one_time_month,
        }
    }
}

fn apply_overrides(config: &mut ComparisonConfig, label: LoanLabel, o: LoanOverrides) {
    let m = config.mortgage_mut(label);
    if let Some(v) = o.amount {
        m.loan_amount = v;
    }
    if let Some(v) = o.rate {
        m.rate_percent = v;
    }
    if let Some(v) = o.years {
        m.years = v;
    }
    if let Some(v) = o.extra_monthly {
        m.extra_monthly = v;
    }
    if let Some(v) = o.extra_annual {
        m.extra_annual = v;
    }
    if let Some(v) = o.extra_one_time {
        m.extra_one_time = v;
    }
    if let Some(v) = o.one_time_month {
        m.one_time_month = v;
    }
}

fn load_config(cli: &Cli) -> Result<ComparisonConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            ComparisonConfig::from_json_file(path)?
        }
        None => ComparisonConfig::default(),
    };
    apply_overrides(&mut config, LoanLabel::A, LoanOverrides::from(&cli.a));
    apply_overrides(&mut config, LoanLabel::B, LoanOverrides::from(&cli.b));
    Ok(config)
}

fn print_summary(comparison: &Comparison, label: LoanLabel, start: Option<NaiveDate>) {
    let schedule = comparison.schedule(label);
    let mut summary = ScheduleSummary::from_schedule(label, schedule);
    if let Some(start) = start {
        summary = summary.with_start(schedule, start);
    }
    println!("{}", summary);
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(Commands::Defaults) = cli.command {
        println!("{}", ComparisonConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let inputs = load_config(cli)?.validate()?;
    let comparison = Comparison::compute(&inputs);

    match &cli.command {
        None | Some(Commands::Compare) => {
            print_summary(&comparison, LoanLabel::A, cli.start);
            print_summary(&comparison, LoanLabel::B, cli.start);
            println!("{}", comparison.summary);
        }
        Some(Commands::Schedule { loan }) => {
            let label = LoanLabel::from(*loan);
            println!("{}", label);
            println!("{}", render_table(comparison.schedule(label)));
        }
        Some(Commands::Chart { width, height }) => {
            let chart = BalanceChart::new(&comparison.schedule_a, &comparison.schedule_b);
            print!("{}", chart.render_text(*width, *height));
        }
        Some(Commands::Export { loan, output }) => {
            let label = LoanLabel::from(*loan);
            let schedule = comparison.schedule(label);
            match output.as_deref() {
                Some("-") => {
                    write_csv(schedule, io::stdout().lock())?;
                }
                Some(path) => {
                    let rows = export_csv(schedule, path)?;
                    eprintln!("wrote {} rows to {}", rows, path);
                }
                None => {
                    let path = label.csv_file_name();
                    let rows = export_csv(schedule, &path)?;
                    eprintln!("wrote {} rows to {}", rows, path);
                }
            }
        }
        Some(Commands::Defaults) => {}
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        match &err {
            MortgageError::Validation(errors) => {
                for e in errors {
                    eprintln!("error: {}", e);
                }
            }
            other => eprintln!("error: {}", other),
        }
        process::exit(1);
    }
}
