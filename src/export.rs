use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::Result;
use crate::payments::Schedule;
use crate::report::TABLE_HEADERS;

/// Write `schedule` as CSV: a `Month,Payment,Principal,Interest,Extra,Balance`
/// header, then one line per row with money fixed to two decimals.
///
/// Every record, the last one included, ends in `\n`, so the output has a
/// trailing newline. An empty schedule writes nothing and returns `Ok(0)`.
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(schedule: &Schedule, writer: W) -> Result<usize> {
    if schedule.is_empty() {
        return Ok(0);
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(TABLE_HEADERS)?;
    for row in schedule.rows() {
        wtr.write_record([
            row.month.to_string(),
            fixed_2(row.payment),
            fixed_2(row.principal),
            fixed_2(row.interest),
            fixed_2(row.extra),
            fixed_2(row.balance),
        ])?;
    }
    wtr.flush()?;

    Ok(schedule.rows().len())
}

/// write the CSV to a file; nothing is created for an empty schedule
pub fn export_csv(schedule: &Schedule, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    if schedule.is_empty() {
        info!("nothing to export to {}", path.display());
        return Ok(0);
    }

    let file = File::create(path)?;
    let rows = write_csv(schedule, io::BufWriter::new(file))?;
    info!("exported {} rows to {}", rows, path.display());
    Ok(rows)
}

/// render the CSV into a string
pub fn to_csv_string(schedule: &Schedule) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(schedule, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn fixed_2(amount: crate::decimal::Money) -> String {
    format!("{:.2}", amount.to_cents().as_decimal())
}
