use crate::commands::Outcome;
use crate::error::Error;
use crate::model::{Record, Roll};
use std::error::Error as _;
use std::io::{self, Write};

pub const NO_RECORDS: &str = "No student records available.";

pub fn display_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Added { name } => writeln!(out, "Student '{name}' added successfully!"),
        Outcome::Found { roll, record } => display_record(out, roll, record),
        Outcome::Topper { roll, record } => {
            writeln!(out, "Topper:")?;
            display_record(out, roll, record)
        }
        Outcome::Listing(rows) => display_table(out, rows),
        Outcome::NoRecords => writeln!(out, "{NO_RECORDS}"),
    }
}

fn display_record(out: &mut impl Write, roll: &Roll, record: &Record) -> io::Result<()> {
    writeln!(out, "ROLL: {roll}")?;
    writeln!(out, "NAME: {}", record.name)?;
    writeln!(out, "MARKS: {}", marks(record.marks))
}

fn display_table(out: &mut impl Write, rows: &[(Roll, Record)]) -> io::Result<()> {
    writeln!(out, "{:<10} {:<20} {:<10}", "ROLL", "NAME", "MARKS")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for (roll, record) in rows {
        writeln!(
            out,
            "{:<10} {:<20} {}",
            roll.as_str(),
            record.name,
            marks(record.marks)
        )?;
    }
    Ok(())
}

/// Describe an error along with its causes.
pub fn display_error(out: &mut impl Write, error: &Error) -> io::Result<()> {
    write!(out, "error: {error}")?;
    let mut source = error.source();
    while let Some(cause) = source {
        write!(out, ": {cause}")?;
        source = cause.source();
    }
    writeln!(out)
}

/// Marks always show a decimal part, as they are stored.
fn marks(marks: f64) -> String {
    format!("{marks:?}")
}
