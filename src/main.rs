use crate::commands::Outcome;
use crate::config::Config;
use crate::display::{display_error, display_outcome};
use crate::interactive::Session;
use crate::store::RecordStore;
use clap::{ArgAction, Parser, Subcommand};
use eyre::{Error, WrapErr};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug};

mod commands;
mod config;
mod display;
mod error;
mod input;
mod interactive;
mod model;
mod store;

#[derive(Parser)]
#[command(version, about = "Keep track of student records and marks")]
struct Args {
    /// Use FILE instead of rstudents.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Store records in DATA instead of the configured file
    #[arg(short, long, value_name = "DATA")]
    file: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    // No command starts an interactive session.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new student
    Add {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        marks: String,
    },
    /// Look up a student by roll number
    Search { roll: String },
    /// List all students
    List,
    /// Show the student with the highest marks
    Topper,
}

fn main() -> Result<ExitCode, Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = Config::load(args.config.as_deref())?;
    let store = RecordStore::new(args.file.unwrap_or(config.store.file));
    debug!(path = %store.path().display(), "using data file");
    let result = match args.command {
        None => {
            Session::new(&store, io::stdin().lock(), io::stdout())
                .run()
                .wrap_err("interactive session failed")?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Command::Add { roll, name, marks }) => commands::add(&store, &roll, &name, &marks),
        Some(Command::Search { roll }) => commands::search(&store, &roll),
        Some(Command::List) => commands::list(&store),
        Some(Command::Topper) => commands::topper(&store),
    };
    report(result)
}

fn report(result: Result<Outcome, error::Error>) -> Result<ExitCode, Error> {
    match result {
        Ok(outcome) => {
            display_outcome(&mut io::stdout().lock(), &outcome)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_user_error() => {
            display_error(&mut io::stderr().lock(), &e)?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from([
            "rstudents", "-vv", "-f", "class.json", "add", "--roll", "7", "--name", "Ann",
            "--marks", "-2.5",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.file, Some(PathBuf::from("class.json")));
        match args.command {
            Some(Command::Add { roll, name, marks }) => {
                assert_eq!((&*roll, &*name, &*marks), ("7", "Ann", "-2.5"));
            }
            _ => panic!("add command expected"),
        }
    }

    #[test]
    fn test_no_command_is_interactive() {
        let args = Args::try_parse_from(["rstudents"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }
}
