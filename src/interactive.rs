//! Line-oriented interactive session.
//!
//! The session is either in add mode, where every operation is available,
//! or in search mode, where each line is a roll number to look up until
//! `back` or an empty line.

use crate::commands::{self, Outcome};
use crate::display::{display_error, display_outcome};
use crate::error::Error;
use crate::store::RecordStore;
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Add,
    Search,
}

impl Mode {
    fn render(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Add => write!(out, "[add] add, search, list, topper, quit> "),
            Self::Search => write!(out, "[search] roll number (empty or back to leave)> "),
        }
    }
}

pub struct Session<'a, R, W> {
    store: &'a RecordStore,
    input: R,
    output: W,
    mode: Mode,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            mode: Mode::Add,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "STUDENT MANAGEMENT SYSTEM")?;
        loop {
            self.mode.render(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if !self.step(line.trim())? {
                break;
            }
        }
        writeln!(self.output)
    }

    /// Handle one line. Return `false` when the session must end.
    fn step(&mut self, line: &str) -> io::Result<bool> {
        match (self.mode, line) {
            (Mode::Add, "quit" | "exit") => return Ok(false),
            (Mode::Add, "list") => self.report(commands::list(self.store))?,
            (Mode::Add, "topper") => self.report(commands::topper(self.store))?,
            (Mode::Add, "add") => self.add()?,
            (Mode::Add, "search") => self.switch_to(Mode::Search),
            (Mode::Add, "") => {}
            (Mode::Add, other) => writeln!(self.output, "unknown command {other:?}")?,
            (Mode::Search, "" | "back") => self.switch_to(Mode::Add),
            (Mode::Search, roll) => self.report(commands::search(self.store, roll))?,
        }
        Ok(true)
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(name) = self.ask("Name")? else {
            return Ok(());
        };
        let Some(roll) = self.ask("Roll Number")? else {
            return Ok(());
        };
        let Some(marks) = self.ask("Marks")? else {
            return Ok(());
        };
        let result = commands::add(self.store, &roll, &name, &marks);
        self.report(result)
    }

    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.read_line()
    }

    fn switch_to(&mut self, mode: Mode) {
        debug!(from = ?self.mode, to = ?mode, "switching mode");
        self.mode = mode;
    }

    fn report(&mut self, result: Result<Outcome, Error>) -> io::Result<()> {
        match result {
            Ok(outcome) => display_outcome(&mut self.output, &outcome),
            Err(e) => {
                if !e.is_user_error() {
                    error!(error = %e, "operation failed");
                }
                display_error(&mut self.output, &e)
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
