//! Session loop
//!
//! A [`Session`] owns the [`Grid`] and a [`Console`] and runs the machine
//! until every slot is empty:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ grid empty? ── yes ─→ render, sold-out notice, Terminated │
//! │     │ no                                                  │
//! │ render → prompt → validate ─ err ─→ message → pause ──┐   │
//! │                      │ ok                             │   │
//! │                 dispense ─→ message → pause ──────────┤   │
//! └───────────────────────────────────────────────────────┴───┘
//! ```
//!
//! Exhaustion is checked at the top of each iteration, so the final dispense
//! is followed by one more iteration that renders the empty grid and stops
//! without prompting. If the input stream ends at either read, the session
//! stops where it is and reports [`SessionEnd::InputClosed`].

use crate::machine::{Dispense, Grid, SlotRef};
use crate::ui::{Console, Tone};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const DISPENSED_MESSAGE: &str = "there you go!";
pub const NOT_AVAILABLE_MESSAGE: &str = "item not available";
pub const SOLD_OUT_MESSAGE: &str = "nothing is here, sorry!";

/// Errors that stop a session early
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every slot was emptied
    Exhausted,
    /// The input stream ended before the machine was empty
    InputClosed,
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated(SessionEnd),
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub end: SessionEnd,
    /// Items handed out
    pub dispensed: usize,
    /// Selections of slots that were already empty
    pub unavailable: usize,
    /// Inputs that failed validation
    pub rejected: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    dispensed: usize,
    unavailable: usize,
    rejected: usize,
}

/// One run of the vending machine
pub struct Session<R, W> {
    grid: Grid,
    console: Console<R, W>,
    state: SessionState,
    tally: Tally,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with a fully stocked grid
    pub fn new(console: Console<R, W>) -> Self {
        Session::with_grid(Grid::new(), console)
    }

    /// Start a session from an existing grid
    pub fn with_grid(grid: Grid, console: Console<R, W>) -> Self {
        Session {
            grid,
            console,
            state: SessionState::Running,
            tally: Tally::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run iterations until the session terminates
    pub fn run(&mut self) -> Result<SessionReport, SessionError> {
        log::info!("session started with {} items", self.grid.remaining());

        let end = loop {
            if let SessionState::Terminated(end) = self.step()? {
                break end;
            }
        };

        let report = self.report(end);
        log::info!(
            "session ended ({:?}): {} dispensed, {} unavailable, {} rejected",
            report.end,
            report.dispensed,
            report.unavailable,
            report.rejected
        );
        Ok(report)
    }

    /// Run exactly one loop iteration and return the resulting state.
    ///
    /// Calling this on a terminated session does nothing.
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        if self.state != SessionState::Running {
            return Ok(self.state);
        }

        if self.grid.is_empty() {
            self.console.show_grid(&self.grid)?;
            self.console.message(Tone::Notice, SOLD_OUT_MESSAGE)?;
            return Ok(self.terminate(SessionEnd::Exhausted));
        }

        self.console.show_grid(&self.grid)?;
        let Some(line) = self.console.read_selection()? else {
            return self.close_input();
        };

        match SlotRef::parse(&line) {
            Ok(slot) => self.select(slot)?,
            Err(e) => {
                log::debug!("rejected input {:?}: {:?}", line.trim_end(), e);
                self.tally.rejected += 1;
                self.console.message(Tone::Error, &e.to_string())?;
            }
        }

        if !self.console.pause()? {
            return self.close_input();
        }
        Ok(self.state)
    }

    /// Build the report for a session that ended with `end`
    pub fn report(&self, end: SessionEnd) -> SessionReport {
        SessionReport {
            end,
            dispensed: self.tally.dispensed,
            unavailable: self.tally.unavailable,
            rejected: self.tally.rejected,
        }
    }

    fn select(&mut self, slot: SlotRef) -> Result<(), SessionError> {
        match self.grid.dispense(slot) {
            Dispense::Dispensed => {
                log::debug!("dispensed {} ({} left)", slot, self.grid.remaining());
                self.tally.dispensed += 1;
                self.console.message(Tone::Success, DISPENSED_MESSAGE)?;
            }
            Dispense::NotAvailable => {
                log::debug!("slot {} already empty", slot);
                self.tally.unavailable += 1;
                self.console.message(Tone::Warning, NOT_AVAILABLE_MESSAGE)?;
            }
        }
        Ok(())
    }

    fn close_input(&mut self) -> Result<SessionState, SessionError> {
        log::warn!(
            "input closed with {} items left in the machine",
            self.grid.remaining()
        );
        self.console.end_line()?;
        Ok(self.terminate(SessionEnd::InputClosed))
    }

    fn terminate(&mut self, end: SessionEnd) -> SessionState {
        self.state = SessionState::Terminated(end);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(input: &str) -> TestSession {
        let console = Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Config::plain(),
        );
        Session::new(console)
    }

    fn output(session: &TestSession) -> String {
        String::from_utf8_lossy(session.console().output()).into_owned()
    }

    #[test]
    fn test_step_dispenses() {
        let mut session = session("a1\n\n");
        assert_eq!(session.step().unwrap(), SessionState::Running);
        assert!(!session.grid().is_available(SlotRef::new(0, 0).unwrap()));
        assert_eq!(session.grid().remaining(), 8);
        assert!(output(&session).contains("there you go!\n"));
    }

    #[test]
    fn test_step_rejects_without_mutation() {
        let mut session = session("A4\n\n");
        assert_eq!(session.step().unwrap(), SessionState::Running);
        assert_eq!(session.grid(), &Grid::new());
        assert!(output(&session).contains("Invalid column! Please use 1, 2, or 3.\n"));
    }

    #[test]
    fn test_step_on_empty_grid_does_not_prompt() {
        let mut grid = Grid::new();
        for slot in Grid::slot_refs() {
            grid.dispense(slot);
        }
        let console = Console::new(Cursor::new(Vec::new()), Vec::new(), Config::plain());
        let mut session = Session::with_grid(grid, console);

        assert_eq!(
            session.step().unwrap(),
            SessionState::Terminated(SessionEnd::Exhausted)
        );
        let out = output(&session);
        assert!(out.ends_with("nothing is here, sorry!\n"));
        assert!(!out.contains("Enter item to pick: "));
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let mut session = session("");
        assert_eq!(
            session.step().unwrap(),
            SessionState::Terminated(SessionEnd::InputClosed)
        );
        let before = output(&session);
        assert_eq!(
            session.step().unwrap(),
            SessionState::Terminated(SessionEnd::InputClosed)
        );
        assert_eq!(output(&session), before);
    }

    #[test]
    fn test_eof_during_pause_keeps_dispense() {
        let mut session = session("B2\n");
        let report = session.run().unwrap();
        assert_eq!(report.end, SessionEnd::InputClosed);
        assert_eq!(report.dispensed, 1);
        assert!(!session.grid().is_available(SlotRef::new(1, 1).unwrap()));
    }

    #[test]
    fn test_report_counts() {
        let mut session = session("A1\n\nA1\n\nxx\n\nD1\n\n");
        let report = session.run().unwrap();
        assert_eq!(
            report,
            SessionReport {
                end: SessionEnd::InputClosed,
                dispensed: 1,
                unavailable: 1,
                rejected: 2,
            }
        );
    }
}
