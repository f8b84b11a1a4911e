//! Line-oriented terminal I/O for the session
//!
//! [`Console`] wraps any buffered reader and writer so the session can be
//! driven by a real terminal or by in-memory buffers in tests. Screen clearing
//! and colors are applied according to [`Config`]; message text itself is
//! never altered.

use crate::config::Config;
use crate::machine::Grid;
use crate::ui::render::{render_grid, render_grid_styled};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

pub const SELECTION_PROMPT: &str = "Enter item to pick: ";
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Notice,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => DEFAULT_THEME.success,
            Tone::Warning => DEFAULT_THEME.warning,
            Tone::Error => DEFAULT_THEME.error,
            Tone::Notice => DEFAULT_THEME.notice,
        }
    }
}

/// Terminal input and output for one session
pub struct Console<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Console {
            input,
            output,
            config,
        }
    }

    /// Clear the screen (if enabled) and draw the grid
    pub fn show_grid(&mut self, grid: &Grid) -> io::Result<()> {
        if self.config.clear_screen {
            queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))?;
        }

        let lines = if self.config.color {
            render_grid_styled(grid)
        } else {
            render_grid(grid)
        };
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()
    }

    /// Print a one-line message
    pub fn message(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if self.config.color {
            writeln!(self.output, "{}", text.with(tone.color()))?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        self.output.flush()
    }

    /// Prompt for a slot code and read one line.
    ///
    /// Returns `None` when the input stream has ended.
    pub fn read_selection(&mut self) -> io::Result<Option<String>> {
        self.prompt(SELECTION_PROMPT)?;
        self.read_line()
    }

    /// Wait for the user to press Enter.
    ///
    /// Returns `false` when the input stream has ended.
    pub fn pause(&mut self) -> io::Result<bool> {
        self.prompt(CONTINUE_PROMPT)?;
        Ok(self.read_line()?.is_some())
    }

    /// Move past a prompt left open by end of input
    pub fn end_line(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Borrow the underlying writer
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.config.color {
            write!(self.output, "{}", text.with(DEFAULT_THEME.prompt))?;
        } else {
            write!(self.output, "{}", text)?;
        }
        self.output.flush()
    }

    // Bytes that are not UTF-8 become U+FFFD so the line is rejected as
    // input instead of failing the read.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Config::plain(),
        )
    }

    fn text(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn test_read_selection() {
        let mut console = console("b2\n");
        assert_eq!(console.read_selection().unwrap().as_deref(), Some("b2\n"));
        assert_eq!(text(&console), "Enter item to pick: ");
    }

    #[test]
    fn test_read_selection_eof() {
        let mut console = console("");
        assert_eq!(console.read_selection().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("C3");
        assert_eq!(console.read_selection().unwrap().as_deref(), Some("C3"));
        assert_eq!(console.read_selection().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_line_is_lossy() {
        let mut console = Console::new(
            Cursor::new(b"\xe91\nA1\n".to_vec()),
            Vec::new(),
            Config::plain(),
        );
        assert_eq!(
            console.read_selection().unwrap().as_deref(),
            Some("\u{fffd}1\n")
        );
        assert_eq!(console.read_selection().unwrap().as_deref(), Some("A1\n"));
    }

    #[test]
    fn test_pause() {
        let mut console = console("\n");
        assert!(console.pause().unwrap());
        assert!(!console.pause().unwrap());
        assert_eq!(
            text(&console),
            "Press Enter to continue...Press Enter to continue..."
        );
    }

    #[test]
    fn test_plain_message_is_literal() {
        let mut console = console("");
        console.message(Tone::Success, "there you go!").unwrap();
        assert_eq!(text(&console), "there you go!\n");
    }

    #[test]
    fn test_colored_output_keeps_literals() {
        let mut console = Console::new(
            Cursor::new(b"\n".to_vec()),
            Vec::new(),
            Config {
                clear_screen: false,
                color: true,
            },
        );
        console.message(Tone::Success, "there you go!").unwrap();
        console
            .message(Tone::Error, "Invalid row! Please use A, B, or C.")
            .unwrap();
        assert!(console.pause().unwrap());

        let out = text(&console);
        assert!(out.contains("there you go!"));
        assert!(out.contains("Invalid row! Please use A, B, or C."));
        assert!(out.contains(CONTINUE_PROMPT));
        let success = out.find("there you go!").unwrap();
        let error = out.find("Invalid row!").unwrap();
        assert!(success < error);
    }

    #[test]
    fn test_plain_grid_has_no_escapes() {
        let mut console = console("");
        console.show_grid(&Grid::new()).unwrap();
        let out = text(&console);
        assert!(!out.contains('\x1b'));
        assert_eq!(out.lines().count(), 9);
    }

    #[test]
    fn test_clear_screen_sequence() {
        let mut console = Console::new(
            Cursor::new(Vec::new()),
            Vec::new(),
            Config {
                clear_screen: true,
                color: false,
            },
        );
        console.show_grid(&Grid::new()).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.starts_with('\x1b'));
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("+A+ +A+ +A+ \n"));
    }
}
