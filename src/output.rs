//! Output routing for the CLI.
//!
//! ## Design Principles
//!
//! - Rendered HTML and listings go to stdout (for piping)
//! - The lexer status line goes to stderr, written verbatim
//! - Errors always go to stderr

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;

use crate::ui::{Stream, Style};

/// Pair of writers standing in for stdout and stderr.
pub struct Output<O, E> {
    stdout: O,
    stderr: E,
}

impl<O: Write, E: Write> Output<O, E> {
    pub const fn new(stdout: O, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    /// Writes `text` followed by a newline to stdout.
    pub fn line<T: Display>(&mut self, text: T) -> Result<()> {
        writeln!(self.stdout, "{text}").context("Failed to write to stdout")
    }

    /// Writes a status message to stderr without adding a newline.
    pub fn status(&mut self, text: &str) -> Result<()> {
        self.stderr
            .write_all(text.as_bytes())
            .context("Failed to write to stderr")
    }

    /// Reports an error on stderr.
    ///
    /// Write failures are ignored: there is nowhere left to report them.
    pub fn error(&mut self, err: &anyhow::Error) {
        let _ = writeln!(
            self.stderr,
            "{} {err:#}",
            Style::error(Stream::Stderr, "Error:")
        );
        let _ = self.stderr.flush();
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Failed to flush stdout")?;
        self.stderr.flush().context("Failed to flush stderr")
    }
}
