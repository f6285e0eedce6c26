use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read, StdinLock};

/// Source text reader with knowledge of whether anything was piped in.
pub struct InputReader<R> {
    reader: R,
    interactive: bool,
}

impl InputReader<StdinLock<'static>> {
    /// Wraps the process's standard input.
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self {
            reader: stdin.lock(),
            interactive,
        }
    }
}

impl<R: Read> InputReader<R> {
    pub const fn new(reader: R, interactive: bool) -> Self {
        Self {
            reader,
            interactive,
        }
    }

    /// Returns `true` when input is attached to a terminal rather than piped.
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Reads everything up to end-of-stream.
    pub fn read_to_end(mut self) -> Result<String> {
        let mut buffer = Vec::new();
        self.reader
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
