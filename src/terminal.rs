//! Line-oriented input sources for the interactive session.
//!
//! The session only needs "show a prompt, read one answer". [`LineTerminal`]
//! does that over any reader/writer pair (piped stdin, tests), and
//! [`DialoguerTerminal`] gives an editable prompt on a real TTY.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::error::BillError;

pub trait Terminal {
    /// Show `prompt` and read one answer without its line ending.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts written to `writer`, answers read line by line from `reader`
pub struct LineTerminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{} ", prompt).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut line = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8(line).map_err(|err| BillError::NotText {
            text: String::from_utf8_lossy(err.as_bytes()).trim().to_string(),
        })?;
        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(Some(answer.to_string()))
    }
}

/// Interactive prompt backed by dialoguer, for use when stdin is a TTY
#[derive(Debug, Default)]
pub struct DialoguerTerminal;

impl Terminal for DialoguerTerminal {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(answer))
    }
}
