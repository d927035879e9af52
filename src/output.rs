//! Structured output for pizza-split.
//!
//! Provides a unified interface for reporting a session in different modes:
//! - Human: the German text report, colored when writing to a terminal
//! - Json: a single JSON document for programmatic consumption
//! - Quiet: only the bill lines and errors
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::bill::{Bill, BillInput, Participants};
use crate::error::BillError;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text report
    Human,
    /// JSON document on stdout
    Json,
    /// Bill lines and errors only
    Quiet,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Echo the collected data back before it is checked
    pub fn entered(&self, input: &BillInput, participants: &Participants) {
        if self.mode != OutputMode::Human {
            return;
        }

        self.write_line(&self.heading("Sie haben folgende Daten eingetragen:"));
        self.write_line(&format!("Pizzapreis: {}", input.total_price()));
        self.write_line(&format!("Anzahl Stuecke: {}", input.total_pieces()));
        self.write_line(&format!("Teilnehmer: {}", describe_participants(participants)));
    }

    /// Report a computed bill
    pub fn bill(&self, bill: &Bill) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => {
                if self.mode == OutputMode::Human {
                    self.write_line(&self.heading("Die Rechnungen sind wie folgt:"));
                }
                for line in &bill.lines {
                    let name = if self.is_tty {
                        line.name.cyan().to_string()
                    } else {
                        line.name.clone()
                    };
                    self.write_line(&format!(
                        "{} hat {} Stueck Pizza gegessen. Zu zahlen sind {:.2}.",
                        name, line.pieces_eaten, line.amount_due
                    ));
                }
            }
            OutputMode::Json => {
                self.json(&json!({ "status": "ok", "bill": bill }));
            }
        }
    }

    /// Report a failed session. Errors are shown in every mode.
    pub fn failure(&self, error: &BillError) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => {
                let message = error.to_string();
                if self.is_tty {
                    self.write_line(&message.red().to_string());
                } else {
                    self.write_line(&message);
                }
            }
            OutputMode::Json => {
                self.json(&json!({
                    "status": "error",
                    "error": {
                        "kind": error.kind(),
                        "message": error.to_string(),
                    },
                }));
            }
        }
    }

    /// Output a structured JSON document
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.is_tty {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

fn describe_participants(participants: &Participants) -> String {
    if participants.is_empty() {
        return "keine".to_string();
    }
    participants
        .iter()
        .map(|e| format!("{}: {}", e.name, e.pieces_eaten))
        .collect::<Vec<_>>()
        .join(", ")
}
