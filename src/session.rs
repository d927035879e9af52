//! The interactive question sequence of one bill-splitting session.
//!
//! A session walks through [`Stage`]s in order and stops at the first
//! failure. Everything it collects lives in the session value itself, so two
//! sessions never share state.

use anyhow::Result;
use tracing::{debug, trace};

use crate::bill::{self, Bill, BillInput, Participants, Rounding};
use crate::config::Config;
use crate::error::BillError;
use crate::output::Output;
use crate::parse::{parse_count, parse_price};
use crate::terminal::Terminal;

pub const PROMPT_PRICE: &str = "Wie viel kostet eine Pizza?";
pub const PROMPT_PIECES: &str = "Wie viele Stuecke von Pizza wurden gegessen?";
pub const PROMPT_EATEN: &str = "Wie viele Stuecke hat diese Person gegessen?";

/// Name prompt, mentioning the word that ends the participant list
pub fn name_prompt(sentinel: &str) -> String {
    format!(
        "Was ist der Name der Person? (schreibe '{}', um die Eingabe zu beenden)",
        sentinel
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AcquireTotals,
    CollectParticipants,
    ValidateAggregate,
    ComputeAndReport,
}

/// Everything a user typed in before the bill is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entered {
    pub input: BillInput,
    pub participants: Participants,
}

impl Entered {
    /// Run the aggregate check and compute the bill.
    pub fn settle(&self, rounding: Rounding) -> Result<Bill, BillError> {
        debug!(stage = ?Stage::ValidateAggregate, eaten = %self.participants.total_eaten());
        let bill = bill::allocate(&self.input, &self.participants, rounding)?;
        debug!(stage = ?Stage::ComputeAndReport, %rounding, lines = bill.lines.len());
        Ok(bill)
    }
}

pub struct Session<'a, T: Terminal> {
    terminal: &'a mut T,
    config: &'a Config,
}

impl<'a, T: Terminal> Session<'a, T> {
    pub fn new(terminal: &'a mut T, config: &'a Config) -> Self {
        Self { terminal, config }
    }

    /// Ask for the totals and then the participants.
    ///
    /// Each total is validated right after it is typed, so an invalid price
    /// ends the session before the piece count is asked for.
    pub fn collect(&mut self) -> Result<Entered> {
        let input = self.acquire_totals()?;
        let participants = self.collect_participants()?;
        Ok(Entered {
            input,
            participants,
        })
    }

    pub fn acquire_totals(&mut self) -> Result<BillInput> {
        debug!(stage = ?Stage::AcquireTotals);
        let limits = &self.config.limits;

        let price = parse_price(&self.ask_required(PROMPT_PRICE)?)?;
        let price = bill::check_price(price, limits)?;

        let pieces = parse_count(&self.ask_required(PROMPT_PIECES)?)?;
        Ok(BillInput::new(price, pieces, limits)?)
    }

    /// Read names until the sentinel (or end of input) is reached.
    pub fn collect_participants(&mut self) -> Result<Participants> {
        debug!(stage = ?Stage::CollectParticipants);
        let sentinel = self.config.sentinel.as_str();
        let name_prompt = name_prompt(sentinel);
        let mut participants = Participants::new();

        loop {
            let Some(answer) = self.terminal.ask(&name_prompt)? else {
                debug!("input ended, closing participant list");
                break;
            };
            let name = answer.trim();
            if name == sentinel {
                break;
            }
            if name.is_empty() {
                return Err(BillError::BlankName.into());
            }

            let pieces = parse_count(&self.ask_required(PROMPT_EATEN)?)?;
            if let Some(previous) = participants.record(name, pieces) {
                debug!(name, previous, pieces, "participant re-entered, keeping last value");
            } else {
                trace!(name, pieces, "participant recorded");
            }
        }

        Ok(participants)
    }

    fn ask_required(&mut self, prompt: &str) -> Result<String> {
        match self.terminal.ask(prompt)? {
            Some(answer) => Ok(answer),
            None => Err(BillError::InputEnded.into()),
        }
    }
}

/// Run a full interactive session and report the outcome through `output`.
///
/// A [`BillError`] is returned (inside the `anyhow` chain) without having
/// been printed, so the caller decides how to present it.
pub fn run<T: Terminal>(terminal: &mut T, config: &Config, output: &Output) -> Result<Bill> {
    let entered = Session::new(terminal, config).collect()?;
    report(&entered, config, output)
}

/// Echo what was entered, settle the bill and print it.
pub fn report(entered: &Entered, config: &Config, output: &Output) -> Result<Bill> {
    output.entered(&entered.input, &entered.participants);
    let bill = entered.settle(config.rounding)?;
    output.bill(&bill);
    Ok(bill)
}
