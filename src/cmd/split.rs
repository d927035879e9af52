//! Non-interactive bill computation from command-line arguments.

use anyhow::{Context, Result};

use pizza_split::bill::{self, BillInput, Participants};
use pizza_split::config::Config;
use pizza_split::error::BillError;
use pizza_split::output::Output;
use pizza_split::parse::{parse_count, parse_price};
use pizza_split::session::{self, Entered};

/// Validate the totals and entries in the same order a session would, then
/// report the bill.
pub fn cmd_split(
    price: &str,
    pieces: &str,
    eaters: &[String],
    config: &Config,
    output: &Output,
) -> Result<()> {
    let limits = &config.limits;
    let price = bill::check_price(parse_price(price)?, limits)?;
    let input = BillInput::new(price, parse_count(pieces)?, limits)?;

    let mut participants = Participants::new();
    for eater in eaters {
        let (name, count) = parse_eater(eater)?;
        participants.record(name, count);
    }

    session::report(
        &Entered {
            input,
            participants,
        },
        config,
        output,
    )?;
    Ok(())
}

/// Split `NAME=COUNT` at the last `=`.
fn parse_eater(raw: &str) -> Result<(String, i64)> {
    let (name, count) = raw
        .rsplit_once('=')
        .with_context(|| format!("Invalid --eater '{}', expected NAME=COUNT", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(BillError::BlankName.into());
    }
    Ok((name.to_string(), parse_count(count)?))
}
