//! Interactive session command.

use anyhow::Result;
use std::io;
use tracing::debug;

use pizza_split::config::Config;
use pizza_split::output::{Output, OutputMode};
use pizza_split::session;
use pizza_split::terminal::{DialoguerTerminal, LineTerminal};

/// Run the question sequence on stdin.
///
/// A real terminal gets dialoguer prompts. Piped input is read line by line;
/// in JSON mode its prompts go to stderr so stdout stays parseable.
pub fn cmd_run(config: &Config, output: &Output) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        debug!("stdin is a terminal, using interactive prompts");
        let mut terminal = DialoguerTerminal;
        session::run(&mut terminal, config, output)?;
        return Ok(());
    }

    let stdin = io::stdin().lock();
    if output.mode() == OutputMode::Json {
        let mut terminal = LineTerminal::new(stdin, io::stderr());
        session::run(&mut terminal, config, output)?;
    } else {
        let mut terminal = LineTerminal::new(stdin, io::stdout());
        session::run(&mut terminal, config, output)?;
    }
    Ok(())
}
