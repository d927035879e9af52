//! `version` and `completion`: the commands that never touch a bill.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

const BIN_NAME: &str = "pizza-split";

/// Lines printed by `pizza-split version`; `-v` adds the build stamp.
fn version_lines(verbose: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} ({})",
        BIN_NAME,
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION")
    )];
    if verbose {
        lines.push(format!("commit: {}", env!("GIT_SHA")));
        lines.push(format!("built: {}", env!("BUILD_DATE")));
    }
    lines
}

pub fn cmd_version(verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in version_lines(verbose) {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

/// Print a completion script for `shell` on stdout
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cli = Cli::command();
    generate(shell, &mut cli, BIN_NAME, &mut io::stdout());
    Ok(())
}
