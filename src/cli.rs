//! CLI argument definitions for pizza-split.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use pizza_split::bill::Rounding;
use pizza_split::output::OutputMode;

#[derive(Parser)]
#[command(name = "pizza-split")]
#[command(version)]
#[command(about = "Split a pizza bill by pieces eaten", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    pizza-split                     Answer the questions, type 'fertig' when everyone is listed\n    pizza-split split --help        Compute a bill without prompts"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Only print the bill lines and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read limits, closing word and rounding from this file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// How amounts are rounded to cents
    #[arg(long, value_enum, global = true)]
    pub rounding: Option<Rounding>,

    /// Word that ends the list of participants
    #[arg(long, value_name = "WORD", global = true)]
    pub sentinel: Option<String>,
}

impl GlobalArgs {
    pub fn output_mode(&self) -> OutputMode {
        match self.format {
            Format::Json => OutputMode::Json,
            Format::Text if self.quiet => OutputMode::Quiet,
            Format::Text => OutputMode::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for price, pieces and participants interactively (default)
    Run,
    /// Compute a bill from arguments without prompting
    Split {
        /// Total price of the pizza
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        /// Number of pieces the pizza had
        #[arg(long, allow_hyphen_values = true)]
        pieces: String,
        /// Participant and pieces eaten, as NAME=COUNT (repeatable)
        #[arg(long = "eater", value_name = "NAME=COUNT", allow_hyphen_values = true)]
        eaters: Vec<String>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information (with -v: commit and build date)
    Version,
}
