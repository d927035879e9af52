//! Diagnostic logging to stderr.
//!
//! Stdout belongs to the prompts and the bill report, so the subscriber
//! always writes to stderr. The level comes from the `-v` count only.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a log level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let level = level_for(verbosity).as_str().to_ascii_lowercase();
    let filter = EnvFilter::new(format!("pizza_split={}", level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
