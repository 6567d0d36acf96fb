use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default log filter when RUST_LOG is unset and no -v is given
pub const DEFAULT_LOG_FILTER: &str = "banking_ledger=warn";

/// In-memory banking ledger with a menu-driven shell
#[derive(Parser, Debug)]
#[command(name = "banking-ledger")]
#[command(version, about = "In-memory banking ledger with a menu-driven shell", long_about = None)]
pub struct CliArgs {
    /// Read menu input from a file instead of stdin
    #[arg(
        long = "script",
        value_name = "PATH",
        help = "Read menu choices and field values from a file (implies --no-prompt)"
    )]
    pub script: Option<PathBuf>,

    /// Suppress the menu banner and field prompts
    #[arg(long = "no-prompt", help = "Do not print the menu or field prompts")]
    pub no_prompt: bool,

    /// Print a CSV summary of all accounts when the session ends
    #[arg(long = "summary", help = "Write a CSV account summary to stdout on exit")]
    pub summary: bool,

    /// Log verbosity, repeatable
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Whether the shell should write its menu and prompts
    pub fn prompts_enabled(&self) -> bool {
        !self.no_prompt && self.script.is_none()
    }

    /// Log filter directive derived from the verbosity flag
    pub fn log_filter(&self) -> String {
        match self.verbose {
            0 => DEFAULT_LOG_FILTER.to_string(),
            1 => "banking_ledger=info".to_string(),
            _ => "banking_ledger=debug".to_string(),
        }
    }
}
