//! Banking Ledger CLI
//!
//! Menu-driven shell over an in-memory banking ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --script session.txt
//! cargo run -- --script session.txt --summary > accounts.csv
//! RUST_LOG=banking_ledger=debug cargo run
//! ```
//!
//! Nothing is persisted: all customers and accounts are discarded when the
//! session ends.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found, unreadable input, output not writable)

use banking_ledger::cli;
use banking_ledger::io::{write_accounts_csv, LineReader};
use banking_ledger::shell::Shell;
use banking_ledger::types::ShellError;
use banking_ledger::BankingService;
use std::io::{self, BufRead};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing(&args);

    // The service lives for the whole process and is dropped at exit
    let mut service = BankingService::new();
    let prompts = args.prompts_enabled();

    let result = match &args.script {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading script");
            LineReader::open(path)
                .and_then(|input| run(&mut service, input, prompts, args.summary))
        }
        None => run(
            &mut service,
            LineReader::new(io::stdin().lock()),
            prompts,
            args.summary,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run<R: BufRead>(
    service: &mut BankingService,
    input: LineReader<R>,
    prompts: bool,
    summary: bool,
) -> Result<(), ShellError> {
    let stdout = io::stdout();
    Shell::new(service, input, stdout.lock(), prompts).run()?;

    if summary {
        write_accounts_csv(service, &mut stdout.lock())?;
    }
    Ok(())
}
