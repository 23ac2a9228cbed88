//! ATM Teller CLI
//!
//! Interactive, in-memory banking session on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! The program seeds two fixed accounts (`user123`/`pin123` and
//! `user456`/`pin456`), prompts for credentials, and then drives the
//! five-option menu until the user quits. Nothing is persisted; all
//! account state is discarded on exit.
//!
//! # Exit Codes
//!
//! - 0: Session ended (quit, failed login, or end of input)
//! - 1: Unrecoverable I/O error

use atm_teller::{cli, Account, AccountRegistry, Session, TellerEngine};
use std::io;
use std::process;

fn main() {
    // No operational flags; this still handles --help and --version
    cli::parse_args();

    // The two fixed accounts of the simulator
    let mut registry = AccountRegistry::new();
    registry.insert(Account::new("user123", "pin123"));
    registry.insert(Account::new("user456", "pin456"));
    let mut engine = TellerEngine::new(registry);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(stdin.lock(), stdout.lock());
    if let Err(e) = session.run(&mut engine) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
