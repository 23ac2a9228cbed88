//! Interactive banking session
//!
//! This module provides the Session struct: an explicit command-dispatch
//! loop over an injected input source and output sink. The indirection
//! keeps the loop deterministic under test - a scripted `Cursor` stands in
//! for stdin and a `Vec<u8>` captures the transcript.
//!
//! The session authenticates once against the engine's registry, then
//! repeatedly shows the five-option menu and dispatches the chosen
//! operation until the user quits or the input stream ends. All operation
//! failures are reported as fixed console messages and the loop resumes;
//! only I/O failure ends the session early.

mod menu;

pub use menu::MenuChoice;

use crate::core::TellerEngine;
use crate::types::{AccountId, TellerError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// One interactive run of the menu loop bound to a single account
///
/// Constructed over any line-oriented input and any output sink. The
/// session borrows the engine only for the duration of [`Session::run`];
/// the engine (and its account state) outlives the session.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given input source and output sink
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run the session to completion
    ///
    /// Prompts for credentials, then drives the menu loop until the user
    /// quits or the input stream is exhausted. A failed login prints the
    /// rejection message and returns without opening the menu.
    ///
    /// # Errors
    ///
    /// Returns an error only for unrecoverable I/O failures on the input
    /// or output stream. End-of-input is not an error: the loop terminates
    /// gracefully.
    pub fn run(mut self, engine: &mut TellerEngine) -> Result<(), TellerError> {
        writeln!(self.output, "Welcome to the ATM System")?;

        let Some(id) = self.prompt("Enter User ID: ")? else {
            return Ok(());
        };
        let Some(pin) = self.prompt("Enter PIN: ")? else {
            return Ok(());
        };

        if !engine.validate(&id, &pin) {
            writeln!(self.output, "Invalid User ID or PIN.")?;
            return Ok(());
        }

        // Transfer counterparty is fixed for the whole session
        let peer: Option<AccountId> = engine.registry().peer_of(&id).cloned();

        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(TellerError::InvalidNumericInput { .. }) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
                Err(_) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                }
            };

            match choice {
                MenuChoice::History => self.show_history(engine, &id)?,
                MenuChoice::Withdraw => {
                    let Some(amount) = self.prompt_amount("Enter amount to withdraw: ")? else {
                        break;
                    };
                    if let Some(amount) = amount {
                        match engine.withdraw(&id, amount) {
                            Ok(balance) => writeln!(
                                self.output,
                                "Withdrawal successful. Current balance: {}",
                                balance
                            )?,
                            Err(_) => {
                                writeln!(self.output, "Invalid amount or insufficient balance.")?
                            }
                        }
                    }
                }
                MenuChoice::Deposit => {
                    let Some(amount) = self.prompt_amount("Enter amount to deposit: ")? else {
                        break;
                    };
                    if let Some(amount) = amount {
                        match engine.deposit(&id, amount) {
                            Ok(balance) => writeln!(
                                self.output,
                                "Deposit successful. Current balance: {}",
                                balance
                            )?,
                            Err(_) => writeln!(self.output, "Invalid amount.")?,
                        }
                    }
                }
                MenuChoice::Transfer => {
                    let Some(amount) = self.prompt_amount("Enter amount to transfer: ")? else {
                        break;
                    };
                    if let Some(amount) = amount {
                        match &peer {
                            Some(peer) => match engine.transfer(&id, peer, amount) {
                                Ok(balance) => writeln!(
                                    self.output,
                                    "Transfer successful. Current balance: {}",
                                    balance
                                )?,
                                Err(_) => writeln!(
                                    self.output,
                                    "Invalid amount or insufficient balance."
                                )?,
                            },
                            None => writeln!(self.output, "No transfer recipient available.")?,
                        }
                    }
                }
                MenuChoice::Quit => {
                    writeln!(self.output, "Thank you for using the ATM. Goodbye!")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Print the five-option menu
    fn show_menu(&mut self) -> Result<(), TellerError> {
        writeln!(self.output)?;
        writeln!(self.output, "ATM Menu:")?;
        writeln!(self.output, "1. Transaction History")?;
        writeln!(self.output, "2. Withdraw")?;
        writeln!(self.output, "3. Deposit")?;
        writeln!(self.output, "4. Transfer")?;
        writeln!(self.output, "5. Quit")?;
        Ok(())
    }

    /// Print the transaction history of the given account
    fn show_history(&mut self, engine: &TellerEngine, id: &str) -> Result<(), TellerError> {
        let entries = engine.history(id)?;
        if entries.is_empty() {
            writeln!(self.output, "No transactions yet.")?;
        } else {
            writeln!(self.output, "Transaction History:")?;
            for entry in entries {
                writeln!(self.output, "{}", entry)?;
            }
        }
        Ok(())
    }

    /// Write a prompt without a trailing newline and read one input line
    ///
    /// Returns `None` when the input stream is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, TellerError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for a monetary amount
    ///
    /// The outer `Option` is `None` on end-of-input; the inner `Option` is
    /// `None` when the line did not parse as a number (already reported to
    /// the user).
    fn prompt_amount(&mut self, text: &str) -> Result<Option<Option<Decimal>>, TellerError> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };

        match line.parse::<Decimal>() {
            Ok(amount) => Ok(Some(Some(amount))),
            Err(_) => {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                Ok(Some(None))
            }
        }
    }

    /// Read one trimmed line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, TellerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AccountRegistry;
    use crate::types::Account;
    use std::io::Cursor;

    fn seeded_engine() -> TellerEngine {
        let mut registry = AccountRegistry::new();
        registry.insert(Account::new("user123", "pin123"));
        registry.insert(Account::new("user456", "pin456"));
        TellerEngine::new(registry)
    }

    fn run_session(engine: &mut TellerEngine, script: &str) -> String {
        let mut output = Vec::new();
        let session = Session::new(Cursor::new(script.as_bytes()), &mut output);
        session.run(engine).expect("session failed");
        String::from_utf8(output).expect("transcript is not UTF-8")
    }

    #[test]
    fn test_failed_login_ends_session() {
        let mut engine = seeded_engine();

        let transcript = run_session(&mut engine, "user123\nwrong\n");

        assert!(transcript.contains("Invalid User ID or PIN."));
        assert!(!transcript.contains("ATM Menu:"));
    }

    #[test]
    fn test_end_of_input_during_login_is_graceful() {
        let mut engine = seeded_engine();

        let transcript = run_session(&mut engine, "user123\n");

        assert!(transcript.ends_with("Enter PIN: "));
    }

    #[test]
    fn test_end_of_input_at_menu_is_graceful() {
        let mut engine = seeded_engine();

        let transcript = run_session(&mut engine, "user123\npin123\n");

        assert!(transcript.contains("ATM Menu:"));
        assert!(transcript.ends_with("Choose an option: "));
    }

    #[test]
    fn test_quit_prints_farewell() {
        let mut engine = seeded_engine();

        let transcript = run_session(&mut engine, "user123\npin123\n5\n");

        assert!(transcript.contains("Thank you for using the ATM. Goodbye!"));
    }

    #[test]
    fn test_session_state_persists_in_engine() {
        let mut engine = seeded_engine();

        run_session(&mut engine, "user123\npin123\n3\n100\n5\n");

        assert_eq!(
            engine.balance("user123").unwrap(),
            rust_decimal_macros::dec!(100)
        );
    }
}
