//! Error types for the ATM Teller
//!
//! This module defines all error types that can occur during a banking
//! session. Errors are designed to be descriptive for diagnostics; the
//! session layer maps them to the fixed console messages the user sees.
//!
//! # Error Categories
//!
//! - **Operation Errors**: Invalid amounts, insufficient funds, overflow
//! - **Account Errors**: Unknown account ids, self-transfers
//! - **Input Errors**: Unrecognized menu choices, non-numeric input
//! - **I/O Errors**: Unrecoverable input/output stream failures

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM teller
///
/// Every rejected operation leaves all account state unchanged and reports
/// one of these variants to the caller. None of them is fatal except `Io`,
/// which terminates the session loop gracefully.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TellerError {
    /// Non-positive amount for a deposit, withdrawal, or transfer
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// menu loop resumes.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal or transfer amount exceeds the available balance
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// account state remains unchanged.
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Current balance of the debited account
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Credentials did not match any account
    ///
    /// Reported once at login; the session terminates without opening
    /// the menu.
    #[error("Invalid user ID or PIN")]
    AuthenticationFailed,

    /// An operation referenced an account id not present in the registry
    ///
    /// Cannot occur through the interactive session, which only operates
    /// on validated ids.
    #[error("Unknown account: {id}")]
    UnknownAccount {
        /// The id that was not found
        id: String,
    },

    /// Transfer where sender and recipient are the same account
    #[error("Cannot transfer from account {id} to itself")]
    SelfTransfer {
        /// The offending account id
        id: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to
    /// maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        id: String,
    },

    /// Menu selection outside the range of offered options
    ///
    /// This is a recoverable error - the menu is shown again.
    #[error("Invalid menu option: {choice}")]
    InvalidMenuChoice {
        /// The unrecognized selection
        choice: i64,
    },

    /// Non-numeric input where a number was expected
    ///
    /// This is a recoverable error - the menu loop resumes.
    #[error("Invalid numeric input: '{input}'")]
    InvalidNumericInput {
        /// The input that failed to parse
        input: String,
    },

    /// Unrecoverable I/O failure on the input or output stream
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to TellerError
impl From<std::io::Error> for TellerError {
    fn from(error: std::io::Error) -> Self {
        TellerError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl TellerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        TellerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(available: Decimal, requested: Decimal) -> Self {
        TellerError::InsufficientFunds {
            available,
            requested,
        }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(id: &str) -> Self {
        TellerError::UnknownAccount { id: id.to_string() }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(id: &str) -> Self {
        TellerError::SelfTransfer { id: id.to_string() }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        TellerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an InvalidMenuChoice error
    pub fn invalid_menu_choice(choice: i64) -> Self {
        TellerError::InvalidMenuChoice { choice }
    }

    /// Create an InvalidNumericInput error
    pub fn invalid_numeric_input(input: &str) -> Self {
        TellerError::InvalidNumericInput {
            input: input.to_string(),
        }
    }
}
