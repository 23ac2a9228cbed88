//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and credentials
//! - `transaction`: Ledger entries recorded in the transaction log
//! - `error`: Error types for the teller

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId};
pub use error::TellerError;
pub use transaction::LedgerEntry;
