//! ATM Teller Library
//! # Overview
//!
//! This library provides a single-session, in-memory banking simulator: a
//! small set of credential-protected accounts driven through a numbered
//! text menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, LedgerEntry, TellerError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Account storage and credential validation
//!   - [`core::engine`] - Balance mutation rules, transaction recording,
//!     and transfer atomicity
//! - [`session`] - The interactive menu loop over an injected input source
//!
//! # Operations
//!
//! The engine supports four account operations:
//!
//! - **Deposit**: Credit funds to an account (amount must be positive)
//! - **Withdraw**: Debit funds from an account (requires sufficient balance)
//! - **Transfer**: Atomically move funds to the counterparty account
//! - **History**: Read the append-only transaction log
//!
//! # Invariants
//!
//! - An account balance is never negative
//! - Every successful mutating operation appends exactly one log entry to
//!   each account it touches; rejected operations change nothing

// Module declarations
pub mod cli;
pub mod core;
pub mod session;
pub mod types;

pub use crate::core::{AccountRegistry, TellerEngine};
pub use session::{MenuChoice, Session};
pub use types::{Account, AccountId, LedgerEntry, TellerError};
