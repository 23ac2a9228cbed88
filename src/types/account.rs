//! Account-related types for the ATM Teller
//!
//! This module defines the Account structure holding a user's identity,
//! credentials, balance, and transaction log.

use super::transaction::LedgerEntry;
use rust_decimal::Decimal;

/// Account identifier
///
/// An opaque string, unique per account, immutable after creation.
pub type AccountId = String;

/// A single user's account
///
/// Holds the account identity, the credential secret checked during login,
/// the current balance, and an append-only log of mutating operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account identifier, unique within a registry
    pub id: AccountId,

    /// Credential secret compared for exact equality during authentication
    ///
    /// Never changes after construction and is never rendered in output.
    pub pin: String,

    /// Current balance
    ///
    /// Always non-negative: withdrawals and transfers that would drive it
    /// below zero are rejected before any mutation happens.
    pub balance: Decimal,

    /// Append-only transaction log in insertion order
    ///
    /// Each successful mutating operation appends exactly one entry.
    /// Entries are never removed or reordered.
    pub log: Vec<LedgerEntry>,
}

impl Account {
    /// Create a new account with a zero balance and an empty log
    ///
    /// # Arguments
    ///
    /// * `id` - The account identifier
    /// * `pin` - The credential secret for this account
    pub fn new(id: impl Into<AccountId>, pin: impl Into<String>) -> Self {
        Account {
            id: id.into(),
            pin: pin.into(),
            balance: Decimal::ZERO,
            log: Vec::new(),
        }
    }

    /// Check whether the given credentials match this account exactly
    ///
    /// Case-sensitive string equality on both fields. No side effects and
    /// no lockout on repeated failures.
    pub fn matches_credentials(&self, id: &str, pin: &str) -> bool {
        self.id == id && self.pin == pin
    }
}
