//! Account registry
//!
//! This module provides the `AccountRegistry` struct which maintains the
//! set of accounts known to the teller and provides credential validation
//! and account lookup.
//!
//! The AccountRegistry is responsible for:
//! - Holding the accounts seeded at startup
//! - Validating login credentials against its accounts
//! - Selecting the transfer counterparty for a given account
//! - Providing account lookup for balance operations

use crate::types::{Account, AccountId};
use std::collections::HashMap;

/// Registry of all accounts known to the teller
///
/// The registry maintains an in-memory map of account ids to account state.
/// It is constructed once at startup with a fixed set of accounts and passed
/// into the engine; accounts are never created or removed afterwards.
pub struct AccountRegistry {
    /// Map of account ids to account state
    accounts: HashMap<AccountId, Account>,
}

impl AccountRegistry {
    /// Create a new AccountRegistry with no accounts
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
        }
    }

    /// Seed an account into the registry
    ///
    /// If an account with the same id already exists, the new account is
    /// ignored (first occurrence wins).
    ///
    /// # Arguments
    ///
    /// * `account` - The account to insert
    pub fn insert(&mut self, account: Account) {
        self.accounts.entry(account.id.clone()).or_insert(account);
    }

    /// Validate login credentials against the registry
    ///
    /// Returns true iff an account with the given id exists and its PIN
    /// matches exactly (case-sensitive). No side effects; repeated failures
    /// are not tracked or limited.
    ///
    /// # Arguments
    ///
    /// * `id` - The claimed account id
    /// * `pin` - The claimed credential secret
    pub fn validate(&self, id: &str, pin: &str) -> bool {
        self.accounts
            .get(id)
            .is_some_and(|account| account.matches_credentials(id, pin))
    }

    /// Select the transfer counterparty for an account
    ///
    /// Returns the first account id other than `id`, in ascending id order.
    /// The ordering makes the selection deterministic regardless of map
    /// iteration order. Returns `None` when the registry holds no other
    /// account.
    ///
    /// # Arguments
    ///
    /// * `id` - The account id to find a counterparty for
    pub fn peer_of(&self, id: &str) -> Option<&AccountId> {
        let mut others: Vec<&AccountId> = self.accounts.keys().filter(|k| *k != id).collect();
        others.sort();
        others.first().copied()
    }

    /// Get an immutable reference to an account
    ///
    /// # Arguments
    ///
    /// * `id` - The account id to look up
    ///
    /// # Returns
    ///
    /// * `Some(&Account)` - If the account exists
    /// * `None` - If the id is not found
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Get a mutable reference to an account
    ///
    /// Used by the engine for balance mutations and log appends.
    ///
    /// # Arguments
    ///
    /// * `id` - The account id to look up
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Number of accounts in the registry
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
