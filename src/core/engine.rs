//! Account operation engine
//!
//! This module provides the TellerEngine that applies banking operations to
//! the accounts held in an AccountRegistry.
//!
//! The engine enforces business rules such as:
//! - Amounts must be strictly positive
//! - The balance can never go negative (withdrawals and transfers that
//!   would violate this are rejected before any mutation)
//! - Every successful mutating operation appends exactly one log entry to
//!   each account it touches

use crate::core::registry::AccountRegistry;
use crate::types::{LedgerEntry, TellerError};
use rust_decimal::Decimal;

/// Banking operation engine
///
/// Owns the account registry and routes every balance mutation through
/// validation first. A rejected operation leaves all accounts untouched.
pub struct TellerEngine {
    registry: AccountRegistry,
}

impl TellerEngine {
    /// Create a new TellerEngine over a seeded registry
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry of accounts to operate on
    pub fn new(registry: AccountRegistry) -> Self {
        TellerEngine { registry }
    }

    /// Access the underlying registry
    ///
    /// Used by the session for credential validation and counterparty
    /// selection.
    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Validate login credentials
    ///
    /// Delegates to the registry. True iff an account with the given id
    /// exists and the PIN matches exactly.
    pub fn validate(&self, id: &str, pin: &str) -> bool {
        self.registry.validate(id, pin)
    }

    /// Deposit funds into an account
    ///
    /// Credits the balance and appends a `Deposited: {amount}` entry to the
    /// account's log. Uses checked arithmetic to prevent overflow.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to credit
    /// * `amount` - The amount to deposit (must be strictly positive)
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance after the deposit
    /// * `Err(TellerError)` - If the operation was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account id is not in the registry
    /// - Crediting the balance would overflow
    pub fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Decimal, TellerError> {
        if amount <= Decimal::ZERO {
            return Err(TellerError::invalid_amount(amount));
        }

        let account = self
            .registry
            .get_mut(id)
            .ok_or_else(|| TellerError::unknown_account(id))?;

        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| TellerError::arithmetic_overflow("deposit", id))?;

        account.balance = new_balance;
        account.log.push(LedgerEntry::Deposit { amount });

        Ok(new_balance)
    }

    /// Withdraw funds from an account
    ///
    /// Debits the balance and appends a `Withdrew: {amount}` entry to the
    /// account's log. Validates that sufficient funds exist before any
    /// mutation.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to debit
    /// * `amount` - The amount to withdraw (must be strictly positive)
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance after the withdrawal
    /// * `Err(TellerError)` - If the operation was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account id is not in the registry
    /// - The amount exceeds the current balance
    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Decimal, TellerError> {
        if amount <= Decimal::ZERO {
            return Err(TellerError::invalid_amount(amount));
        }

        let account = self
            .registry
            .get_mut(id)
            .ok_or_else(|| TellerError::unknown_account(id))?;

        // Check if sufficient funds exist
        if amount > account.balance {
            return Err(TellerError::insufficient_funds(account.balance, amount));
        }

        // amount <= balance was checked above, the subtraction cannot underflow
        let new_balance = account.balance - amount;

        account.balance = new_balance;
        account.log.push(LedgerEntry::Withdrawal { amount });

        Ok(new_balance)
    }

    /// Transfer funds between two accounts
    ///
    /// Debits the sender and credits the recipient. The recipient side is
    /// a deposit: it appends a `Deposited: {amount}` entry to the recipient
    /// log, while the sender log gets `Transferred: {amount} to {to}`.
    ///
    /// The operation is atomic from the caller's perspective: all
    /// validation, including the overflow check on the recipient credit,
    /// happens before either account is mutated. Either both the debit and
    /// the credit happen, or neither does.
    ///
    /// # Arguments
    ///
    /// * `from` - The sender account id
    /// * `to` - The recipient account id
    /// * `amount` - The amount to transfer (must be strictly positive)
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The sender's new balance after the transfer
    /// * `Err(TellerError)` - If the operation was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Sender and recipient are the same account
    /// - The amount is zero or negative
    /// - Either account id is not in the registry
    /// - The amount exceeds the sender's balance
    /// - Crediting the recipient would overflow
    pub fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<Decimal, TellerError> {
        if from == to {
            return Err(TellerError::self_transfer(from));
        }
        if amount <= Decimal::ZERO {
            return Err(TellerError::invalid_amount(amount));
        }

        let sender_balance = self
            .registry
            .get(from)
            .ok_or_else(|| TellerError::unknown_account(from))?
            .balance;

        let recipient_balance = self
            .registry
            .get(to)
            .ok_or_else(|| TellerError::unknown_account(to))?
            .balance;

        if amount > sender_balance {
            return Err(TellerError::insufficient_funds(sender_balance, amount));
        }

        let credited = recipient_balance
            .checked_add(amount)
            .ok_or_else(|| TellerError::arithmetic_overflow("transfer", to))?;

        // amount <= sender_balance was checked above, cannot underflow
        let debited = sender_balance - amount;

        // Both sides validated; nothing below can fail
        let sender = self.registry.get_mut(from).expect("sender exists");
        sender.balance = debited;
        sender.log.push(LedgerEntry::TransferOut {
            amount,
            to: to.to_string(),
        });

        let recipient = self.registry.get_mut(to).expect("recipient exists");
        recipient.balance = credited;
        recipient.log.push(LedgerEntry::Deposit { amount });

        Ok(debited)
    }

    /// Return the rendered transaction log of an account
    ///
    /// Entries come back in insertion order, one string per successful
    /// mutating operation. An empty vector means no transactions yet.
    ///
    /// # Arguments
    ///
    /// * `id` - The account whose history to read
    ///
    /// # Errors
    ///
    /// Returns an error if the account id is not in the registry.
    pub fn history(&self, id: &str) -> Result<Vec<String>, TellerError> {
        let account = self
            .registry
            .get(id)
            .ok_or_else(|| TellerError::unknown_account(id))?;

        Ok(account.log.iter().map(ToString::to_string).collect())
    }

    /// Return the current balance of an account
    ///
    /// Read-only accessor, no side effects.
    ///
    /// # Arguments
    ///
    /// * `id` - The account whose balance to read
    ///
    /// # Errors
    ///
    /// Returns an error if the account id is not in the registry.
    pub fn balance(&self, id: &str) -> Result<Decimal, TellerError> {
        self.registry
            .get(id)
            .map(|account| account.balance)
            .ok_or_else(|| TellerError::unknown_account(id))
    }
}
