//! Ledger entry types for the ATM Teller
//!
//! This module defines the typed entries recorded in an account's
//! transaction log and their textual rendering.

use super::account::AccountId;
use rust_decimal::Decimal;
use std::fmt;

/// A single entry in an account's transaction log
///
/// Each variant corresponds to one successful mutating operation. Entries
/// render to the exact one-line form shown in the transaction history:
///
/// - `Deposited: {amount}`
/// - `Withdrew: {amount}`
/// - `Transferred: {amount} to {recipient}`
///
/// A transfer appends a `TransferOut` entry to the sender's log and a
/// `Deposit` entry to the recipient's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    /// Funds credited to the account, either directly or as the receiving
    /// side of a transfer
    Deposit {
        /// The credited amount
        amount: Decimal,
    },

    /// Funds debited from the account
    Withdrawal {
        /// The debited amount
        amount: Decimal,
    },

    /// Funds sent to another account
    TransferOut {
        /// The transferred amount
        amount: Decimal,
        /// The recipient's account identifier
        to: AccountId,
    },
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::Deposit { amount } => write!(f, "Deposited: {}", amount),
            LedgerEntry::Withdrawal { amount } => write!(f, "Withdrew: {}", amount),
            LedgerEntry::TransferOut { amount, to } => {
                write!(f, "Transferred: {} to {}", amount, to)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::deposit(LedgerEntry::Deposit { amount: dec!(100) }, "Deposited: 100")]
    #[case::deposit_fractional(LedgerEntry::Deposit { amount: dec!(12.50) }, "Deposited: 12.50")]
    #[case::withdrawal(LedgerEntry::Withdrawal { amount: dec!(30) }, "Withdrew: 30")]
    #[case::transfer(
        LedgerEntry::TransferOut { amount: dec!(20), to: "user456".to_string() },
        "Transferred: 20 to user456"
    )]
    fn test_entry_rendering(#[case] entry: LedgerEntry, #[case] expected: &str) {
        assert_eq!(entry.to_string(), expected);
    }
}
