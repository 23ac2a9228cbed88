//! Menu choice parsing
//!
//! Maps the numbered options of the ATM menu to a typed command.

use crate::types::TellerError;

/// One selectable operation from the ATM menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show the transaction history (option 1)
    History,
    /// Withdraw funds (option 2)
    Withdraw,
    /// Deposit funds (option 3)
    Deposit,
    /// Transfer funds to the counterparty account (option 4)
    Transfer,
    /// End the session (option 5)
    Quit,
}

impl MenuChoice {
    /// Parse a menu selection from one input line
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` when the line is not an integer and
    /// `InvalidMenuChoice` when the integer is outside the menu range.
    pub fn parse(input: &str) -> Result<Self, TellerError> {
        let trimmed = input.trim();
        let choice: i64 = trimmed
            .parse()
            .map_err(|_| TellerError::invalid_numeric_input(trimmed))?;

        match choice {
            1 => Ok(MenuChoice::History),
            2 => Ok(MenuChoice::Withdraw),
            3 => Ok(MenuChoice::Deposit),
            4 => Ok(MenuChoice::Transfer),
            5 => Ok(MenuChoice::Quit),
            other => Err(TellerError::invalid_menu_choice(other)),
        }
    }
}
