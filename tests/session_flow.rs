//! End-to-end session tests
//!
//! These tests validate the complete interactive pipeline by running a
//! `Session` over scripted input and asserting on the captured transcript.
//! Each test:
//! 1. Seeds a registry with the two fixed accounts
//! 2. Feeds a scripted sequence of input lines to the session
//! 3. Captures everything the session writes
//! 4. Asserts on the transcript and, where relevant, the final account state
//!
//! The scripts cover:
//! - Happy path (deposit, withdraw, transfer, history, quit)
//! - Failed login
//! - Rejected operations (insufficient funds, non-positive amounts)
//! - Invalid menu selections and non-numeric input
//! - End-of-input termination

use atm_teller::{Account, AccountRegistry, Session, TellerEngine};
use rstest::rstest;
use rust_decimal_macros::dec;
use std::io::Cursor;

/// The menu block as printed before every prompt for a choice
const MENU: &str = "\nATM Menu:\n\
                    1. Transaction History\n\
                    2. Withdraw\n\
                    3. Deposit\n\
                    4. Transfer\n\
                    5. Quit\n\
                    Choose an option: ";

/// Seed the two fixed accounts of the simulator
fn seeded_engine() -> TellerEngine {
    let mut registry = AccountRegistry::new();
    registry.insert(Account::new("user123", "pin123"));
    registry.insert(Account::new("user456", "pin456"));
    TellerEngine::new(registry)
}

/// Run one session over a scripted input and return the captured transcript
fn run_session(engine: &mut TellerEngine, script: &str) -> String {
    let mut output = Vec::new();
    let session = Session::new(Cursor::new(script.as_bytes()), &mut output);
    session.run(engine).expect("session failed");
    String::from_utf8(output).expect("transcript is not UTF-8")
}

#[test]
fn test_failed_login_transcript() {
    let mut engine = seeded_engine();

    let transcript = run_session(&mut engine, "user123\nwrongpin\n");

    assert_eq!(
        transcript,
        "Welcome to the ATM System\nEnter User ID: Enter PIN: Invalid User ID or PIN.\n"
    );
}

#[test]
fn test_happy_path_transcript() {
    let mut engine = seeded_engine();

    let script = "user123\npin123\n1\n3\n100\n2\n30\n4\n20\n1\n5\n";
    let transcript = run_session(&mut engine, script);

    let expected = format!(
        "Welcome to the ATM System\nEnter User ID: Enter PIN: \
         {MENU}No transactions yet.\n\
         {MENU}Enter amount to deposit: Deposit successful. Current balance: 100\n\
         {MENU}Enter amount to withdraw: Withdrawal successful. Current balance: 70\n\
         {MENU}Enter amount to transfer: Transfer successful. Current balance: 50\n\
         {MENU}Transaction History:\nDeposited: 100\nWithdrew: 30\nTransferred: 20 to user456\n\
         {MENU}Thank you for using the ATM. Goodbye!\n"
    );
    assert_eq!(transcript, expected);

    // Final account state matches the transcript
    assert_eq!(engine.balance("user123").unwrap(), dec!(50));
    assert_eq!(engine.balance("user456").unwrap(), dec!(20));
}

#[test]
fn test_transfer_is_visible_to_recipient_in_a_later_session() {
    let mut engine = seeded_engine();

    run_session(&mut engine, "user123\npin123\n3\n100\n4\n20\n5\n");
    let transcript = run_session(&mut engine, "user456\npin456\n1\n5\n");

    assert!(transcript.contains("Transaction History:\nDeposited: 20\n"));
}

#[test]
fn test_second_account_can_log_in_and_transfer_back() {
    let mut engine = seeded_engine();

    run_session(&mut engine, "user456\npin456\n3\n40\n4\n15\n5\n");

    assert_eq!(engine.balance("user456").unwrap(), dec!(25));
    assert_eq!(engine.balance("user123").unwrap(), dec!(15));
    assert_eq!(
        engine.history("user456").unwrap(),
        vec!["Deposited: 40", "Transferred: 15 to user123"]
    );
}

#[rstest]
#[case::withdraw_exceeding_balance(
    "user123\npin123\n3\n50\n2\n1000\n5\n",
    "Invalid amount or insufficient balance."
)]
#[case::withdraw_negative("user123\npin123\n2\n-5\n5\n", "Invalid amount or insufficient balance.")]
#[case::deposit_zero("user123\npin123\n3\n0\n5\n", "Invalid amount.")]
#[case::deposit_negative("user123\npin123\n3\n-10\n5\n", "Invalid amount.")]
#[case::transfer_exceeding_balance(
    "user123\npin123\n4\n10\n5\n",
    "Invalid amount or insufficient balance."
)]
#[case::unknown_option("user123\npin123\n9\n5\n", "Invalid option. Please try again.")]
#[case::non_numeric_choice("user123\npin123\nabc\n5\n", "Invalid input. Please enter a number.")]
#[case::non_numeric_amount(
    "user123\npin123\n3\nten\n5\n",
    "Invalid input. Please enter a number."
)]
fn test_rejections_resume_the_menu_loop(#[case] script: &str, #[case] expected_message: &str) {
    let mut engine = seeded_engine();

    let transcript = run_session(&mut engine, script);

    assert!(
        transcript.contains(expected_message),
        "transcript missing {:?}:\n{}",
        expected_message,
        transcript
    );
    // The loop resumed and the session still ended through Quit
    assert!(transcript.contains("Thank you for using the ATM. Goodbye!"));
}

#[test]
fn test_rejected_operations_leave_state_unchanged() {
    let mut engine = seeded_engine();

    run_session(
        &mut engine,
        "user123\npin123\n3\n50\n2\n1000\n3\n-5\n4\n0\n5\n",
    );

    assert_eq!(engine.balance("user123").unwrap(), dec!(50));
    assert_eq!(engine.balance("user456").unwrap(), dec!(0));
    assert_eq!(engine.history("user123").unwrap(), vec!["Deposited: 50"]);
}

#[test]
fn test_history_empty_then_populated() {
    let mut engine = seeded_engine();

    let transcript = run_session(&mut engine, "user123\npin123\n1\n3\n25\n1\n5\n");

    assert!(transcript.contains("No transactions yet.\n"));
    assert!(transcript.contains("Transaction History:\nDeposited: 25\n"));
}

#[test]
fn test_fractional_amounts_stay_exact() {
    let mut engine = seeded_engine();

    let transcript = run_session(&mut engine, "user123\npin123\n3\n0.10\n3\n0.20\n5\n");

    // 0.10 + 0.20 is exactly 0.30 in decimal arithmetic
    assert!(transcript.contains("Deposit successful. Current balance: 0.30"));
    assert_eq!(engine.balance("user123").unwrap(), dec!(0.30));
}

#[test]
fn test_end_of_input_terminates_gracefully() {
    let mut engine = seeded_engine();

    // Script runs out right after the deposit amount prompt appears
    let transcript = run_session(&mut engine, "user123\npin123\n3\n");

    assert!(transcript.ends_with("Enter amount to deposit: "));
    assert_eq!(engine.balance("user123").unwrap(), dec!(0));
}
