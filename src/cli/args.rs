use clap::Parser;

/// Interactive in-memory ATM banking session
///
/// The program takes no operational flags: accounts are fixed at startup
/// and all interaction happens through the menu on stdin/stdout. Deriving
/// `Parser` still gives the binary `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "atm-teller")]
#[command(about = "Interactive in-memory ATM banking session", long_about = None)]
pub struct CliArgs {}
