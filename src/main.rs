//! Bank Ledger CLI
//!
//! Runs a CSV script of client registrations, account openings, deposits
//! and withdrawals, then prints one summary row per account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > accounts.csv
//! ```
//!
//! # Script Operations
//!
//! Header: `type,client,account,amount,address,national_id,name,birth_date`
//!
//! - `client`: register a client (identity columns optional, all or none)
//! - `open`: open a checking account with default limits
//! - `open_plain`: open a plain account
//! - `deposit` / `withdraw`: run a transaction through the client
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` to see every notice, `warn` for rejections only

use bank_ledger::{Bank, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let script_path = env::args().nth(1).ok_or(LedgerError::MissingArgument)?;

    let file = File::open(&script_path)?;
    let reader = BufReader::new(file);

    let mut bank = Bank::new();
    bank.process_script(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    bank.write_summary(handle)?;

    Ok(())
}
