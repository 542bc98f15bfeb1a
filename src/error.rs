//! Error types for the bank registry and script runner.
//!
//! Rejected deposits and withdrawals are not errors; they are reported as
//! [`crate::Notice`] values.

use crate::client::ClientId;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors raised outside the transaction rules.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Script row that could not be turned into an operation
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("Unknown client {0}")]
    UnknownClient(ClientId),

    #[error("Unknown account {0}")]
    UnknownAccount(u32),

    #[error("Client {0} already exists")]
    DuplicateClient(ClientId),

    #[error("Account number {0} is already in use")]
    DuplicateAccount(u32),

    /// Missing script argument
    #[error("Missing script file argument. Usage: bank-ledger <script.csv>")]
    MissingArgument,
}
