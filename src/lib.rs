//! # Bank Ledger
//!
//! An in-memory banking ledger: clients, accounts, and a per-account
//! history of deposits and withdrawals.
//!
//! ## Registration
//!
//! A [`Transaction`] registers itself against an [`Account`]: the account
//! validates and applies it, and only a successful application is appended
//! to the account's [`History`]. Rejections never raise errors; they come
//! back as a [`Notice`].
//!
//! ## Example
//!
//! ```
//! use bank_ledger::{Account, CheckingLimits, Client, ClientId, Money, Transaction};
//!
//! let client = Client::new(ClientId(1), "Rua A, 10");
//! let mut account = Account::checking(1, client.id(), CheckingLimits::default());
//!
//! let notice = client.perform_transaction(&mut account, &Transaction::Deposit(Money::from(1000)));
//! assert!(notice.succeeded());
//!
//! let notice = client.perform_transaction(&mut account, &Transaction::Withdrawal(Money::from(600)));
//! assert!(!notice.succeeded());
//! assert_eq!(account.balance(), Money::from(1000));
//! ```

pub mod account;
pub mod bank;
pub mod client;
pub mod clock;
pub mod error;
pub mod history;
pub mod money;
pub mod notice;
pub mod script;
pub mod transaction;

pub use account::{Account, CheckingLimits, WithdrawalPolicy, BRANCH};
pub use bank::Bank;
pub use client::{Client, ClientId, PersonDetails};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LedgerError, Result};
pub use history::{History, HistoryRecord, TIMESTAMP_FORMAT};
pub use money::Money;
pub use notice::Notice;
pub use transaction::{Transaction, TransactionKind};
