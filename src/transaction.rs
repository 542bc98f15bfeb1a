//! Deposits and withdrawals, and how they register against an account.

use crate::account::Account;
use crate::money::Money;
use crate::notice::Notice;
use std::fmt;

/// A transaction to be registered against an account. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit the account.
    Deposit(Money),

    /// Debit the account, subject to its withdrawal policy.
    Withdrawal(Money),
}

impl Transaction {
    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Applies this transaction to `account`.
    ///
    /// The account's history gets a record if and only if the balance
    /// operation succeeded. Rejections are reported through the returned
    /// [`Notice`] and leave both balance and history untouched.
    pub fn register(&self, account: &mut Account) -> Notice {
        let notice = match self {
            Transaction::Deposit(amount) => account.deposit(*amount),
            Transaction::Withdrawal(amount) => account.withdraw(*amount),
        };

        if notice.succeeded() {
            account.history_mut().add(self);
        }

        notice
    }
}

/// Kind tag stored in history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// The label written to statements: `Deposito` or `Saque`.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposito",
            TransactionKind::Withdrawal => "Saque",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
