//! Outcome notices for account operations.
//!
//! Business-rule failures are not errors. Every deposit or withdrawal
//! attempt yields a [`Notice`] describing what happened, and callers decide
//! whether to show it, log it, or only look at [`Notice::succeeded`].

use std::fmt;

/// The result of a single deposit or withdrawal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Deposit applied to the balance.
    DepositSuccessful,

    /// Withdrawal applied to the balance.
    WithdrawalSuccessful,

    /// Withdrawal asked for more than the current balance.
    InsufficientFunds,

    /// Amount was zero or negative.
    InvalidAmount,

    /// Checking account: a single withdrawal above the overdraft limit.
    LimitExceeded,

    /// Checking account: the per-period withdrawal count is used up.
    MaxWithdrawalsExceeded,

    /// The resulting balance would not fit in a `Money`.
    BalanceOverflow,
}

impl Notice {
    /// Returns `true` when the operation changed the balance.
    pub fn succeeded(&self) -> bool {
        matches!(self, Notice::DepositSuccessful | Notice::WithdrawalSuccessful)
    }

    /// Human-readable message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::DepositSuccessful => "deposit successful",
            Notice::WithdrawalSuccessful => "withdrawal successful",
            Notice::InsufficientFunds => "insufficient funds",
            Notice::InvalidAmount => "invalid amount",
            Notice::LimitExceeded => "withdrawal amount exceeded the limit",
            Notice::MaxWithdrawalsExceeded => "max withdrawals exceeded",
            Notice::BalanceOverflow => "balance would exceed the maximum amount",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
