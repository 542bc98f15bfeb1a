//! Accounts and their withdrawal policies.
//!
//! A checking account is an ordinary [`Account`] whose
//! [`WithdrawalPolicy`] adds two gates in front of the plain balance rule.

use crate::client::ClientId;
use crate::clock::Clock;
use crate::history::History;
use crate::money::Money;
use crate::notice::Notice;
use crate::transaction::TransactionKind;
use log::{info, warn};
use std::fmt;
use std::rc::Rc;

/// Branch shared by every account.
pub const BRANCH: &str = "0001";

/// Per-account limits for checking accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingLimits {
    /// Largest amount a single withdrawal may request, regardless of balance.
    pub overdraft_limit: Money,

    /// Successful withdrawals allowed before further ones are refused.
    pub max_withdrawals: usize,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        CheckingLimits {
            overdraft_limit: Money::from(500),
            max_withdrawals: 3,
        }
    }
}

/// How an account validates withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    /// Balance and amount checks only.
    Plain,

    /// Plain rules, preceded by the overdraft-limit and count checks.
    Checking(CheckingLimits),
}

/// A bank account.
///
/// # Invariants
///
/// - `balance` only changes through [`Account::deposit`] and
///   [`Account::withdraw`], and only when they report success
/// - The history is created with the account and never replaced
#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    client: ClientId,
    balance: Money,
    history: History,
    policy: WithdrawalPolicy,
}

impl Account {
    /// Opens a plain account with a zero balance.
    pub fn new(number: u32, client: ClientId) -> Self {
        Self::build(number, client, WithdrawalPolicy::Plain, History::new())
    }

    /// Opens a checking account with the given limits.
    pub fn checking(number: u32, client: ClientId, limits: CheckingLimits) -> Self {
        Self::build(
            number,
            client,
            WithdrawalPolicy::Checking(limits),
            History::new(),
        )
    }

    /// Opens an account whose history is stamped by `clock`.
    pub fn with_clock(
        number: u32,
        client: ClientId,
        policy: WithdrawalPolicy,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self::build(number, client, policy, History::with_clock(clock))
    }

    fn build(number: u32, client: ClientId, policy: WithdrawalPolicy, history: History) -> Self {
        Account {
            number,
            client,
            balance: Money::ZERO,
            history,
            policy,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH
    }

    /// Id of the owning client.
    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn policy(&self) -> WithdrawalPolicy {
        self.policy
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.policy, WithdrawalPolicy::Checking(_))
    }

    /// Deposits `amount` if it is strictly positive and the new balance fits.
    pub fn deposit(&mut self, amount: Money) -> Notice {
        let notice = if !amount.is_positive() {
            Notice::InvalidAmount
        } else if let Some(balance) = self.balance.checked_add(amount) {
            self.balance = balance;
            Notice::DepositSuccessful
        } else {
            Notice::BalanceOverflow
        };

        self.report(notice, amount);
        notice
    }

    /// Withdraws `amount` under this account's policy.
    ///
    /// Checking accounts refuse amounts above the overdraft limit first, then
    /// refuse once the recorded withdrawal count reaches the maximum, and
    /// only then fall through to the plain balance rule.
    pub fn withdraw(&mut self, amount: Money) -> Notice {
        let notice = match self.policy {
            WithdrawalPolicy::Plain => self.withdraw_plain(amount),
            WithdrawalPolicy::Checking(limits) => {
                let withdrawals = self.history.count(TransactionKind::Withdrawal);

                if amount > limits.overdraft_limit {
                    Notice::LimitExceeded
                } else if withdrawals >= limits.max_withdrawals {
                    Notice::MaxWithdrawalsExceeded
                } else {
                    self.withdraw_plain(amount)
                }
            }
        };

        self.report(notice, amount);
        notice
    }

    fn withdraw_plain(&mut self, amount: Money) -> Notice {
        if amount > self.balance {
            Notice::InsufficientFunds
        } else if !amount.is_positive() {
            Notice::InvalidAmount
        } else if let Some(balance) = self.balance.checked_sub(amount) {
            self.balance = balance;
            Notice::WithdrawalSuccessful
        } else {
            Notice::BalanceOverflow
        }
    }

    fn report(&self, notice: Notice, amount: Money) {
        if notice.succeeded() {
            info!(
                "Account {}/{}: {} ({}), balance {}",
                BRANCH, self.number, notice, amount, self.balance
            );
        } else {
            warn!(
                "Account {}/{}: {} ({}), balance {}",
                BRANCH, self.number, notice, amount, self.balance
            );
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_checking() {
            "Conta Corrente"
        } else {
            "Conta"
        };
        write!(f, "Agencia:\t{}\n{}:\t{}", BRANCH, label, self.number)
    }
}
