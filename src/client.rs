//! Clients and the accounts they hold.

use crate::account::Account;
use crate::notice::Notice;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use std::fmt;

/// Caller-assigned client identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub u32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Legal identity of a natural-person client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetails {
    pub national_id: String,
    pub full_name: String,
    pub birth_date: NaiveDate,
}

/// A bank client.
///
/// Accounts are referenced by number; the [`crate::Bank`] owns the
/// accounts themselves.
#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    address: String,
    person: Option<PersonDetails>,
    accounts: Vec<u32>,
}

impl Client {
    pub fn new(id: ClientId, address: impl Into<String>) -> Self {
        Client {
            id,
            address: address.into(),
            person: None,
            accounts: Vec::new(),
        }
    }

    /// Creates a natural-person client.
    pub fn natural_person(
        id: ClientId,
        address: impl Into<String>,
        national_id: impl Into<String>,
        full_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Client {
            person: Some(PersonDetails {
                national_id: national_id.into(),
                full_name: full_name.into(),
                birth_date,
            }),
            ..Client::new(id, address)
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Identity fields, present only for natural persons.
    pub fn person(&self) -> Option<&PersonDetails> {
        self.person.as_ref()
    }

    /// Name to print as account holder: full name, else address.
    pub fn display_name(&self) -> &str {
        self.person
            .as_ref()
            .map(|p| p.full_name.as_str())
            .unwrap_or(&self.address)
    }

    /// Account numbers in the order they were added.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    /// Records `account` as held by this client. No uniqueness check.
    pub fn add_account(&mut self, account: &Account) {
        self.accounts.push(account.number());
    }

    /// Registers `transaction` against `account`.
    ///
    /// Ownership is not checked: any account reachable by the caller can be
    /// operated on.
    pub fn perform_transaction(&self, account: &mut Account, transaction: &Transaction) -> Notice {
        transaction.register(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn person() -> Client {
        Client::natural_person(
            ClientId(1),
            "Rua A, 10 - Centro - Recife/PE",
            "12345678900",
            "Maria Silva",
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        )
    }

    #[test]
    fn test_plain_client() {
        let client = Client::new(ClientId(2), "Av. B, 1");
        assert_eq!(client.id(), ClientId(2));
        assert_eq!(client.address(), "Av. B, 1");
        assert!(client.person().is_none());
        assert_eq!(client.display_name(), "Av. B, 1");
        assert!(client.accounts().is_empty());
    }

    #[test]
    fn test_natural_person_fields() {
        let client = person();
        let details = client.person().unwrap();
        assert_eq!(details.national_id, "12345678900");
        assert_eq!(details.full_name, "Maria Silva");
        assert_eq!(details.birth_date.to_string(), "1990-05-17");
        assert_eq!(client.display_name(), "Maria Silva");
    }

    #[test]
    fn test_add_account_keeps_duplicates() {
        let mut client = person();
        let first = Account::new(1, client.id());
        let second = Account::new(2, client.id());

        client.add_account(&first);
        client.add_account(&second);
        client.add_account(&first);

        assert_eq!(client.accounts(), &[1, 2, 1]);
    }

    #[test]
    fn test_perform_transaction_delegates() {
        let client = person();
        let mut account = Account::new(1, client.id());

        let notice = client.perform_transaction(&mut account, &Transaction::Deposit(Money::from(80)));
        assert!(notice.succeeded());
        assert_eq!(account.balance(), Money::from(80));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_perform_transaction_on_foreign_account() {
        let stranger = Client::new(ClientId(99), "elsewhere");
        let mut account = Account::new(1, ClientId(1));

        let notice =
            stranger.perform_transaction(&mut account, &Transaction::Deposit(Money::from(5)));
        assert_eq!(notice, Notice::DepositSuccessful);
        assert_eq!(account.balance(), Money::from(5));
    }
}
