//! The bank registry.
//!
//! Owns every client and account, and the clock their histories share.
//! Clients and accounts refer to each other by id, so the registry is the
//! single place either is looked up.

use crate::account::{Account, CheckingLimits, WithdrawalPolicy};
use crate::client::{Client, ClientId};
use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, Result};
use crate::money::Money;
use crate::notice::Notice;
use crate::script::{Operation, ScriptRecord};
use crate::transaction::Transaction;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::rc::Rc;

/// In-memory registry of clients and accounts.
///
/// Accounts are kept ordered by number so summaries come out deterministic.
#[derive(Debug)]
pub struct Bank {
    clients: BTreeMap<ClientId, Client>,
    accounts: BTreeMap<u32, Account>,
    clock: Rc<dyn Clock>,
}

impl Bank {
    /// Creates an empty bank stamping history with the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Bank {
            clients: BTreeMap::new(),
            accounts: BTreeMap::new(),
            clock,
        }
    }

    /// Registers a client under its own id.
    pub fn add_client(&mut self, client: Client) -> Result<ClientId> {
        let id = client.id();
        if self.clients.contains_key(&id) {
            return Err(LedgerError::DuplicateClient(id));
        }

        debug!("Registered client {}", id);
        self.clients.insert(id, client);
        Ok(id)
    }

    /// Opens a plain account for `client`.
    pub fn open_account(&mut self, client: ClientId, number: u32) -> Result<&Account> {
        self.open(client, number, WithdrawalPolicy::Plain)
    }

    /// Opens a checking account for `client`.
    pub fn open_checking_account(
        &mut self,
        client: ClientId,
        number: u32,
        limits: CheckingLimits,
    ) -> Result<&Account> {
        self.open(client, number, WithdrawalPolicy::Checking(limits))
    }

    fn open(&mut self, client_id: ClientId, number: u32, policy: WithdrawalPolicy) -> Result<&Account> {
        if self.accounts.contains_key(&number) {
            return Err(LedgerError::DuplicateAccount(number));
        }
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(LedgerError::UnknownClient(client_id))?;

        let account = Account::with_clock(number, client_id, policy, Rc::clone(&self.clock));
        client.add_account(&account);
        debug!("Opened account {} for client {}", number, client_id);

        Ok(&*self.accounts.entry(number).or_insert(account))
    }

    /// Has `client` register `transaction` against account `number`.
    ///
    /// Unknown ids are errors; business-rule rejections come back as a
    /// non-successful [`Notice`].
    pub fn perform(
        &mut self,
        client: ClientId,
        number: u32,
        transaction: &Transaction,
    ) -> Result<Notice> {
        let client = self
            .clients
            .get(&client)
            .ok_or(LedgerError::UnknownClient(client))?;
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(LedgerError::UnknownAccount(number))?;

        Ok(client.perform_transaction(account, transaction))
    }

    pub fn deposit(&mut self, client: ClientId, number: u32, amount: Money) -> Result<Notice> {
        self.perform(client, number, &Transaction::Deposit(amount))
    }

    pub fn withdraw(&mut self, client: ClientId, number: u32, amount: Money) -> Result<Notice> {
        self.perform(client, number, &Transaction::Withdrawal(amount))
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// All accounts, ordered by number.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Branch, account line and holder for account `number`.
    pub fn describe_account(&self, number: u32) -> Result<String> {
        let account = self
            .account(number)
            .ok_or(LedgerError::UnknownAccount(number))?;
        let holder = self
            .client(account.client())
            .map(|c| c.display_name().to_string())
            .unwrap_or_default();

        Ok(format!("{}\nTitular:\t{}", account, holder))
    }

    /// Writes the statement for account `number` as CSV.
    ///
    /// One row per history record, oldest first, followed by a `Saldo` row
    /// carrying the current balance.
    pub fn write_statement<W: Write>(&self, number: u32, writer: W) -> Result<()> {
        let account = self
            .account(number)
            .ok_or(LedgerError::UnknownAccount(number))?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["kind", "amount", "timestamp"])?;
        for record in account.history().records() {
            csv_writer.write_record([
                record.kind.label().to_string(),
                record.amount.to_string(),
                record.formatted_timestamp(),
            ])?;
        }
        csv_writer.write_record(["Saldo".to_string(), account.balance().to_string(), String::new()])?;

        csv_writer.flush()?;
        Ok(())
    }

    /// Runs a CSV script of client, open, open_plain, deposit and withdraw rows.
    ///
    /// `open` opens a checking account with default limits; `open_plain`
    /// opens a plain account.
    ///
    /// Rows are applied in order. Malformed rows and operations on unknown
    /// or duplicate ids are logged at warn level and skipped.
    pub fn process_script<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let outcome = result
                .map_err(|e| e.to_string())
                .and_then(|record| record.parse())
                .map_err(|message| LedgerError::InvalidRecord {
                    row: row_num,
                    message,
                })
                .and_then(|op| self.apply(op));

            match outcome {
                Ok(Some(notice)) => debug!("Row {}: {}", row_num, notice),
                Ok(None) => {}
                Err(e) => warn!("Row {}: {}", row_num, e),
            }
        }

        Ok(())
    }

    fn apply(&mut self, op: Operation) -> Result<Option<Notice>> {
        match op {
            Operation::RegisterClient(client) => {
                self.add_client(client)?;
                Ok(None)
            }
            Operation::OpenAccount {
                client,
                account,
                checking: true,
            } => {
                self.open_checking_account(client, account, CheckingLimits::default())?;
                Ok(None)
            }
            Operation::OpenAccount {
                client,
                account,
                checking: false,
            } => {
                self.open_account(client, account)?;
                Ok(None)
            }
            Operation::Transact {
                client,
                account,
                transaction,
            } => self.perform(client, account, &transaction).map(Some),
        }
    }

    /// Writes one summary row per account, ordered by account number.
    pub fn write_summary<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["branch", "account", "client", "balance", "records"])?;
        for account in self.accounts() {
            csv_writer.write_record([
                account.branch().to_string(),
                account.number().to_string(),
                account.client().to_string(),
                account.balance().to_string(),
                account.history().len().to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
