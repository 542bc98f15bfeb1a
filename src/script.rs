//! CSV script records and their parsing into bank operations.

use crate::client::{Client, ClientId};
use crate::money::Money;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use serde::Deserialize;

/// Accepted birth date layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

/// Raw script row as read from CSV.
///
/// Only the columns relevant to the row's `type` need to be filled in.
#[derive(Debug, Default, Deserialize)]
pub struct ScriptRecord {
    /// Operation: client, open, open_plain, deposit, withdraw
    #[serde(rename = "type")]
    pub op: String,

    pub client: u32,

    #[serde(default)]
    pub account: Option<u32>,

    #[serde(default)]
    pub amount: Option<Money>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub national_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub birth_date: Option<String>,
}

/// A parsed script operation ready to apply to a [`crate::Bank`].
#[derive(Debug, Clone)]
pub enum Operation {
    RegisterClient(Client),

    /// Open an account; checking accounts get the default limits.
    OpenAccount {
        client: ClientId,
        account: u32,
        checking: bool,
    },

    Transact {
        client: ClientId,
        account: u32,
        transaction: Transaction,
    },
}

impl ScriptRecord {
    /// Parses the row into an [`Operation`], describing what is wrong otherwise.
    pub fn parse(&self) -> Result<Operation, String> {
        let client = ClientId(self.client);

        match self.op.trim().to_lowercase().as_str() {
            "client" => self.parse_client(client).map(Operation::RegisterClient),
            "open" => Ok(Operation::OpenAccount {
                client,
                account: self.require_account()?,
                checking: true,
            }),
            "open_plain" => Ok(Operation::OpenAccount {
                client,
                account: self.require_account()?,
                checking: false,
            }),
            "deposit" => Ok(Operation::Transact {
                client,
                account: self.require_account()?,
                transaction: Transaction::Deposit(self.parse_amount()?),
            }),
            "withdraw" | "withdrawal" => Ok(Operation::Transact {
                client,
                account: self.require_account()?,
                transaction: Transaction::Withdrawal(self.parse_amount()?),
            }),
            other => Err(format!("unknown operation '{}'", other)),
        }
    }

    fn parse_client(&self, id: ClientId) -> Result<Client, String> {
        let address = field(&self.address).unwrap_or_default();

        match (field(&self.national_id), field(&self.name), field(&self.birth_date)) {
            (None, None, None) => Ok(Client::new(id, address)),
            (Some(national_id), Some(name), Some(birth_date)) => Ok(Client::natural_person(
                id,
                address,
                national_id,
                name,
                parse_date(&birth_date)?,
            )),
            _ => Err("national_id, name and birth_date must be given together".to_string()),
        }
    }

    fn require_account(&self) -> Result<u32, String> {
        self.account
            .ok_or_else(|| "missing account number".to_string())
    }

    fn parse_amount(&self) -> Result<Money, String> {
        self.amount.ok_or_else(|| "missing amount".to_string())
    }
}

/// Trimmed, non-empty value of an optional column.
fn field(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| format!("bad birth date '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::{ReaderBuilder, Trim};
    use std::str::FromStr;

    fn dec(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn read_rows(csv: &str) -> Vec<Result<ScriptRecord, csv::Error>> {
        ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(csv.as_bytes())
            .deserialize()
            .collect()
    }

    fn record(op: &str) -> ScriptRecord {
        ScriptRecord {
            op: op.to_string(),
            client: 1,
            account: Some(10),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_deposit() {
        let mut r = record("deposit");
        r.amount = Some(dec("150.5"));

        match r.parse().unwrap() {
            Operation::Transact {
                client,
                account,
                transaction,
            } => {
                assert_eq!(client, ClientId(1));
                assert_eq!(account, 10);
                assert_eq!(transaction, Transaction::Deposit(dec("150.50")));
            }
            other => panic!("Expected Transact, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_withdraw_aliases() {
        for op in ["withdraw", "Withdrawal", "  WITHDRAW "] {
            let mut r = record(op);
            r.amount = Some(dec("20"));
            assert!(matches!(
                r.parse().unwrap(),
                Operation::Transact {
                    transaction: Transaction::Withdrawal(_),
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_parse_open() {
        assert!(matches!(
            record("open").parse().unwrap(),
            Operation::OpenAccount {
                client: ClientId(1),
                account: 10,
                checking: true
            }
        ));
        assert!(matches!(
            record(" Open_Plain ").parse().unwrap(),
            Operation::OpenAccount {
                account: 10,
                checking: false,
                ..
            }
        ));
    }

    #[test]
    fn test_amount_column_deserializes_to_money() {
        let rows = read_rows("type,client,account,amount\ndeposit,1,10, 150.5 \nopen,1,11,\nclient,2");

        let amounts: Vec<Option<Money>> = rows.into_iter().map(|r| r.unwrap().amount).collect();
        assert_eq!(amounts, vec![Some(dec("150.50")), None, None]);
    }

    #[test]
    fn test_bad_amount_column_fails_deserialization() {
        let rows = read_rows("type,client,account,amount\ndeposit,1,10,lots\ndeposit,1,10,79228162514264337593543950336");

        for row in rows {
            let err = row.unwrap_err();
            assert!(err.to_string().contains("bad amount"), "{}", err);
        }
    }

    #[test]
    fn test_parse_natural_person() {
        let mut r = record("client");
        r.address = Some("Rua A, 10".to_string());
        r.national_id = Some("123".to_string());
        r.name = Some("Maria Silva".to_string());
        r.birth_date = Some("17-05-1990".to_string());

        match r.parse().unwrap() {
            Operation::RegisterClient(client) => {
                assert_eq!(client.display_name(), "Maria Silva");
                assert_eq!(
                    client.person().unwrap().birth_date,
                    NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
                );
            }
            other => panic!("Expected RegisterClient, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_plain_client_and_iso_date() {
        let mut r = record("client");
        r.address = Some("Av. B".to_string());
        match r.parse().unwrap() {
            Operation::RegisterClient(client) => assert!(client.person().is_none()),
            other => panic!("Expected RegisterClient, got {:?}", other),
        }

        assert_eq!(
            parse_date("1990-05-17").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_partial_identity() {
        let mut r = record("client");
        r.name = Some("Only Name".to_string());
        assert!(r.parse().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        assert!(record("transfer").parse().is_err());
        assert!(record("deposit").parse().is_err());

        let mut no_account = record("open");
        no_account.account = None;
        assert!(no_account.parse().is_err());

        let mut bad_date = record("client");
        bad_date.national_id = Some("1".to_string());
        bad_date.name = Some("X".to_string());
        bad_date.birth_date = Some("1990/05/17".to_string());
        assert!(bad_date.parse().is_err());
    }
}
