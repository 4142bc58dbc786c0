//! Defines the account model and its read access.

use serde::{Deserialize, Serialize};

use crate::{Error, store::DataStore};

/// The kind of account held at a financial institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// An everyday transaction account.
    Checking,
    /// An interest-bearing savings account.
    Savings,
    /// An investment account. Its transactions are dividends and stock
    /// purchases rather than everyday spending.
    Brokerage,
}

/// An account at a financial institution, linked into the household.
///
/// Accounts are created once at start-up and are never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The ID of the account.
    pub id: String,
    /// The ID of the institution that holds the account.
    pub institution_id: String,
    /// The display name of the account, e.g. "Chase Total Checking".
    pub name: String,
    /// What kind of account this is.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// The last few digits of the account number.
    pub mask: String,
    /// The current balance as a fixed-point decimal string, e.g. "5420.50".
    pub balance: String,
    /// The display name of the institution, e.g. "Chase".
    pub institution: String,
}

/// Get a copy of every account.
///
/// # Errors
/// Returns [Error::LockPoisoned] if the store lock is poisoned.
pub fn list_accounts(store: &DataStore) -> Result<Vec<Account>, Error> {
    store.read(|collections| collections.accounts.clone())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::store::{Collections, DataStore};

    use super::{Account, AccountType, list_accounts};

    fn brokerage() -> Account {
        Account {
            id: "acc-brokerage-1".to_owned(),
            institution_id: "inst-fidelity".to_owned(),
            name: "Fidelity Brokerage".to_owned(),
            account_type: AccountType::Brokerage,
            mask: "9012".to_owned(),
            balance: "45678.90".to_owned(),
            institution: "Fidelity".to_owned(),
        }
    }

    #[test]
    fn serializes_with_camel_case_and_type_field() {
        let got = serde_json::to_value(brokerage()).unwrap();

        assert_eq!(
            got,
            json!({
                "id": "acc-brokerage-1",
                "institutionId": "inst-fidelity",
                "name": "Fidelity Brokerage",
                "type": "brokerage",
                "mask": "9012",
                "balance": "45678.90",
                "institution": "Fidelity",
            })
        );
    }

    #[test]
    fn lists_all_accounts() {
        let store = DataStore::new(Collections {
            accounts: vec![brokerage()],
            ..Default::default()
        });

        assert_eq!(list_accounts(&store), Ok(vec![brokerage()]));
    }
}
