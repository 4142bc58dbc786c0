//! Defines the transaction model and the category edit.

use serde::{Deserialize, Serialize};

use crate::{Error, store::DataStore};

/// Whether a transaction has cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// The transaction has cleared.
    Posted,
    /// The transaction has been authorised but not yet cleared.
    Pending,
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created at start-up and never deleted. Only the category
/// can be changed afterwards, see [update_category].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: String,
    /// The ID of the [Account](crate::account::Account) the transaction belongs to.
    pub account_id: String,
    /// When the transaction happened as an RFC 3339 timestamp. The first ten
    /// characters are the `YYYY-MM-DD` date.
    pub date: String,
    /// The magnitude of the transaction as a fixed-point decimal string.
    ///
    /// Always non-negative, [Transaction::is_income] gives the direction.
    pub amount: String,
    /// Who the money was paid to or received from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    /// The spending category.
    ///
    /// `Some("")` means the category was explicitly cleared, which is
    /// different from never having had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// `true` if the amount was credited to the account.
    pub is_income: bool,
    /// Whether the transaction has cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}

/// Replace the category of the transaction with ID `id`.
///
/// An empty `category` clears the category.
///
/// # Errors
/// Returns [Error::TransactionNotFound] if there is no transaction with the
/// ID `id`, or [Error::LockPoisoned] if the store lock is poisoned.
pub fn update_category(store: &DataStore, id: &str, category: &str) -> Result<Transaction, Error> {
    store.write(|collections| {
        let transaction = collections
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::TransactionNotFound)?;

        transaction.category = Some(category.to_owned());

        Ok(transaction.clone())
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Error,
        store::{Collections, DataStore},
    };

    use super::{Transaction, TransactionStatus, update_category};

    fn coffee() -> Transaction {
        Transaction {
            id: "txn-1".to_owned(),
            account_id: "acc-checking-1".to_owned(),
            date: "2025-03-14T09:30:00Z".to_owned(),
            amount: "4.50".to_owned(),
            merchant: Some("Starbucks".to_owned()),
            category: Some("Food".to_owned()),
            is_income: false,
            status: Some(TransactionStatus::Posted),
        }
    }

    fn get_test_store() -> DataStore {
        DataStore::new(Collections {
            transactions: vec![coffee()],
            ..Default::default()
        })
    }

    #[test]
    fn updates_category() {
        let store = get_test_store();

        let got = update_category(&store, "txn-1", "Coffee").unwrap();

        assert_eq!(got.category.as_deref(), Some("Coffee"));
        assert_eq!(
            store.read(|c| c.transactions[0].clone()).unwrap(),
            Transaction {
                category: Some("Coffee".to_owned()),
                ..coffee()
            }
        );
    }

    #[test]
    fn empty_category_clears_but_keeps_field() {
        let store = get_test_store();

        let got = update_category(&store, "txn-1", "").unwrap();

        assert_eq!(got.category, Some(String::new()));
        assert_eq!(got.merchant, coffee().merchant);
    }

    #[test]
    fn missing_transaction_is_not_found() {
        let store = get_test_store();

        assert_eq!(
            update_category(&store, "txn-404", "Food"),
            Err(Error::TransactionNotFound)
        );
        assert_eq!(store.read(|c| c.transactions[0].clone()).unwrap(), coffee());
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let transaction = Transaction {
            merchant: None,
            category: None,
            status: None,
            ..coffee()
        };

        let got = serde_json::to_value(transaction).unwrap();

        assert_eq!(
            got,
            json!({
                "id": "txn-1",
                "accountId": "acc-checking-1",
                "date": "2025-03-14T09:30:00Z",
                "amount": "4.50",
                "isIncome": false,
            })
        );
    }

    #[test]
    fn empty_category_is_serialized() {
        let transaction = Transaction {
            category: Some(String::new()),
            ..coffee()
        };

        let got = serde_json::to_value(transaction).unwrap();

        assert_eq!(got["category"], "");
        assert_eq!(got["status"], "posted");
    }
}
