//! Filtering and income/expense totals for the transactions list.
//!
//! Filtering is total: a filter that matches nothing yields an empty list and
//! zero totals, never an error.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{Error, store::DataStore, transaction::Transaction};

/// The number of leading characters of a timestamp that hold its `YYYY-MM-DD` date.
const DATE_LENGTH: usize = 10;

/// Optional predicates that narrow the transactions list.
///
/// Every field is independent and `None` lets everything through. All
/// predicates are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Earliest date to include as `YYYY-MM-DD` (inclusive).
    pub from: Option<String>,
    /// Latest date to include as `YYYY-MM-DD` (inclusive).
    pub to: Option<String>,
    /// Only include transactions from this account.
    pub account_id: Option<String>,
    /// Only include transactions with exactly this category.
    pub category: Option<String>,
    /// Case-insensitive text to look for in the merchant or category.
    pub q: Option<String>,
}

impl TransactionFilter {
    /// Treat empty strings as absent, so `?category=` does not filter.
    pub fn normalised(self) -> Self {
        let non_empty = |value: Option<String>| value.filter(|value| !value.is_empty());

        Self {
            from: non_empty(self.from),
            to: non_empty(self.to),
            account_id: non_empty(self.account_id),
            category: non_empty(self.category),
            q: non_empty(self.q),
        }
    }

    fn matches_date(&self, transaction: &Transaction) -> bool {
        // The date format is fixed width and zero padded, so string order is date order.
        let date = transaction
            .date
            .get(..DATE_LENGTH)
            .unwrap_or(&transaction.date);

        let after_start = self.from.as_deref().is_none_or(|from| date >= from);
        let before_end = self.to.as_deref().is_none_or(|to| date <= to);

        after_start && before_end
    }

    fn matches_account(&self, transaction: &Transaction) -> bool {
        self.account_id
            .as_deref()
            .is_none_or(|account_id| transaction.account_id == account_id)
    }

    fn matches_category(&self, transaction: &Transaction) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| transaction.category.as_deref() == Some(category))
    }
}

/// Income and expense totals as two decimal place strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
    /// The sum of the amounts of income transactions.
    pub income: String,
    /// The sum of the amounts of expense transactions.
    pub expenses: String,
}

/// The transactions that matched a [TransactionFilter] and their totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPage {
    /// Matching transactions in store order.
    pub transactions: Vec<Transaction>,
    /// Totals over `transactions`.
    pub summary: TransactionSummary,
}

/// Get the transactions in `transactions` that pass every predicate in `filter`.
///
/// Predicates are applied in the order date range, account, category, text
/// search. The relative order of `transactions` is preserved.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let search = filter.q.as_deref().map(str::to_lowercase);

    transactions
        .iter()
        .filter(|transaction| filter.matches_date(transaction))
        .filter(|transaction| filter.matches_account(transaction))
        .filter(|transaction| filter.matches_category(transaction))
        .filter(|transaction| {
            search
                .as_deref()
                .is_none_or(|search| matches_search(transaction, search))
        })
        .cloned()
        .collect()
}

/// Check whether the merchant or category contains `search`, which must already be lowercase.
fn matches_search(transaction: &Transaction, search: &str) -> bool {
    [&transaction.merchant, &transaction.category]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(search))
}

/// Sum the amounts of `transactions` into income and expenses.
///
/// An amount that is not a valid decimal counts as zero so that one bad
/// record cannot break the whole list.
pub fn summarise(transactions: &[Transaction]) -> TransactionSummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;

    for transaction in transactions {
        let amount = parse_amount(transaction);

        if transaction.is_income {
            income += amount;
        } else {
            expenses += amount;
        }
    }

    TransactionSummary {
        income: format_amount(income),
        expenses: format_amount(expenses),
    }
}

fn parse_amount(transaction: &Transaction) -> Decimal {
    match Decimal::from_str(&transaction.amount) {
        Ok(amount) => amount,
        Err(error) => {
            tracing::warn!(
                "Could not parse amount {:?} of transaction {}, counting it as zero: {error}",
                transaction.amount,
                transaction.id
            );
            Decimal::ZERO
        }
    }
}

/// Format `amount` with exactly two decimal places, e.g. `1234.5` → `"1234.50"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.2}")
}

/// Filter `transactions` and total the result.
pub fn query(transactions: &[Transaction], filter: &TransactionFilter) -> TransactionPage {
    let transactions = filter_transactions(transactions, filter);
    let summary = summarise(&transactions);

    TransactionPage {
        transactions,
        summary,
    }
}

/// Filter the transactions in `store` and total the result.
///
/// Only the matching transactions are copied while the read lock is held.
///
/// # Errors
/// Returns [Error::LockPoisoned] if the store lock is poisoned.
pub fn query_transactions(
    store: &DataStore,
    filter: &TransactionFilter,
) -> Result<TransactionPage, Error> {
    let transactions =
        store.read(|collections| filter_transactions(&collections.transactions, filter))?;
    let summary = summarise(&transactions);

    Ok(TransactionPage {
        transactions,
        summary,
    })
}
