//! Transactions and the queries over them.
//!
//! This module contains everything related to transactions:
//! - The [Transaction] model and the category edit
//! - Filtering by date range, account, category and free text, along with
//!   income and expense totals
//! - The route handlers for listing and editing transactions

mod core;
mod list_endpoint;
mod query;
mod update_category_endpoint;

pub use core::{Transaction, TransactionStatus, update_category};
pub use list_endpoint::list_transactions_endpoint;
pub use query::{
    TransactionFilter, TransactionPage, TransactionSummary, filter_transactions, format_amount,
    query, query_transactions, summarise,
};
pub use update_category_endpoint::update_category_endpoint;
