//! Bank accounts. Accounts are seeded at start-up and read-only afterwards.

mod core;
mod list_endpoint;

pub use core::{Account, AccountType, list_accounts};
pub use list_endpoint::list_accounts_endpoint;
