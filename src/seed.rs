//! Demo data that the server starts with.
//!
//! The values are made up; what matters is the shape: three accounts at two
//! institutions, forty transactions with half in the current month, budgets
//! for the current month, two savings goals and two partner links.

use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use crate::{
    Error,
    account::{Account, AccountType},
    budget::Budget,
    config::HouseholdContext,
    goal::Goal,
    month::{add_months, current_month, format_timestamp},
    partner::{PartnerLink, PartnerStatus},
    store::{Collections, DataStore},
    transaction::{Transaction, TransactionStatus, format_amount},
};

/// The number of seeded transactions.
pub const TRANSACTION_COUNT: usize = 40;

/// The number of seeded transactions that fall in the current month.
const CURRENT_MONTH_TRANSACTIONS: usize = 20;

const CHECKING_ACCOUNT_ID: &str = "acc-checking-1";
const SAVINGS_ACCOUNT_ID: &str = "acc-savings-1";
const BROKERAGE_ACCOUNT_ID: &str = "acc-brokerage-1";

/// Transactions are assigned to these accounts round-robin.
const ACCOUNT_IDS: [&str; 3] = [CHECKING_ACCOUNT_ID, SAVINGS_ACCOUNT_ID, BROKERAGE_ACCOUNT_ID];

const CATEGORIES: [&str; 8] = [
    "Food",
    "Rent",
    "Groceries",
    "Utilities",
    "Entertainment",
    "Investment",
    "Dividend",
    "Transfer",
];

const MERCHANTS: [&str; 10] = [
    "Whole Foods",
    "Starbucks",
    "Amazon",
    "Electric Company",
    "Netflix",
    "Target",
    "Shell",
    "Apple Store",
    "Dividend Payment",
    "Stock Purchase",
];

impl DataStore {
    /// Create a store filled with demo data relative to `now`.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimestamp] if a seeded date cannot be formatted.
    pub fn seeded(now: OffsetDateTime, household: &HouseholdContext) -> Result<Self, Error> {
        Ok(Self::new(seed(now, household)?))
    }
}

/// Build the demo collections relative to `now`.
///
/// # Errors
/// Returns [Error::InvalidTimestamp] if a seeded date cannot be formatted.
pub fn seed(now: OffsetDateTime, household: &HouseholdContext) -> Result<Collections, Error> {
    let collections = Collections {
        accounts: seed_accounts(),
        transactions: seed_transactions(now)?,
        budgets: seed_budgets(now, household),
        goals: seed_goals(now, household)?,
        partners: seed_partners(now, household)?,
    };

    tracing::debug!(
        "Seeded {} accounts, {} transactions, {} budgets, {} goals and {} partners",
        collections.accounts.len(),
        collections.transactions.len(),
        collections.budgets.len(),
        collections.goals.len(),
        collections.partners.len()
    );

    Ok(collections)
}

fn seed_accounts() -> Vec<Account> {
    let account = |id: &str,
                   institution_id: &str,
                   name: &str,
                   account_type: AccountType,
                   mask: &str,
                   balance: &str,
                   institution: &str| Account {
        id: id.to_owned(),
        institution_id: institution_id.to_owned(),
        name: name.to_owned(),
        account_type,
        mask: mask.to_owned(),
        balance: balance.to_owned(),
        institution: institution.to_owned(),
    };

    vec![
        account(
            CHECKING_ACCOUNT_ID,
            "inst-chase",
            "Chase Total Checking",
            AccountType::Checking,
            "1234",
            "5420.50",
            "Chase",
        ),
        account(
            SAVINGS_ACCOUNT_ID,
            "inst-chase",
            "Chase Savings",
            AccountType::Savings,
            "5678",
            "15230.00",
            "Chase",
        ),
        account(
            BROKERAGE_ACCOUNT_ID,
            "inst-fidelity",
            "Fidelity Brokerage",
            AccountType::Brokerage,
            "9012",
            "45678.90",
            "Fidelity",
        ),
    ]
}

/// How many days before `now` the transaction at `position` happened.
///
/// The first [CURRENT_MONTH_TRANSACTIONS] cycle through the days of the
/// current month up to today, the rest are every four days from 30 days ago.
fn days_ago(position: usize, day_of_month: usize) -> usize {
    if position < CURRENT_MONTH_TRANSACTIONS {
        day_of_month - 1 - (position % day_of_month)
    } else {
        30 + (position - CURRENT_MONTH_TRANSACTIONS) * 4
    }
}

fn is_income(position: usize) -> bool {
    position % 10 == 0 || position % 11 == 0
}

fn seed_transactions(now: OffsetDateTime) -> Result<Vec<Transaction>, Error> {
    let day_of_month = usize::from(now.day());

    (0..TRANSACTION_COUNT)
        .map(|position| {
            let date = now - Duration::days(days_ago(position, day_of_month) as i64);
            let account_id = ACCOUNT_IDS[position % ACCOUNT_IDS.len()];
            let is_income = is_income(position);
            let is_brokerage = account_id == BROKERAGE_ACCOUNT_ID;
            let step = Decimal::from(position as u64);

            let (amount, category, merchant) = match (is_brokerage, is_income) {
                (true, true) => (
                    Decimal::from(500) + step * Decimal::from(10),
                    "Dividend",
                    "Dividend Payment",
                ),
                (false, true) => (
                    Decimal::from(2000) + step * Decimal::from(50),
                    "Income",
                    "Salary",
                ),
                (true, false) => (
                    Decimal::from(100) + step * Decimal::from(5),
                    "Investment",
                    "Stock Purchase",
                ),
                (false, false) => (
                    Decimal::from(10) + step * Decimal::from(5),
                    CATEGORIES[position % CATEGORIES.len()],
                    MERCHANTS[position % MERCHANTS.len()],
                ),
            };

            let status = if position % 5 == 0 {
                TransactionStatus::Pending
            } else {
                TransactionStatus::Posted
            };

            Ok(Transaction {
                id: format!("txn-{}", position + 1),
                account_id: account_id.to_owned(),
                date: format_timestamp(date)?,
                amount: format_amount(amount),
                merchant: Some(merchant.to_owned()),
                category: Some(category.to_owned()),
                is_income,
                status: Some(status),
            })
        })
        .collect()
}

fn seed_budgets(now: OffsetDateTime, household: &HouseholdContext) -> Vec<Budget> {
    let month = current_month(now);

    [("Food", "500.00"), ("Utilities", "200.00"), ("Entertainment", "100.00")]
        .into_iter()
        .enumerate()
        .map(|(i, (category, limit_amount))| Budget {
            id: format!("budget-{}", i + 1),
            household_id: household.household_id.clone(),
            month: month.clone(),
            category: category.to_owned(),
            limit_amount: limit_amount.to_owned(),
        })
        .collect()
}

fn seed_goals(now: OffsetDateTime, household: &HouseholdContext) -> Result<Vec<Goal>, Error> {
    let target_date = add_months(now, 6)?;

    Ok(vec![
        Goal {
            id: "goal-1".to_owned(),
            household_id: household.household_id.clone(),
            name: "Emergency Fund".to_owned(),
            target_amount: "10000.00".to_owned(),
            current_amount: "3500.00".to_owned(),
            target_date: format_timestamp(target_date)?,
        },
        Goal {
            id: "goal-2".to_owned(),
            household_id: household.household_id.clone(),
            name: "Vacation Fund".to_owned(),
            target_amount: "3000.00".to_owned(),
            current_amount: "800.00".to_owned(),
            target_date: format_timestamp(add_months(target_date, 2)?)?,
        },
    ])
}

fn seed_partners(
    now: OffsetDateTime,
    household: &HouseholdContext,
) -> Result<Vec<PartnerLink>, Error> {
    Ok(vec![
        PartnerLink {
            id: "partner-1".to_owned(),
            email: "partner@example.com".to_owned(),
            household_id: household.household_id.clone(),
            status: PartnerStatus::Active,
            invited_by: household.user_id.clone(),
            invited_at: format_timestamp(now - Duration::days(10))?,
            accepted_at: Some(format_timestamp(now - Duration::days(9))?),
        },
        PartnerLink {
            id: "partner-2".to_owned(),
            email: "pending@example.com".to_owned(),
            household_id: household.household_id.clone(),
            status: PartnerStatus::Invited,
            invited_by: household.user_id.clone(),
            invited_at: format_timestamp(now - Duration::days(2))?,
            accepted_at: None,
        },
    ])
}
