//! The shared in-memory state of the server.
//!
//! [DataStore] is the only shared mutable resource in the application. All
//! access goes through [DataStore::read] and [DataStore::write], which scope
//! the lock to a closure so that no reference to the collections can outlive
//! the critical section.

mod id;

use std::sync::{Arc, RwLock};

pub use id::IdAllocator;

use crate::{
    Error, account::Account, budget::Budget, goal::Goal, partner::PartnerLink,
    transaction::Transaction,
};

/// The five record collections held by the [DataStore].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    /// Bank, savings and brokerage accounts. Never modified after seeding.
    pub accounts: Vec<Account>,
    /// Transactions in seeding order. Only the category is ever modified.
    pub transactions: Vec<Transaction>,
    /// Monthly spending limits per category.
    pub budgets: Vec<Budget>,
    /// Savings goals.
    pub goals: Vec<Goal>,
    /// Household partner invitations.
    pub partners: Vec<PartnerLink>,
}

/// A cheaply cloneable handle to the shared collections and ID allocator.
///
/// Readers share the lock with each other, writers hold it exclusively. Each
/// call to [DataStore::write] is one atomic mutation: a closure either
/// changes the collections and returns `Ok`, or returns an error without
/// having touched them.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    collections: Arc<RwLock<Collections>>,
    ids: Arc<IdAllocator>,
}

impl DataStore {
    /// Create a store holding `collections`.
    pub fn new(collections: Collections) -> Self {
        Self {
            collections: Arc::new(RwLock::new(collections)),
            ids: Arc::new(IdAllocator::new()),
        }
    }

    /// Get a new, never before issued record ID.
    pub fn next_id(&self) -> String {
        self.ids.next()
    }

    /// Run `f` with shared access to the collections.
    ///
    /// `f` should copy out whatever it needs; the lock is released as soon as
    /// it returns.
    ///
    /// # Errors
    /// Returns [Error::LockPoisoned] if a writer panicked while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> Result<R, Error> {
        let collections = self.collections.read().map_err(|error| {
            tracing::error!("could not acquire read lock: {error}");
            Error::LockPoisoned
        })?;

        Ok(f(&collections))
    }

    /// Run `f` with exclusive access to the collections.
    ///
    /// # Errors
    /// Returns [Error::LockPoisoned] if a writer panicked while holding the
    /// lock, otherwise whatever `f` returns.
    pub fn write<R>(
        &self,
        f: impl FnOnce(&mut Collections) -> Result<R, Error>,
    ) -> Result<R, Error> {
        let mut collections = self.collections.write().map_err(|error| {
            tracing::error!("could not acquire write lock: {error}");
            Error::LockPoisoned
        })?;

        f(&mut collections)
    }
}
