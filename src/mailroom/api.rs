//! # API Facade
//!
//! Thin facade over the command layer; the single entry point for all
//! mailroom operations regardless of the UI driving them. It dispatches to
//! command functions and returns structured `Result<CmdResult>` values.
//! No business logic, no stdout/stderr, no presentation concerns.
//!
//! `MailroomApi<S: DonorStore>` is generic over the storage backend:
//! production uses `JsonFileStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::store::DonorStore;

pub struct MailroomApi<S: DonorStore> {
    store: S,
}

impl<S: DonorStore> MailroomApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Names of every donor in the store.
    pub fn list_donors(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Total, count, and average per donor.
    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.store)
    }

    /// Append a donation for `name`, persisting before returning a receipt.
    pub fn record_donation(&mut self, name: &str, amount: f64) -> Result<commands::CmdResult> {
        commands::record::run(&mut self.store, name, amount)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, Receipt, ReportRow};
