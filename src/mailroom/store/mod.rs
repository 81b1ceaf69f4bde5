//! # Storage Layer
//!
//! Persistence for the donor book behind the [`DonorStore`] trait:
//!
//! - [`json::JsonFileStore`]: production storage, one JSON object in a
//!   single file, whole-file read and whole-file overwrite. Last writer
//!   wins; there is no locking and no partial-read recovery.
//! - [`memory::InMemoryStore`]: in-memory storage for testing.
//!
//! Actions use a full load → mutate → full save sequence; a donation is
//! only committed once `save` has returned `Ok`.

use crate::error::Result;
use crate::model::DonorBook;

pub mod json;
pub mod memory;

/// Abstract interface for donor-book persistence.
pub trait DonorStore {
    /// Read the whole donor book.
    fn load(&self) -> Result<DonorBook>;

    /// Overwrite the whole donor book.
    fn save(&mut self, book: &DonorBook) -> Result<()>;
}
