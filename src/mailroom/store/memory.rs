use super::DonorStore;
use crate::error::Result;
use crate::model::DonorBook;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: DonorBook,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a donor and their donation history.
    pub fn with_donor(mut self, name: &str, amounts: &[f64]) -> Self {
        self.book.add_donor(name);
        for &a in amounts {
            self.book.record(name, a);
        }
        self
    }

    /// Make every subsequent `save` fail, for commit-failure tests.
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }
}

impl DonorStore for InMemoryStore {
    fn load(&self) -> Result<DonorBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &DonorBook) -> Result<()> {
        if self.fail_saves {
            return Err(crate::error::MailroomError::Store(
                "save disabled by test".to_string(),
            ));
        }
        self.book = book.clone();
        Ok(())
    }
}
