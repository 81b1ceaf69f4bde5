use crate::commands::{CmdMessage, CmdResult, Receipt};
use crate::error::Result;
use crate::store::DonorStore;

/// Commit one donation: full load, append, full overwrite.
///
/// The donation only counts as committed once `save` succeeds; on a save
/// failure the error propagates and the store file is untouched.
pub fn run<S: DonorStore>(store: &mut S, name: &str, amount: f64) -> Result<CmdResult> {
    let mut book = store.load()?;
    book.record(name, amount);
    store.save(&book)?;

    let mut result = CmdResult::default().with_receipt(Receipt {
        name: name.to_string(),
        amount,
    });
    result.add_message(CmdMessage::success(format!(
        "Donation recorded for {}.",
        name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_entry_for_new_donor() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Jane Doe", 455.0).unwrap();

        assert_eq!(
            result.receipt,
            Some(Receipt {
                name: "Jane Doe".to_string(),
                amount: 455.0
            })
        );
        let book = store.load().unwrap();
        assert_eq!(book.donations("Jane Doe"), Some(&[455.0][..]));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn appends_for_existing_donor() {
        let mut store = InMemoryStore::new().with_donor("Bill Gates", &[0.0, 1000.0]);
        run(&mut store, "Bill Gates", 50.0).unwrap();

        let book = store.load().unwrap();
        assert_eq!(
            book.donations("Bill Gates"),
            Some(&[0.0, 1000.0, 50.0][..])
        );
    }

    #[test]
    fn failed_save_is_not_a_commit() {
        let mut store = InMemoryStore::new().with_failing_saves();
        assert!(run(&mut store, "Jane Doe", 455.0).is_err());
        assert!(store.load().unwrap().is_empty());
    }
}
