use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DonorStore;

pub fn run<S: DonorStore>(store: &S) -> Result<CmdResult> {
    let book = store.load()?;
    let donors: Vec<String> = book.names().map(str::to_string).collect();
    Ok(CmdResult::default().with_donors(donors))
}
