use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// Case-insensitive substring search across all four fields. Results keep
/// their original table order; an empty term matches every record.
pub fn run<S: RecordStore>(store: &S, term: &str) -> Result<CmdResult> {
    let records = store.load()?;
    let needle = term.to_lowercase();

    let listed = records.into_iter().filter(|r| r.matches(&needle)).collect();
    Ok(CmdResult::default().with_listed_records(listed))
}
