use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Find records whose `command` field contains `query` case-insensitively.
/// Narrower than search: only the command field is checked. Positions are
/// captured so the removal step works by position, not by re-matching.
pub fn find_matches<S: RecordStore>(store: &S, query: &str) -> Result<CmdResult> {
    let records = store.load()?;
    let needle = query.to_lowercase();

    let (positions, listed) = records
        .into_iter()
        .enumerate()
        .filter(|(_, r)| r.command.to_lowercase().contains(&needle))
        .unzip();

    Ok(CmdResult::default()
        .with_listed_records(listed)
        .with_matched_positions(positions))
}

/// Remove the records at `positions` and persist the reduced table. The
/// remaining records keep their relative order.
pub fn run<S: RecordStore>(store: &mut S, positions: &[usize]) -> Result<CmdResult> {
    let mut records = store.load()?;

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    // Back to front so earlier positions stay valid while removing.
    for &pos in sorted.iter().rev() {
        if pos < records.len() {
            records.remove(pos);
        }
    }

    store.save(&records)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("✅ Deleted."));
    Ok(result)
}
