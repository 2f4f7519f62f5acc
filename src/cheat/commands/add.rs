use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Append `record` to the table and persist it. Rejected without touching
/// the store when an existing record has the same `command` (exact match).
pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut records = store.load()?;
    let mut result = CmdResult::default();

    if records.iter().any(|r| r.command == record.command) {
        result.add_message(CmdMessage::error("❌ Command already exists."));
        return Ok(result);
    }

    records.push(record);
    store.save(&records)?;
    result.add_message(CmdMessage::success("✅ Command added."));
    Ok(result)
}
