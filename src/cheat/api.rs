//! Thin facade over the command layer. All UI clients go through
//! [`CheatApi`]; it dispatches to commands and returns structured results,
//! never touching stdout/stderr.

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Entry point for all cheat sheet operations, generic over the storage
/// backend (`CsvStore` in production, `InMemoryStore` in tests).
pub struct CheatApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> CheatApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn find_deletable(&self, query: &str) -> Result<commands::CmdResult> {
        commands::delete::find_matches(&self.store, query)
    }

    pub fn delete_records(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_search_and_delete() {
        let store = InMemoryStore::with_records(vec![
            Record::new("git", "git log", "show history", "vcs"),
            Record::new("du", "du -sh *", "disk usage", "system"),
        ]);
        let mut api = CheatApi::new(store);

        let found = api.search("disk").unwrap();
        assert_eq!(found.listed_records.len(), 1);

        let matches = api.find_deletable("git").unwrap();
        api.delete_records(&matches.matched_positions).unwrap();
        assert!(api.search("git").unwrap().listed_records.is_empty());
    }
}
