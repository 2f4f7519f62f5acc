use super::RecordStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory store for testing. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
