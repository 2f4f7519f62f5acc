//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts persistence of the record table so the
//! command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production storage — a single CSV file under the
//!   user's data directory, seeded from a bundled default on first run.
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence.
//!
//! ## Access Pattern
//!
//! The table is always handled whole: `load` reads every row into memory and
//! `save` rewrites the entire file. There are no partial or append writes, so
//! a saved table is always fully formed.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record table storage.
pub trait RecordStore {
    /// Load the full record table, in file order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted table with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
