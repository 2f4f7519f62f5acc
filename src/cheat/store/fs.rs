use super::RecordStore;
use crate::error::{CheatError, Result};
use crate::model::{Record, FIELDS};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "commands.csv";

/// Bundled default dataset, written byte-for-byte on first run.
const SEED: &[u8] = include_bytes!("../../../data/commands.csv");

/// CSV-backed store. The data directory is passed in explicitly so tests can
/// point it at a temp dir instead of the real user data location.
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the data file. Pure, no I/O.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    /// Create the data directory if needed and seed the data file from the
    /// bundled default when it does not exist yet. Idempotent.
    pub fn ensure_seeded(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(CheatError::Io)?;
        }
        let path = self.data_file();
        if !path.exists() {
            fs::write(&path, SEED).map_err(CheatError::Io)?;
        }
        Ok(())
    }

    fn check_header(&self, path: &Path, headers: &csv::StringRecord) -> Result<()> {
        if headers.len() != FIELDS.len() || headers.iter().zip(FIELDS).any(|(h, f)| h != f) {
            return Err(CheatError::Store(format!(
                "malformed header in {}: expected {}, got {}",
                path.display(),
                FIELDS.join(","),
                headers.iter().collect::<Vec<_>>().join(","),
            )));
        }
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<Vec<Record>> {
        let path = self.data_file();
        let mut reader = csv::Reader::from_path(&path).map_err(CheatError::Csv)?;
        self.check_header(&path, reader.headers().map_err(CheatError::Csv)?)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row.map_err(CheatError::Csv)?);
        }
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        // Serialize to a buffer first, then write-and-rename so a crash
        // mid-write cannot truncate the data file. The header is written
        // explicitly: serde would skip it for an empty table.
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);
            writer.write_record(FIELDS).map_err(CheatError::Csv)?;
            for record in records {
                writer.serialize(record).map_err(CheatError::Csv)?;
            }
            writer.flush().map_err(CheatError::Io)?;
        }

        let path = self.data_file();
        let tmp = self.data_dir.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp, &buf).map_err(CheatError::Io)?;
        fs::rename(&tmp, &path).map_err(CheatError::Io)?;
        Ok(())
    }
}
