//! JSON file holding the trip collection.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use trek_core::entities::TravelRecord;
use trek_core::errors::CoreError;
use trek_engine::RecordChange;

/// Trips loaded from, and written back to, one JSON array file.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<TravelRecord>,
}

impl RecordStore {
    /// Load the collection. A missing file is an empty collection; a file
    /// that is not a JSON array of trips is an error.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "record file missing; starting empty");
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let records = if text.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&text)
                .with_context(|| format!("{} is not a valid trip file", path.display()))?
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[TravelRecord] {
        &self.records
    }

    /// Apply an accepted change. Returns the index the record ended up at.
    pub fn apply(&mut self, change: RecordChange) -> Result<usize, CoreError> {
        match change {
            RecordChange::Append(record) => {
                self.records.push(record);
                Ok(self.records.len() - 1)
            }
            RecordChange::Replace { index, record } => {
                let len = self.records.len();
                let slot = self
                    .records
                    .get_mut(index)
                    .ok_or(CoreError::NotFound { index, len })?;
                *slot = record;
                Ok(index)
            }
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<TravelRecord, CoreError> {
        if index >= self.records.len() {
            return Err(CoreError::NotFound {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Write the collection through a temporary sibling file.
    pub fn save(&self) -> anyhow::Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;

        let mut file = NamedTempFile::new_in(&parent)
            .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
        serde_json::to_writer_pretty(&mut file, &self.records)?;
        file.write_all(b"\n")?;
        file.persist(&self.path)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), records = self.records.len(), "saved records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use trek_core::enums::TravelType;

    use super::*;

    fn record(day: u32, location: &str) -> TravelRecord {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        TravelRecord::new(date, date, location, TravelType::Personal, "")
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("trips.json")).unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error_and_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trips.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = RecordStore::open(&path).unwrap_err();
        assert!(format!("{err:#}").contains("is not a valid trip file"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn save_then_open_keeps_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("trips.json");

        let mut store = RecordStore::open(&path).unwrap();
        store.apply(RecordChange::Append(record(1, "Oslo"))).unwrap();
        store.apply(RecordChange::Append(record(9, "Bergen"))).unwrap();
        store.save().unwrap();

        let reopened = RecordStore::open(&path).unwrap();
        assert_eq!(reopened.records(), store.records());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {"));
    }

    #[test]
    fn older_files_without_type_or_notes_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trips.json");
        std::fs::write(
            &path,
            r#"[{"start_date": "2024-01-02", "end_date": "2024-01-03", "location": "Turku"}]"#,
        )
        .unwrap();

        let store = RecordStore::open(&path).unwrap();
        assert_eq!(store.records()[0].travel_type, TravelType::Personal);
        assert_eq!(store.records()[0].comment, "");
    }

    #[test]
    fn replace_and_remove_check_bounds() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::open(dir.path().join("trips.json")).unwrap();
        store.apply(RecordChange::Append(record(1, "Oslo"))).unwrap();

        let index = store
            .apply(RecordChange::Replace { index: 0, record: record(2, "Tromso") })
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.records()[0].location, "Tromso");

        let err = store
            .apply(RecordChange::Replace { index: 5, record: record(3, "Narvik") })
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { index: 5, len: 1 }));

        assert!(matches!(store.remove(1), Err(CoreError::NotFound { index: 1, len: 1 })));
        assert_eq!(store.remove(0).unwrap().location, "Tromso");
        assert!(store.records().is_empty());
    }
}
