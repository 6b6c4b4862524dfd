use std::path::PathBuf;

use chrono::NaiveDate;
use trek_config::TrekConfig;

use crate::store::RecordStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: TrekConfig,
    pub store: RecordStore,
    /// Reference date for validation, status, and reports.
    pub today: NaiveDate,
}

impl AppContext {
    pub fn init(config: TrekConfig, data_file: PathBuf, today: NaiveDate) -> anyhow::Result<Self> {
        let store = RecordStore::open(data_file)?;
        tracing::debug!(
            path = %store.path().display(),
            records = store.records().len(),
            %today,
            "loaded trip collection"
        );
        Ok(Self {
            config,
            store,
            today,
        })
    }
}
