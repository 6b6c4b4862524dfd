//! Record store location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name used inside the platform data directory.
const DEFAULT_FILE_NAME: &str = "travel_data.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON record file. Empty means the platform data directory.
    #[serde(default)]
    pub data_file: String,
}

impl StorageConfig {
    /// Whether an explicit data file was configured.
    pub fn is_configured(&self) -> bool {
        !self.data_file.is_empty()
    }

    /// Resolve the record file path.
    ///
    /// Returns `None` only when no path is configured and the platform has no
    /// data directory.
    pub fn resolve_data_file(&self) -> Option<PathBuf> {
        if self.is_configured() {
            return Some(PathBuf::from(&self.data_file));
        }
        dirs::data_dir().map(|dir| dir.join("trek").join(DEFAULT_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StorageConfig {
            data_file: "/tmp/trips.json".into(),
        };
        assert!(config.is_configured());
        assert_eq!(
            config.resolve_data_file(),
            Some(PathBuf::from("/tmp/trips.json"))
        );
    }

    #[test]
    fn default_path_ends_with_file_name() {
        let config = StorageConfig::default();
        assert!(!config.is_configured());
        if let Some(path) = config.resolve_data_file() {
            assert!(path.ends_with("trek/travel_data.json"));
        }
    }
}
