use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use trek_config::TrekConfig;
use trek_engine::parse_date;

pub fn load_config() -> anyhow::Result<TrekConfig> {
    TrekConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// `--today` if given, otherwise the local calendar date.
pub fn resolve_today(override_date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match override_date {
        Some(text) => parse_date(text).with_context(|| format!("invalid --today '{text}'")),
        None => Ok(Local::now().date_naive()),
    }
}

/// `--data` if given, otherwise the configured or platform default file.
pub fn resolve_data_file(config: &TrekConfig, override_path: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(PathBuf::from(path));
    }
    config
        .storage
        .resolve_data_file()
        .context("no data directory on this platform; pass --data or set storage.data_file")
}
