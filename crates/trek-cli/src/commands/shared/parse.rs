use anyhow::bail;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Turn a trip number as shown to the user (1-based) into a collection index.
pub fn record_index(number: usize) -> anyhow::Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("trip numbers start at 1"),
    }
}
