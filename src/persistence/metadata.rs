use crate::domain::Day;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// App metadata stored in meta.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Tab that was open when the app last exited
    #[serde(default)]
    pub last_active_day: Option<Day>,
}

/// Load app metadata from meta.json file
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<AppMetadata> {
    let path = path.as_ref();

    let Some(content) = crate::persistence::read_optional(path)? else {
        // If file doesn't exist, return default metadata
        return Ok(AppMetadata::default());
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse metadata: {}", path.display()))
}

/// Save app metadata to meta.json file
pub fn save_metadata<P: AsRef<Path>>(path: P, metadata: &AppMetadata) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
