use super::model::PhraseEntry;
use crate::error::ConfigError;

use std::{fs, path::Path};

/// Reads a JSON array of phrase entries.
pub fn load(path: &Path) -> Result<Vec<PhraseEntry>, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let entries: Vec<PhraseEntry> =
        serde_json::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), count = entries.len(), "loaded phrase file");

    Ok(entries)
}
