//! Loaders for the optional, manually-curated JSON side tables: raw-name
//! aliases, match-key image overrides, and the per-key view counter
//! snapshot. A missing file is normal and yields an empty table; a present
//! but unparseable file is a configuration error.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::ConfigError;

/// Curated `raw_name -> replacement_raw_name` overrides, applied before any
/// other normalization step.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_raw_aliases(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    load_optional_table(path)
}

/// Manual `match_key -> image_url` overrides, applied after the merge fold.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_image_overrides(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    load_optional_table(path)
}

/// Point-in-time `match_key -> views` counter snapshot.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_view_counts(path: &Path) -> Result<HashMap<String, u64>, ConfigError> {
    load_optional_table(path)
}

fn load_optional_table<V: DeserializeOwned>(
    path: &Path,
) -> Result<HashMap<String, V>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => {
            return Err(ConfigError::TableFileIo {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    serde_json::from_str(&content).map_err(|e| ConfigError::TableFileParse {
        path: path.display().to_string(),
        source: e,
    })
}
