use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ReviewError;

/// Best-effort file modified time.
pub fn file_mtime(path: &Path) -> Option<DateTime<Utc>> {
    let metadata = fs::metadata(path).ok()?;
    let modified = metadata.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

/// True if the path has a `.csv` extension (case-insensitive).
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Resolve a dataset file by explicit override, then environment variables,
/// then the first existing default candidate.
///
/// An explicit override that does not exist is an error rather than a reason
/// to keep searching.
pub fn resolve_dataset_path(
    override_path: Option<PathBuf>,
    env_keys: &[&str],
    default_candidates: &[&str],
) -> Result<PathBuf, ReviewError> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        return Err(ReviewError::DataUnavailable {
            source_id: path.display().to_string(),
            reason: "file not found".to_string(),
        });
    }

    if let Some(path) = env_path(env_keys) {
        return Ok(path);
    }

    if let Some(path) = first_existing_file(default_candidates) {
        return Ok(path);
    }

    Err(ReviewError::DataUnavailable {
        source_id: default_candidates.first().copied().unwrap_or_default().to_string(),
        reason: format!(
            "no dataset found (checked env {:?} and {:?})",
            env_keys, default_candidates
        ),
    })
}

fn env_path(keys: &[&str]) -> Option<PathBuf> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

fn first_existing_file(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
