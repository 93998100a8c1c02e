use crate::config::CsvSourceConfig;
use crate::errors::ReviewError;
use crate::normalize::{NormalizedDataset, normalize};
use crate::source::{CsvReviewSource, ReviewSource};
use crate::transport::fs::file_mtime;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Thread-safe memoization of normalized datasets keyed by file path and
/// the source config used to read it.
///
/// An entry is reused only while the file's modification time is unchanged;
/// files whose mtime cannot be read are reloaded on every call. Cached
/// datasets are immutable and shared through `Arc`.
#[derive(Clone, Default)]
pub struct DatasetCache {
    inner: Arc<RwLock<HashMap<CacheKey, CachedDataset>>>,
}

/// Path plus the CSV config that produced the entry. `None` marks entries
/// built by a caller-supplied loader through [`DatasetCache::get_or_load`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    path: PathBuf,
    source: Option<CsvSourceConfig>,
}

/// Internal cache entry plus the mtime it was loaded at.
struct CachedDataset {
    modified: DateTime<Utc>,
    dataset: Arc<NormalizedDataset>,
}

impl DatasetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, or run `load` and cache its result.
    ///
    /// Errors from `load` are returned and never cached.
    pub fn get_or_load<F>(&self, path: &Path, load: F) -> Result<Arc<NormalizedDataset>, ReviewError>
    where
        F: FnOnce(&Path) -> Result<NormalizedDataset, ReviewError>,
    {
        let key = CacheKey {
            path: path.to_path_buf(),
            source: None,
        };
        self.lookup(key, load)
    }

    /// Load and normalize a CSV source through the cache.
    ///
    /// Two configs reading the same file (different mapping, delimiter, or
    /// source id) are cached separately.
    pub fn load_csv(&self, config: &CsvSourceConfig) -> Result<Arc<NormalizedDataset>, ReviewError> {
        let key = CacheKey {
            path: config.path.clone(),
            source: Some(config.clone()),
        };
        self.lookup(key, |_| {
            normalize(CsvReviewSource::new(config.clone()).load()?)
        })
    }

    fn lookup<F>(&self, key: CacheKey, load: F) -> Result<Arc<NormalizedDataset>, ReviewError>
    where
        F: FnOnce(&Path) -> Result<NormalizedDataset, ReviewError>,
    {
        let path = key.path.as_path();
        let modified = file_mtime(path);
        if let Some(modified) = modified {
            let inner = self.inner.read().expect("dataset cache poisoned");
            if let Some(entry) = inner.get(&key).filter(|entry| entry.modified == modified) {
                debug!(path = %path.display(), "dataset cache hit");
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        debug!(path = %path.display(), "dataset cache miss");
        let dataset = Arc::new(load(path)?);
        let mut inner = self.inner.write().expect("dataset cache poisoned");
        match modified {
            Some(modified) => {
                inner.insert(
                    key,
                    CachedDataset {
                        modified,
                        dataset: Arc::clone(&dataset),
                    },
                );
            }
            None => {
                inner.remove(&key);
            }
        }
        Ok(dataset)
    }

    /// Drop every entry for `path`, whatever config loaded it.
    pub fn invalidate(&self, path: &Path) {
        let mut inner = self.inner.write().expect("dataset cache poisoned");
        inner.retain(|key, _| key.path != path);
    }

    /// Remove all cached datasets.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("dataset cache poisoned");
        inner.clear();
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        let inner = self.inner.read().expect("dataset cache poisoned");
        inner.is_empty()
    }

    /// Return the number of cached datasets.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("dataset cache poisoned");
        inner.len()
    }
}
