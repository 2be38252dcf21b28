//! Access to the immutable JSON datasets.
//!
//! Each dataset is one JSON document. A [`DatasetSource`] produces the raw text; the
//! [`DataStore`] decodes it into the typed tables from the `schema` crate, either fresh on
//! every call or once per process when caching is enabled. The datasets never change while
//! the process runs, so the cache has no invalidation.

use crate::errors::{DataError, DataResult};
use schema::Dataset;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Where dataset documents come from.
pub trait DatasetSource: Send + Sync {
    fn read(&self, dataset: Dataset) -> DataResult<String>;
}

/// Reads `<dir>/<dataset file name>` from disk on every call.
#[derive(Debug, Clone)]
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DatasetSource for FsSource {
    fn read(&self, dataset: Dataset) -> DataResult<String> {
        let path = self.dir.join(dataset.file_name());
        fs::read_to_string(&path).map_err(|source| DataError::Io { dataset, source })
    }
}

/// Documents held in memory, keyed by dataset.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Dataset, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, dataset: Dataset, json: impl Into<String>) -> Self {
        self.documents.insert(dataset, json.into());
        self
    }
}

impl DatasetSource for MemorySource {
    fn read(&self, dataset: Dataset) -> DataResult<String> {
        self.documents
            .get(&dataset)
            .cloned()
            .ok_or(DataError::Missing { dataset })
    }
}

type CachedDataset = Arc<dyn Any + Send + Sync>;

/// Typed, optionally cached access to every dataset.
pub struct DataStore {
    source: Box<dyn DatasetSource>,
    cache: Option<RwLock<HashMap<Dataset, CachedDataset>>>,
}

impl DataStore {
    /// A store that re-reads and re-parses the document on every load.
    pub fn uncached(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: None,
        }
    }

    /// A store that parses each document once and shares it for the process lifetime.
    pub fn cached(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Some(RwLock::new(HashMap::new())),
        }
    }

    pub fn from_dir(dir: impl Into<PathBuf>, cache: bool) -> Self {
        let source = FsSource::new(dir);
        if cache {
            Self::cached(source)
        } else {
            Self::uncached(source)
        }
    }

    /// Loads and decodes one dataset.
    pub fn load<T>(&self, dataset: Dataset) -> DataResult<Arc<T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let Some(cache) = &self.cache else {
            return self.parse(dataset).map(Arc::new);
        };

        let hit = cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&dataset)
            .cloned();
        if let Some(entry) = hit {
            if let Ok(typed) = entry.downcast::<T>() {
                debug!(%dataset, "dataset cache hit");
                return Ok(typed);
            }
        }

        let parsed = Arc::new(self.parse::<T>(dataset)?);
        cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(dataset, parsed.clone() as CachedDataset);
        Ok(parsed)
    }

    fn parse<T: DeserializeOwned>(&self, dataset: Dataset) -> DataResult<T> {
        let raw = self.source.read(dataset)?;
        debug!(%dataset, bytes = raw.len(), "loaded dataset");
        serde_json::from_str(&raw).map_err(|source| DataError::Parse { dataset, source })
    }
}
