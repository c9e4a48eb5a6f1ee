//! Blob storage boundary for the event store.
//!
//! The event store persists its whole mapping as a single JSON value. A
//! [`BlobStore`] hands that value back on startup and replaces it wholesale on
//! every flush; there are no partial writes.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors raised by blob store implementations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}

/// Whole-value get/set of one JSON payload.
pub trait BlobStore {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self) -> Result<Option<Value>, StorageError>;

    /// Replaces any prior value.
    fn set(&mut self, value: Value) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self) -> Result<Option<Value>, StorageError> {
        (**self).get()
    }

    fn set(&mut self, value: Value) -> Result<(), StorageError> {
        (**self).set(value)
    }
}

/// Blob store backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BlobStore for JsonFileStore {
    fn get(&self) -> Result<Option<Value>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if data.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&data)
            .map(Some)
            .map_err(|err| StorageError::Corrupt(format!("{}: {}", self.path.display(), err)))
    }

    fn set(&mut self, value: Value) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let data = serde_json::to_string_pretty(&value)?;

        // Write to a sibling file first so a crash never leaves a truncated blob
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

/// In-memory blob store, used in tests and when no data directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    value: Option<Value>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: Value) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self) -> Result<Option<Value>, StorageError> {
        Ok(self.value.clone())
    }

    fn set(&mut self, value: Value) -> Result<(), StorageError> {
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}
