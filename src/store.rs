use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DreyError, Result};

/// Whole-file persistence for an ordered sequence of records.
///
/// The file holds a single JSON array. Every read and every write is a
/// full-file round trip; there are no partial updates and no index. The
/// store is generic over the record type so it knows nothing about
/// squirrels.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`, initializing a missing file with an empty
    /// sequence. An existing file is left untouched, so repeated opens
    /// never reset data.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        if !store.path.exists() {
            store.save_all::<serde_json::Value>(&[])?;
        }
        Ok(store)
    }

    /// Read and deserialize the entire stored sequence.
    pub fn load_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        tracing::debug!("Reading {}...", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(DreyError::Io)?;
        let records = serde_json::from_str(&content).map_err(DreyError::Serialization)?;
        Ok(records)
    }

    /// Serialize `records` and replace the file's entire content.
    pub fn save_all<T: Serialize>(&self, records: &[T]) -> Result<()> {
        tracing::debug!("Writing {}...", self.path.display());
        let content = serde_json::to_string_pretty(records).map_err(DreyError::Serialization)?;
        fs::write(&self.path, content).map_err(DreyError::Io)?;
        Ok(())
    }

    /// Load the sequence, push `record` onto the end, save it back.
    ///
    /// Not atomic with respect to concurrent callers: two overlapping
    /// load-mutate-save sequences are last-save-wins.
    pub fn append<T: Serialize + DeserializeOwned>(&self, record: T) -> Result<()> {
        let mut records: Vec<T> = self.load_all()?;
        records.push(record);
        self.save_all(&records)
    }
}
