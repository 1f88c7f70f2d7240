use std::path::PathBuf;

use serde_json::Value;

use crate::error::{DreyError, Result};
use crate::model::{matches_id, new_record, Record};
use crate::store::FileStore;

/// CRUD over squirrel records stored at one file path.
///
/// The repository is stateless: it holds only the path and opens the
/// storage anew for every operation, so concurrent external edits to the
/// file are visible on the next call. No record is cached across calls.
#[derive(Clone, Debug)]
pub struct SquirrelRepo {
    data_path: PathBuf,
}

impl SquirrelRepo {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    fn store(&self) -> Result<FileStore> {
        FileStore::open(&self.data_path)
    }

    /// All stored squirrels, in stored order.
    pub fn list(&self) -> Result<Vec<Record>> {
        self.store()?.load_all()
    }

    /// The first squirrel whose id matches `id`, compared as strings.
    pub fn get(&self, id: &str) -> Result<Option<Record>> {
        let records: Vec<Record> = self.store()?.load_all()?;
        Ok(records.into_iter().find(|r| matches_id(r, id)))
    }

    /// Append a new squirrel with a generated id.
    pub fn create(&self, name: &str, size: &str) -> Result<()> {
        self.store()?.append(new_record(name, size))
    }

    /// Replace `name` and `size` of the squirrel with `id`, keeping its id,
    /// any other fields, and its position in the sequence.
    ///
    /// Callers are expected to have confirmed existence via [`get`]; a
    /// missing id is reported as [`DreyError::SquirrelNotFound`].
    ///
    /// [`get`]: SquirrelRepo::get
    pub fn update(&self, id: &str, name: &str, size: &str) -> Result<()> {
        let store = self.store()?;
        let mut records: Vec<Record> = store.load_all()?;
        let record = records
            .iter_mut()
            .find(|r| matches_id(r, id))
            .ok_or_else(|| DreyError::SquirrelNotFound(id.to_string()))?;
        record.insert("name".to_string(), Value::String(name.to_string()));
        record.insert("size".to_string(), Value::String(size.to_string()));
        store.save_all(&records)
    }

    /// Remove the first squirrel matching `id`, keeping the order of the
    /// remaining records. Same existence expectation as [`update`].
    ///
    /// [`update`]: SquirrelRepo::update
    pub fn delete(&self, id: &str) -> Result<()> {
        let store = self.store()?;
        let mut records: Vec<Record> = store.load_all()?;
        let position = records
            .iter()
            .position(|r| matches_id(r, id))
            .ok_or_else(|| DreyError::SquirrelNotFound(id.to_string()))?;
        records.remove(position);
        store.save_all(&records)
    }
}
