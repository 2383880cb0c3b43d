use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use appraisal_shared::errors::StorageError;
use tracing::warn;

use super::StorageBackend;

/// Durable storage keeping one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(?e, key, "failed to read stored item");
                None
            }
        }
    }

    /// Written to a temporary file first and renamed into place so readers
    /// never see a partial record
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.directory)?;
        let final_path = self.item_path(key);
        let temp_path = final_path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
