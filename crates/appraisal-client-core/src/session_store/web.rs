use appraisal_shared::errors::StorageError;
use tracing::warn;

use super::StorageBackend;

/// Browser storage areas. Handles are looked up on every call so the type
/// holds no JS values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebStorage {
    /// `window.localStorage`
    Local,
    /// `window.sessionStorage`
    Session,
}

impl WebStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let storage = match self {
            WebStorage::Local => window.local_storage(),
            WebStorage::Session => window.session_storage(),
        };
        storage
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable(format!("{self:?} storage is disabled")))
    }
}

impl StorageBackend for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let storage = match self.storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(?e, "unable to read from web storage");
                return None;
            }
        };
        storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}
