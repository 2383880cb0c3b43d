use std::{fmt::Debug, sync::Arc};

use appraisal_shared::{
    const_config::client::SESSION_STORAGE_KEY, errors::StorageError, log_err_as_warn,
    session::Session,
};
use tracing::{debug, info, instrument};

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

/// A key value store holding serialized records.
///
/// Each call must be a single atomic operation on the underlying storage so a
/// concurrent reader sees either the old or the new value, never a mix
pub trait StorageBackend: Debug + Send + Sync + 'static {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a key that does not exist is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Where a newly written session is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Survives restarting the application
    Durable,
    /// Dropped when the application session ends
    Ephemeral,
}

/// Owns the persisted authentication session.
///
/// The same record lives under one key in two scopes. Reads prefer the durable
/// scope and fall back to the ephemeral one
#[derive(Debug, Clone)]
pub struct SessionStore {
    durable: Arc<dyn StorageBackend>,
    ephemeral: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new<D, E>(durable: D, ephemeral: E) -> Self
    where
        D: StorageBackend,
        E: StorageBackend,
    {
        Self {
            durable: Arc::new(durable),
            ephemeral: Arc::new(ephemeral),
        }
    }

    /// Both scopes held in memory, nothing survives the process
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default(), MemoryStorage::default())
    }

    /// `localStorage` as the durable scope and `sessionStorage` as the
    /// ephemeral one
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(WebStorage::Local, WebStorage::Session)
    }

    /// Never fails, a missing or unreadable record is the empty session
    #[instrument(skip(self))]
    pub fn read(&self) -> Session {
        let raw = self
            .durable
            .get_item(SESSION_STORAGE_KEY)
            .filter(|x| !x.is_empty())
            .or_else(|| self.ephemeral.get_item(SESSION_STORAGE_KEY))
            .filter(|x| !x.is_empty());
        match raw {
            Some(raw) => Session::from_stored_json(&raw),
            None => Session::empty(),
        }
    }

    /// Removes the record from both scopes. Safe to call repeatedly, a scope
    /// that refuses the removal is logged and the other is still cleared
    #[instrument(skip(self))]
    pub fn clear(&self) {
        debug!("clearing stored session");
        log_err_as_warn!(self.durable.remove_item(SESSION_STORAGE_KEY));
        log_err_as_warn!(self.ephemeral.remove_item(SESSION_STORAGE_KEY));
    }

    /// Replaces the whole record. The other scope is emptied first so a stale
    /// durable record can never shadow a fresh ephemeral one
    #[instrument(skip(self, session), fields(role = ?session.role))]
    pub fn write(&self, session: &Session, scope: StorageScope) -> anyhow::Result<()> {
        let record = session.to_stored_json()?;
        let (target, other) = match scope {
            StorageScope::Durable => (&self.durable, &self.ephemeral),
            StorageScope::Ephemeral => (&self.ephemeral, &self.durable),
        };
        other.remove_item(SESSION_STORAGE_KEY)?;
        target.set_item(SESSION_STORAGE_KEY, &record)?;
        info!(?scope, "session stored");
        Ok(())
    }
}
