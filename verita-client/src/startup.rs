use crate::config::{Settings, StorageKind, StorageSettings};
use crate::error::ApiError;
use crate::services::{ApiClient, Session};
use std::sync::Arc;
use verita_core::error::StorageError;
use verita_core::storage::{FileStore, KeyValueStore, MemoryStore};

pub fn build_store(settings: &StorageSettings) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let store: Arc<dyn KeyValueStore> = match settings.kind {
        StorageKind::File => Arc::new(FileStore::open(settings.token_file.clone())?),
        StorageKind::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}

/// Composition root: one store, one client, one session for the whole process.
pub fn build_session(settings: &Settings) -> Result<Session, ApiError> {
    let store = build_store(&settings.storage)?;
    let client = Arc::new(ApiClient::new(&settings.api, store)?);

    tracing::info!(
        base_url = %client.base_url(),
        storage = ?settings.storage.kind,
        "API client ready"
    );

    Ok(Session::new(client))
}
