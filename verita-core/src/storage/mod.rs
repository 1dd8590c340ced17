//! Persisted key/value storage for client credentials.
//!
//! The client never talks to a concrete storage backend directly. It is handed
//! an `Arc<dyn KeyValueStore>` at construction, so the same code runs against an
//! on-disk file in the CLI and an in-memory map in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Storage key holding the current access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key holding the current refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Synchronous string key/value store. Writes are last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
