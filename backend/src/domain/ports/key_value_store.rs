//! Driven port for the key-value storage behind the session store.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by storage adapters.
    pub enum StorageError {
        /// The store cannot be reached at all, for example a poisoned lock or
        /// a missing directory.
        Unavailable { message: String } => "storage unavailable: {message}",
        /// Reading or writing a single entry failed.
        Io { key: String, message: String } => "storage i/o failed for {key}: {message}",
    }
}

/// String key-value storage. Operations are synchronous and independent.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backing store fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
