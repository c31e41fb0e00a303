//! Directory-backed key-value store: one file per key.

use std::io::ErrorKind;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{KeyValueStore, StorageError};

/// Persists each key as a file inside a capability-scoped directory.
///
/// Keys must be plain file names; anything containing a path separator or
/// naming a parent directory is refused.
#[derive(Debug)]
pub struct DirKeyValueStore {
    dir: Dir,
}

impl DirKeyValueStore {
    /// Wrap an already opened directory.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Open `path` with ambient authority, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(path).map_err(|err| {
            StorageError::unavailable(format!("create {}: {err}", path.display()))
        })?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| {
            StorageError::unavailable(format!("open {}: {err}", path.display()))
        })?;
        Ok(Self::new(dir))
    }
}

fn checked_key(key: &str) -> Result<&str, StorageError> {
    if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(StorageError::io(key, "key is not a plain file name"));
    }
    Ok(key)
}

impl KeyValueStore for DirKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.dir.read_to_string(checked_key(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(key, err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.dir
            .write(checked_key(key)?, value)
            .map_err(|err| StorageError::io(key, err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self.dir.remove_file(checked_key(key)?) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(key, err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp() -> TempDir {
        TempDir::new().expect("temp dir")
    }

    #[rstest]
    fn missing_key_reads_as_none(temp: TempDir) {
        let store = DirKeyValueStore::open(temp.path()).expect("open store");
        assert_eq!(store.get("fleet_auth_token").expect("get"), None);
        store.remove("fleet_auth_token").expect("remove missing");
    }

    #[rstest]
    fn values_survive_reopen(temp: TempDir) {
        DirKeyValueStore::open(temp.path())
            .expect("open store")
            .set("fleet_auth_token", "abc123")
            .expect("set");

        let reopened = DirKeyValueStore::open(temp.path()).expect("reopen store");
        assert_eq!(
            reopened.get("fleet_auth_token").expect("get").as_deref(),
            Some("abc123")
        );
    }

    #[rstest]
    #[case("../escape")]
    #[case("nested/key")]
    #[case("")]
    fn refuses_path_like_keys(temp: TempDir, #[case] key: &str) {
        let store = DirKeyValueStore::open(temp.path()).expect("open store");
        assert!(matches!(store.set(key, "x"), Err(StorageError::Io { .. })));
    }

    #[rstest]
    fn open_creates_missing_directory(temp: TempDir) {
        let nested = temp.path().join("session");
        DirKeyValueStore::open(&nested).expect("open store");
        assert!(nested.is_dir());
    }
}
