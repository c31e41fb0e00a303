//! Client-side session: the bearer token and the signed-in user.
//!
//! Storage is best-effort. A failing [`KeyValueStore`] never surfaces to the
//! caller; reads degrade to "no session" and writes are dropped, both with a
//! `warn` log line.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::KeyValueStore;
use crate::models::{LoginResponseData, User};

/// Storage key of the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "fleet_auth_token";
/// Storage key of the serialised user record.
pub const USER_STORAGE_KEY: &str = "fleet_user_data";

/// Opaque bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Token and user persistence over a key-value store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Build a session store over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist `token`, replacing any previous one.
    pub fn save(&self, token: &AuthToken) {
        if let Err(err) = self.store.set(TOKEN_STORAGE_KEY, token.as_str()) {
            warn!(error = %err, "failed to save auth token");
        }
    }

    /// Stored token, or `None` when absent or unreadable.
    #[must_use]
    pub fn get(&self) -> Option<AuthToken> {
        match self.store.get(TOKEN_STORAGE_KEY) {
            Ok(token) => token.map(AuthToken),
            Err(err) => {
                warn!(error = %err, "failed to read auth token");
                None
            }
        }
    }

    /// Remove both the token and the user record.
    pub fn clear(&self) {
        for key in [TOKEN_STORAGE_KEY, USER_STORAGE_KEY] {
            if let Err(err) = self.store.remove(key) {
                warn!(error = %err, key, "failed to clear session entry");
            }
        }
    }

    /// Whether a token is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Persist `user` as JSON.
    pub fn save_user(&self, user: &User) {
        let encoded = match serde_json::to_string(user) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode user record");
                return;
            }
        };
        if let Err(err) = self.store.set(USER_STORAGE_KEY, &encoded) {
            warn!(error = %err, "failed to save user record");
        }
    }

    /// Stored user. Missing, unreadable or undecodable records give `None`.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.store.get(USER_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "failed to read user record");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .inspect_err(|err| debug!(error = %err, "stored user record is not valid"))
            .ok()
    }

    /// Record a successful login. Token and user overwrite any previous
    /// session wholesale.
    pub fn handle_login(&self, login: &LoginResponseData) {
        self.save(&AuthToken::new(login.token.as_str()));
        self.save_user(&login.user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockKeyValueStore, StorageError};
    use mockall::predicate::eq;

    fn unavailable() -> StorageError {
        StorageError::unavailable("disk gone")
    }

    fn sample_user() -> User {
        User {
            id: 7,
            email: "owner@example.com".to_owned(),
            first_name: "Asha".to_owned(),
            last_name: "Rao".to_owned(),
            role: "owner".to_owned(),
            ..User::default()
        }
    }

    #[test]
    fn bearer_and_redacted_debug() {
        let token = AuthToken::new("abc123");
        assert_eq!(token.bearer(), "Bearer abc123");
        assert!(!format!("{token:?}").contains("abc123"));
    }

    #[test]
    fn save_writes_token_key() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .with(eq(TOKEN_STORAGE_KEY), eq("abc123"))
            .times(1)
            .returning(|_, _| Ok(()));
        SessionStore::new(Arc::new(store)).save(&AuthToken::new("abc123"));
    }

    #[test]
    fn get_returns_stored_token() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(TOKEN_STORAGE_KEY))
            .returning(|_| Ok(Some("abc123".to_owned())));
        let session = SessionStore::new(Arc::new(store));
        assert_eq!(session.get(), Some(AuthToken::new("abc123")));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_removes_both_keys() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_remove()
            .with(eq(TOKEN_STORAGE_KEY))
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_remove()
            .with(eq(USER_STORAGE_KEY))
            .times(1)
            .returning(|_| Ok(()));
        SessionStore::new(Arc::new(store)).clear();
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Err(unavailable()));
        store.expect_set().returning(|_, _| Err(unavailable()));
        store.expect_remove().returning(|_| Err(unavailable()));
        let session = SessionStore::new(Arc::new(store));

        session.save(&AuthToken::new("abc123"));
        session.save_user(&sample_user());
        session.clear();
        assert!(session.get().is_none());
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn undecodable_user_record_reads_as_none() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(USER_STORAGE_KEY))
            .returning(|_| Ok(Some("{not json".to_owned())));
        assert!(SessionStore::new(Arc::new(store)).current_user().is_none());
    }

    #[test]
    fn handle_login_stores_token_and_user() {
        let user = sample_user();
        let encoded = serde_json::to_string(&user).expect("encode user");
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .with(eq(TOKEN_STORAGE_KEY), eq("tok"))
            .times(1)
            .returning(|_, _| Ok(()));
        store
            .expect_set()
            .with(eq(USER_STORAGE_KEY), eq(encoded))
            .times(1)
            .returning(|_, _| Ok(()));
        SessionStore::new(Arc::new(store)).handle_login(&LoginResponseData {
            token: "tok".to_owned(),
            user,
        });
    }
}
