//! Session persistence over an injectable key-value backend.
//!
//! # Design
//! - Identity and token persist under two keys, always written together.
//! - Corrupt or unrecognized stored values decode to "no session", never a panic.
//! - No network access; login/logout flows replace the snapshot explicitly.

use crate::core::auth::{Role, Session};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Storage key for the serialized user object.
pub const USER_KEY: &str = "beatly.user";
/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "beatly.token";

/// Key-value surface the session store reads and writes through.
///
/// The browser build plugs in LocalStorage; tests use an in-memory map.
pub trait SessionBackend {
    /// Read the stored value for a key, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Write a value for a key, replacing any previous one.
    fn write(&self, key: &str, value: &str);
    /// Remove a key and its value.
    fn remove(&self, key: &str);
}

/// Stored projection of the authenticated user, mirroring the backend's
/// user document shape. An unknown role fails deserialization here, which is
/// what turns a tampered or stale record into "no session".
#[derive(Serialize, Deserialize)]
struct StoredUser {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    role: Role,
}

/// Persistent store for the authenticated identity and bearer token.
///
/// The store is handed to components explicitly (via context) rather than
/// imported as a module-level singleton, so its lifecycle is visible: created
/// at app boot, read on every guarded navigation, cleared on logout.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Persist a session. Identity and token are written back to back in one
    /// synchronous call, so no interleaved read can observe one without the
    /// other under the single-threaded browser model.
    pub fn save(&self, session: &Session) {
        let user = StoredUser {
            id: session.user_id.clone(),
            name: session.display_name.clone(),
            role: session.role,
        };
        // Serializing a plain struct of strings cannot fail.
        if let Ok(json) = serde_json::to_string(&user) {
            self.backend.write(USER_KEY, &json);
            self.backend.write(TOKEN_KEY, &session.token);
        }
    }

    /// Read the persisted session, or `None` when absent or undecodable.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        let raw = self.backend.read(USER_KEY)?;
        let user: StoredUser = serde_json::from_str(&raw).ok()?;
        let token = self.backend.read(TOKEN_KEY)?;
        Some(Session {
            user_id: user.id,
            display_name: user.name,
            role: user.role,
            token,
        })
    }

    /// Read the raw bearer token, independent of user-record validity.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY)
    }

    /// Remove all session data.
    pub fn clear(&self) {
        self.backend.remove(USER_KEY);
        self.backend.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionBackend, SessionStore, TOKEN_KEY, USER_KEY};
    use crate::core::auth::{Role, Session};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemoryBackend {
        map: RefCell<HashMap<String, String>>,
    }

    impl SessionBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }

    fn store_with_backend() -> (SessionStore, Rc<MemoryBackend>) {
        let backend = Rc::new(MemoryBackend::default());
        (SessionStore::new(backend.clone()), backend)
    }

    fn sample() -> Session {
        Session {
            user_id: "64f0c2".to_string(),
            display_name: "Avery".to_string(),
            role: Role::Consumer,
            token: "bearer-token".to_string(),
        }
    }

    #[test]
    fn round_trips_a_well_formed_session() {
        let (store, _) = store_with_backend();
        let session = sample();
        store.save(&session);
        assert_eq!(store.current(), Some(session));
    }

    #[test]
    fn corrupt_user_record_reads_as_none() {
        let (store, backend) = store_with_backend();
        backend.write(USER_KEY, "{not json");
        backend.write(TOKEN_KEY, "tok");
        assert_eq!(store.current(), None);
    }

    #[test]
    fn unknown_role_reads_as_none() {
        let (store, backend) = store_with_backend();
        backend.write(USER_KEY, r#"{"_id":"u1","name":"n","role":"guest"}"#);
        backend.write(TOKEN_KEY, "tok");
        assert_eq!(store.current(), None);
    }

    #[test]
    fn token_survives_a_corrupt_user_record() {
        let (store, backend) = store_with_backend();
        backend.write(USER_KEY, "garbage");
        backend.write(TOKEN_KEY, "tok");
        assert_eq!(store.token(), Some("tok".to_string()));
    }

    #[test]
    fn missing_token_means_no_session() {
        let (store, backend) = store_with_backend();
        backend.write(USER_KEY, r#"{"_id":"u1","name":"n","role":"admin"}"#);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let (store, backend) = store_with_backend();
        store.save(&sample());
        store.clear();
        assert_eq!(store.current(), None);
        assert_eq!(store.token(), None);
        assert!(backend.map.borrow().is_empty());
    }
}
