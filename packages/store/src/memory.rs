use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::KeyValueBackend;

/// In-memory backend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, SessionStore};

    #[test]
    fn token_roundtrip_per_role() {
        let store = SessionStore::new(MemoryBackend::new());

        assert!(store.token(Role::Student).is_none());

        store.set_token(Role::Student, "tok-student");
        store.set_token(Role::Teacher, "tok-teacher");
        store.set_token(Role::Admin, "tok-admin");

        assert_eq!(store.token(Role::Student).as_deref(), Some("tok-student"));
        assert_eq!(store.token(Role::Teacher).as_deref(), Some("tok-teacher"));
        assert_eq!(store.token(Role::Admin).as_deref(), Some("tok-admin"));
    }

    #[test]
    fn clearing_one_role_leaves_the_others() {
        let store = SessionStore::new(MemoryBackend::new());
        for role in Role::ALL {
            store.set_token(role, "tok");
        }

        store.clear_token(Role::Teacher);

        assert!(store.token(Role::Teacher).is_none());
        assert!(store.token(Role::Student).is_some());
        assert!(store.token(Role::Admin).is_some());
    }

    #[test]
    fn empty_token_reads_as_absent() {
        let store = SessionStore::new(MemoryBackend::new());
        store.set_token(Role::Student, "");
        assert!(store.token(Role::Student).is_none());
    }

    #[test]
    fn reset_email_stash() {
        let store = SessionStore::new(MemoryBackend::new());

        store.set_reset_email(Role::Student, "ada@example.edu");
        assert_eq!(
            store.reset_email(Role::Student).as_deref(),
            Some("ada@example.edu")
        );
        // Stashes are per role
        assert!(store.reset_email(Role::Teacher).is_none());

        store.clear_reset_email(Role::Student);
        assert!(store.reset_email(Role::Student).is_none());
    }

    #[test]
    fn clear_session_drops_token_and_name() {
        let store = SessionStore::new(MemoryBackend::new());
        store.set_token(Role::Admin, "tok");
        store.set_display_name(Role::Admin, "Grace");

        store.clear_session(Role::Admin);

        assert!(store.token(Role::Admin).is_none());
        assert!(store.display_name(Role::Admin).is_none());
    }

    #[test]
    fn role_keys_are_distinct() {
        for (i, a) in Role::ALL.iter().enumerate() {
            for b in &Role::ALL[i + 1..] {
                assert_ne!(a.token_key(), b.token_key());
                assert_ne!(a.reset_email_key(), b.reset_email_key());
                assert_ne!(a.login_route(), b.login_route());
                assert_ne!(a.dashboard_route(), b.dashboard_route());
            }
        }
    }
}
