//! # Filesystem-backed key/value store
//!
//! [`FileBackend`] persists each key as one file under a base directory. It is
//! the native stand-in for browser `localStorage`, used when the UI runs
//! outside a browser (tests, tooling).
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── student_token
//! ├── teacher_token
//! └── ...                # one file per key, containing the raw value
//! ```
//!
//! Use [`FileBackend::in_data_dir`] for a platform-appropriate base
//! (`~/.local/share/campus-portal/` on Linux, `Application Support` on macOS).

use std::path::PathBuf;

use crate::session::KeyValueBackend;

#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Backend rooted at the platform data directory.
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campus-portal");
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, SessionStore};

    #[test]
    fn persists_across_store_instances() {
        let dir = std::env::temp_dir().join(format!(
            "campus-portal-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let _ = std::fs::remove_dir_all(&dir);

        {
            let store = SessionStore::new(FileBackend::new(dir.clone()));
            store.set_token(Role::Student, "persisted");
        }
        {
            let store = SessionStore::new(FileBackend::new(dir.clone()));
            assert_eq!(store.token(Role::Student).as_deref(), Some("persisted"));
            store.clear_token(Role::Student);
            assert!(store.token(Role::Student).is_none());
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}
