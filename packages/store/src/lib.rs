pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

#[cfg(not(target_arch = "wasm32"))]
mod file_backend;
#[cfg(not(target_arch = "wasm32"))]
pub use file_backend::FileBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use config::PortalConfig;
pub use session::{KeyValueBackend, Role, SessionStore};
