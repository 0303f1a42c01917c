//! Platform abstraction layer
//!
//! Handles browser/native differences for storage (LocalStorage on web,
//! in-memory on native).

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

use std::rc::Rc;

use crate::persistence::{KeyValueStore, MemoryStorage};

/// Storage for the current platform.
///
/// In the browser this is `window.localStorage`; if that is blocked (private
/// mode, sandboxed iframe) the roster still runs against memory for the
/// session.
#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Rc<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => {
            log::info!("Using LocalStorage");
            Rc::new(storage)
        }
        Err(e) => {
            log::warn!("LocalStorage unavailable ({e}), falling back to memory");
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Native builds have no durable store
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Rc<dyn KeyValueStore> {
    Rc::new(MemoryStorage::new())
}
