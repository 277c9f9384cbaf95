//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Time (wall clock in milliseconds)
//!
//! Stores receive these as injected values so tests never touch a real
//! browser.

pub mod storage;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use time::{Clock, ManualClock, SystemClock};
