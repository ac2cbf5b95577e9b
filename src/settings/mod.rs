//! Persisted host settings.
//!
//! Settings live in a key-value `SettingsStore`, one bincode-encoded entry
//! per field. Loading never fails: a missing, malformed or out-of-range
//! entry falls back to its default on its own.

pub mod persisted;
pub mod store;

pub use persisted::{PersistedSettings, MUSIC_VOLUME_KEY, TIME_LIMIT_KEY, WORDS_KEY};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
