//! Host settings and their tolerant loader.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::store::SettingsStore;
use crate::core::{
    ConfigError, RoundConfig, SettingsError, DEFAULT_MUSIC_VOLUME, DEFAULT_TIME_LIMIT_SECS,
    MAX_TIME_LIMIT_SECS, MAX_WORD_CHARS, MIN_TIME_LIMIT_SECS,
};

pub const TIME_LIMIT_KEY: &str = "totalTimeLimit";
pub const MUSIC_VOLUME_KEY: &str = "musicVolume";
pub const WORDS_KEY: &str = "words";

/// Settings remembered between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub total_time_limit_secs: u32,
    /// Background music volume in `0.0..=1.0`.
    pub music_volume: f32,
    /// Last word list the host entered.
    pub words: Vec<String>,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            total_time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            music_volume: DEFAULT_MUSIC_VOLUME,
            words: Vec::new(),
        }
    }
}

impl PersistedSettings {
    /// Load from `store`, replacing each unusable field with its default.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();

        let total_time_limit_secs = read_field::<u32, _>(store, TIME_LIMIT_KEY)
            .filter(|secs| {
                let ok = (MIN_TIME_LIMIT_SECS..=MAX_TIME_LIMIT_SECS).contains(secs);
                if !ok {
                    warn!(key = TIME_LIMIT_KEY, value = secs, "time limit out of range, using default");
                }
                ok
            })
            .unwrap_or(defaults.total_time_limit_secs);

        let music_volume = read_field::<f32, _>(store, MUSIC_VOLUME_KEY)
            .filter(|v| {
                let ok = v.is_finite() && (0.0..=1.0).contains(v);
                if !ok {
                    warn!(key = MUSIC_VOLUME_KEY, value = v, "volume out of range, using default");
                }
                ok
            })
            .unwrap_or(defaults.music_volume);

        let words = read_field::<Vec<String>, _>(store, WORDS_KEY)
            .map(|words| {
                words
                    .into_iter()
                    .filter(|w| {
                        let chars = w.trim().chars().count();
                        chars > 0 && chars <= MAX_WORD_CHARS
                    })
                    .collect()
            })
            .unwrap_or(defaults.words);

        Self {
            total_time_limit_secs,
            music_volume,
            words,
        }
    }

    /// Write every field to `store`.
    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) -> Result<(), SettingsError> {
        store.write(TIME_LIMIT_KEY, &bincode::serialize(&self.total_time_limit_secs)?)?;
        store.write(MUSIC_VOLUME_KEY, &bincode::serialize(&self.music_volume)?)?;
        store.write(WORDS_KEY, &bincode::serialize(&self.words)?)?;
        Ok(())
    }

    /// Validate the stored word list and time limit into a round config.
    pub fn to_round_config(&self) -> Result<RoundConfig, ConfigError> {
        RoundConfig::new(self.words.clone(), self.total_time_limit_secs)
    }
}

fn read_field<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: SettingsStore + ?Sized,
{
    let bytes = store.read(key)?;
    match bincode::deserialize(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "malformed settings entry, using default");
            None
        }
    }
}
