// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::{de::DeserializeOwned, Serialize};

use crate::{ConfigError, ConfigStore};

/// Serializes config values as JSON and delegates storage to a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Load and decode the value for `key`. Missing and empty blobs are `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Encode `value` as pretty JSON and store it under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let mut data = serde_json::to_vec_pretty(value)?;
        data.push(b'\n');
        self.store.save_raw(key, &data)
    }

    /// Load `key`, or store and return `T::default()` when nothing is there yet.
    ///
    /// A blob that exists but fails to decode is reported, never overwritten.
    pub fn load_or_init<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        if let Some(value) = self.load(key)? {
            return Ok(value);
        }
        let value = T::default();
        self.save(key, &value)?;
        Ok(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{MemoryConfigStore, Prefs, PREFS_KEY};
    use primal_core::Strategy;

    #[test]
    fn missing_key_loads_as_none() {
        let service = ConfigService::new(MemoryConfigStore::new());
        assert!(service.load::<Prefs>(PREFS_KEY).unwrap().is_none());
    }

    #[test]
    fn blank_blob_loads_as_none() {
        let store = MemoryConfigStore::new();
        store.save_raw(PREFS_KEY, b"  \n").unwrap();
        let service = ConfigService::new(store);
        assert!(service.load::<Prefs>(PREFS_KEY).unwrap().is_none());
    }

    #[test]
    fn save_and_reload() {
        let service = ConfigService::new(MemoryConfigStore::new());
        let prefs = Prefs {
            strategy: Strategy::Sieve,
            retry_notice: false,
        };
        service.save(PREFS_KEY, &prefs).unwrap();
        assert_eq!(service.load::<Prefs>(PREFS_KEY).unwrap(), Some(prefs));
    }

    #[test]
    fn load_or_init_persists_defaults_once() {
        let service = ConfigService::new(MemoryConfigStore::new());
        let prefs: Prefs = service.load_or_init(PREFS_KEY).unwrap();
        assert_eq!(prefs, Prefs::default());
        assert_eq!(service.store().len(), 1);
    }

    #[test]
    fn load_or_init_keeps_corrupt_blob() {
        let store = MemoryConfigStore::new();
        store.save_raw(PREFS_KEY, b"{ not json").unwrap();
        let service = ConfigService::new(store);
        let err = service.load_or_init::<Prefs>(PREFS_KEY).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
        assert_eq!(service.store().load_raw(PREFS_KEY).unwrap(), b"{ not json");
    }
}
