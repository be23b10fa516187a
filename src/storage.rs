//! Almacenamiento efímero por pestaña (sessionStorage en web, memoria en nativo).

use crate::error::StorageError;
use std::collections::HashMap;

pub const TARGET_SUBJECT: &str = "targetSubject";
pub const TARGET_LEVEL: &str = "targetLevel";
pub const TARGET_COUNT: &str = "targetCount";
pub const LAST_REPORT: &str = "lastReport";

pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Vive lo que vive el proceso; equivale a la pestaña en la app nativa.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserSessionStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .session_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key: key.to_string() })
    }
}

/// Almacenamiento por defecto de la plataforma.
pub fn default_storage() -> Box<dyn SessionStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserSessionStorage::open() {
            Ok(storage) => return Box::new(storage),
            Err(err) => log::warn!("{err}; se usa memoria"),
        }
    }
    Box::new(MemoryStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_and_overwrite() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(TARGET_SUBJECT), None);

        storage.set(TARGET_SUBJECT, "Álgebra").unwrap();
        assert_eq!(storage.get(TARGET_SUBJECT).as_deref(), Some("Álgebra"));

        storage.set(TARGET_SUBJECT, "Geometría").unwrap();
        assert_eq!(storage.get(TARGET_SUBJECT).as_deref(), Some("Geometría"));
    }
}
