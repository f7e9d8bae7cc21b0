//! In-memory storage backend for tests and embedding without a real backend.

use std::sync::RwLock;

use invoicexpress_invoicing::Invoice;

use super::{InvoiceStorage, StorageError};

/// In-memory backend holding the raw serialized document, the way a browser
/// key-value store would hold a string under one key.
///
/// Seeding it with an arbitrary payload via [`InMemoryStorage::with_raw`]
/// exercises the corrupt-data recovery path without any real storage behind
/// it.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    raw: RwLock<Option<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted raw payload (valid or not).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    /// The raw persisted document, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.read().ok()?.clone()
    }
}

impl InvoiceStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<Vec<Invoice>>, StorageError> {
        let guard = self
            .raw
            .read()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;

        let Some(raw) = guard.as_ref() else {
            return Ok(None);
        };

        let invoices =
            serde_json::from_str(raw).map_err(|e| StorageError::Deserialize(e.to_string()))?;
        Ok(Some(invoices))
    }

    fn save(&self, invoices: &[Invoice]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(invoices)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        let mut guard = self
            .raw
            .write()
            .map_err(|_| StorageError::Io("storage lock poisoned".to_string()))?;
        *guard = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_backend_loads_nothing() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn corrupt_payload_is_a_deserialize_error() {
        let storage = InMemoryStorage::with_raw("definitely not json");
        let err = storage.load().unwrap_err();
        assert!(matches!(err, StorageError::Deserialize(_)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = InMemoryStorage::new();
        storage.save(&[]).unwrap();
        assert_eq!(storage.load().unwrap(), Some(vec![]));
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }
}
