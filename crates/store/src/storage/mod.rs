//! Persisted-collection boundary.
//!
//! The store only requires a whole-collection load/save contract; what sits
//! behind it (a browser key-value store, a file, a test double) is the
//! embedder's choice. No storage assumptions leak into the domain.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;

use std::sync::Arc;

use thiserror::Error;

use invoicexpress_invoicing::Invoice;

/// Storage operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage access failed: {0}")]
    Io(String),

    #[error("failed to serialize invoices: {0}")]
    Serialize(String),

    #[error("failed to deserialize persisted invoices: {0}")]
    Deserialize(String),
}

/// Whole-collection persistence contract.
///
/// `load` returns the last persisted collection, or `None` when nothing has
/// been persisted yet; it is called once at store startup. `save` overwrites
/// the entire previous collection and runs after every mutating store
/// operation. Both are synchronous from the caller's perspective. The
/// persisted copy is last-writer-wins; no conflict detection is attempted.
pub trait InvoiceStorage {
    fn load(&self) -> Result<Option<Vec<Invoice>>, StorageError>;
    fn save(&self, invoices: &[Invoice]) -> Result<(), StorageError>;
}

impl<S> InvoiceStorage for Arc<S>
where
    S: InvoiceStorage + ?Sized,
{
    fn load(&self) -> Result<Option<Vec<Invoice>>, StorageError> {
        (**self).load()
    }

    fn save(&self, invoices: &[Invoice]) -> Result<(), StorageError> {
        (**self).save(invoices)
    }
}
