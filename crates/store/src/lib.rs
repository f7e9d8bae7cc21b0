//! Invoice store: the authoritative collection and its persistence boundary.
//!
//! The store owns the canonical in-memory invoice sequence, runs the domain
//! validator and calculator before committing mutations, and mirrors every
//! change through the [`storage::InvoiceStorage`] collaborator. Reads go
//! through the query engine without touching state.

pub mod seed;
pub mod storage;
pub mod store;

pub use seed::seed_invoices;
pub use storage::{InMemoryStorage, InvoiceStorage, JsonFileStorage, StorageError};
pub use store::{InvoiceStore, LoadOutcome, StoreError};
