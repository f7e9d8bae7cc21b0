//! The authoritative invoice collection and its mutation commands.

use chrono::Utc;
use thiserror::Error;

use invoicexpress_core::{DomainError, Entity, InvoiceId};
use invoicexpress_invoicing::{
    generate_invoice_number, query, validate, Invoice, InvoiceDraft, StatusFilter,
};

use crate::seed::seed_invoices;
use crate::storage::{InvoiceStorage, StorageError};

/// Store command error.
///
/// Every expected failure (validation, missing target, persistence) comes
/// back as a value; commands never panic on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to persist invoices: {0}")]
    Storage(#[from] StorageError),
}

/// How the collection came to be at startup.
///
/// Exposed so the presentation layer can tell the user about a recovery;
/// the store's own callers never see a load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A persisted collection was loaded.
    Persisted,
    /// Nothing was persisted yet; the seed collection was installed.
    Seeded,
    /// Persisted data existed but could not be read; the seed collection
    /// was substituted.
    RecoveredFromCorrupt,
}

/// The canonical ordered invoice collection.
///
/// Insertion order is display order; new invoices are prepended. All
/// mutations validate first, then commit in memory, then mirror the full
/// collection through the storage collaborator before returning.
pub struct InvoiceStore<S> {
    invoices: Vec<Invoice>,
    storage: S,
    load_outcome: LoadOutcome,
}

impl<S: InvoiceStorage> InvoiceStore<S> {
    /// Load the collection once at startup.
    ///
    /// Unreadable persisted data is substituted with the seed collection and
    /// reported through [`InvoiceStore::load_outcome`]; it never reaches the
    /// caller as an error.
    pub fn open(storage: S) -> Self {
        let (invoices, load_outcome) = match storage.load() {
            Ok(Some(invoices)) => (invoices, LoadOutcome::Persisted),
            Ok(None) => (seed_invoices(), LoadOutcome::Seeded),
            Err(err) => {
                tracing::warn!(
                    "failed to load persisted invoices, falling back to seed data: {err}"
                );
                (seed_invoices(), LoadOutcome::RecoveredFromCorrupt)
            }
        };

        Self {
            invoices,
            storage,
            load_outcome,
        }
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// The full collection, in display order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn get(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| *Entity::id(*invoice) == id)
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Computed total of one invoice, if it exists.
    pub fn total_of(&self, id: InvoiceId) -> Option<f64> {
        self.get(id).map(Invoice::total)
    }

    /// The filtered, searchable view. Read-only, recomputed per call.
    pub fn view(&self, search: &str, filter: StatusFilter) -> Vec<&Invoice> {
        query::view(&self.invoices, search, filter)
    }

    /// Commit a new invoice from a draft; prepends on success.
    ///
    /// A blank invoice number is replaced with a generated one. On any
    /// failure the collection is left untouched.
    pub fn create(&mut self, mut draft: InvoiceDraft) -> Result<InvoiceId, StoreError> {
        validate(&draft)?;

        if draft.invoice_number.trim().is_empty() {
            draft.invoice_number = generate_invoice_number();
        }

        let id = InvoiceId::new();
        let invoice = Invoice::from_draft(id, draft, Utc::now());
        self.invoices.insert(0, invoice);
        self.persist()?;

        tracing::debug!("invoice {id} created");
        Ok(id)
    }

    /// Replace the invoice matching `id` with the draft's fields and a
    /// refreshed update stamp. All other invoices are untouched.
    pub fn update(&mut self, id: InvoiceId, draft: InvoiceDraft) -> Result<(), StoreError> {
        validate(&draft)?;

        let position = self.position(id).ok_or(DomainError::NotFound)?;
        self.invoices[position].apply_draft(draft, Utc::now());
        self.persist()
    }

    /// Delete the invoice matching `id`.
    ///
    /// Any "are you sure" confirmation is the caller's concern; this method
    /// never blocks waiting for one.
    pub fn remove(&mut self, id: InvoiceId) -> Result<(), StoreError> {
        let position = self.position(id).ok_or(DomainError::NotFound)?;
        self.invoices.remove(position);
        self.persist()?;

        tracing::debug!("invoice {id} removed");
        Ok(())
    }

    /// Duplicate an existing invoice: fresh id and number, status reset to
    /// draft, new creation stamp; prepended like a newly created invoice.
    pub fn clone_invoice(&mut self, id: InvoiceId) -> Result<InvoiceId, StoreError> {
        let source = self.get(id).ok_or(DomainError::NotFound)?;

        let clone_id = InvoiceId::new();
        let copy = source.duplicate(clone_id, generate_invoice_number(), Utc::now());
        self.invoices.insert(0, copy);
        self.persist()?;
        Ok(clone_id)
    }

    /// Set the matching invoice's status to paid and refresh its update
    /// stamp; no other field changes. Safe to repeat.
    pub fn mark_paid(&mut self, id: InvoiceId) -> Result<(), StoreError> {
        let position = self.position(id).ok_or(DomainError::NotFound)?;
        self.invoices[position].mark_paid(Utc::now());
        self.persist()
    }

    fn position(&self, id: InvoiceId) -> Option<usize> {
        self.invoices
            .iter()
            .position(|invoice| *Entity::id(invoice) == id)
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.storage.save(&self.invoices)?;
        Ok(())
    }
}
