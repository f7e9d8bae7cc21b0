//! Invoicing domain module.
//!
//! Business rules for invoices: the entity and form (draft) types, the
//! commit-time validator, line-item totals, invoice numbering, and the
//! read-only query/filter engine. Deterministic domain logic only (no IO,
//! no HTTP, no storage).

pub mod invoice;
pub mod number;
pub mod query;
pub mod totals;
pub mod validate;

pub use invoice::{coerce_amount, Invoice, InvoiceDraft, InvoiceStatus, LineItem};
pub use number::generate_invoice_number;
pub use query::{view, StatusFilter};
pub use totals::{total, total_display};
pub use validate::validate;
