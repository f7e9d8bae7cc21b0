use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use invoicexpress_core::{DomainError, DomainResult, Entity, InvoiceId, ValueObject};

use crate::totals;

/// Invoice lifecycle status.
///
/// There is no formal transition machine: an edit may set any status. The
/// dedicated mark-paid operation only ever sets `Paid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Pending,
    Paid,
    Overdue,
}

/// One billable entry on an invoice.
///
/// Owned by its parent invoice; carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub price: f64,
}

impl LineItem {
    /// A blank item as the form seeds it: one unit at price zero.
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            quantity: 1.0,
            price: 0.0,
        }
    }
}

impl ValueObject for LineItem {}

/// Coerce raw numeric form input for a quantity or price field.
///
/// Anything that fails to parse, is non-finite, or is negative becomes `0`.
pub fn coerce_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Entity: a committed invoice.
///
/// Owned exclusively by the invoice store; field mutation goes through the
/// methods below so the creation stamp and identifier stay immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    id: InvoiceId,
    invoice_number: String,
    client_name: String,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    status: InvoiceStatus,
    items: Vec<LineItem>,
    notes: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Commit a draft into a full invoice.
    ///
    /// The caller supplies the identifier and the creation stamp; the draft's
    /// invoice number is expected to be filled in by then.
    pub fn from_draft(id: InvoiceId, draft: InvoiceDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            invoice_number: draft.invoice_number,
            client_name: draft.client_name,
            issue_date: draft.issue_date,
            due_date: draft.due_date,
            status: draft.status,
            items: draft.items,
            notes: draft.notes,
            created_at,
            updated_at: None,
        }
    }

    /// Replace the form-editable fields from a draft and stamp the update.
    ///
    /// Identifier and creation stamp are untouched.
    pub fn apply_draft(&mut self, draft: InvoiceDraft, now: DateTime<Utc>) {
        self.invoice_number = draft.invoice_number;
        self.client_name = draft.client_name;
        self.issue_date = draft.issue_date;
        self.due_date = draft.due_date;
        self.status = draft.status;
        self.items = draft.items;
        self.notes = draft.notes;
        self.updated_at = Some(now);
    }

    /// Set the status to `Paid` and stamp the update. Touches nothing else.
    pub fn mark_paid(&mut self, now: DateTime<Utc>) {
        self.status = InvoiceStatus::Paid;
        self.updated_at = Some(now);
    }

    /// Copy this invoice into a fresh one.
    ///
    /// The copy gets the given identifier and invoice number, its status is
    /// reset to `Draft`, and its creation stamp is new; every other field is
    /// carried over verbatim.
    pub fn duplicate(
        &self,
        id: InvoiceId,
        invoice_number: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            invoice_number,
            status: InvoiceStatus::Draft,
            created_at,
            ..self.clone()
        }
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Monetary total over the line items, rounded to two decimals.
    pub fn total(&self) -> f64 {
        totals::total(&self.items)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &InvoiceId {
        &self.id
    }
}

/// Transient, not-yet-committed invoice shape edited by the form layer.
///
/// Drafts may pass through invalid intermediate states freely; validation
/// only runs when the draft is submitted to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub client_name: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    pub notes: String,
}

impl InvoiceDraft {
    /// An empty form: today's issue date, due in 30 days, one blank item.
    ///
    /// The invoice number is left blank; the store generates one at commit
    /// if the user never fills it in.
    pub fn new() -> Self {
        let today = Utc::now().date_naive();
        Self {
            client_name: String::new(),
            invoice_number: String::new(),
            issue_date: today,
            due_date: today + Duration::days(30),
            status: InvoiceStatus::Draft,
            items: vec![LineItem::blank()],
            notes: String::new(),
        }
    }

    /// Pre-populate the form for editing an existing invoice.
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            client_name: invoice.client_name.clone(),
            invoice_number: invoice.invoice_number.clone(),
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            status: invoice.status,
            items: invoice.items.clone(),
            notes: invoice.notes.clone(),
        }
    }

    /// Append a blank line item.
    pub fn add_item(&mut self) {
        self.items.push(LineItem::blank());
    }

    /// Remove the line item at `index`.
    ///
    /// Refuses to drop the last remaining item: an invoice always carries at
    /// least one. An index past the end is ignored.
    pub fn remove_item(&mut self, index: usize) -> DomainResult<()> {
        if self.items.len() <= 1 {
            return Err(DomainError::LastLineItem);
        }
        if index < self.items.len() {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Set a quantity from raw form input, coercing malformed values to `0`.
    pub fn set_item_quantity(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = coerce_amount(raw);
        }
    }

    /// Set a price from raw form input, coercing malformed values to `0`.
    pub fn set_item_price(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.price = coerce_amount(raw);
        }
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}
