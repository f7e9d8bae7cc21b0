//! Commit-time draft validation.

use invoicexpress_core::{DomainError, DomainResult};

use crate::invoice::InvoiceDraft;

/// Validate a draft before it is committed.
///
/// Pure check, no side effects. Runs only when a draft is submitted to the
/// store; drafts are free to pass through invalid intermediate states while
/// the form is being edited.
pub fn validate(draft: &InvoiceDraft) -> DomainResult<()> {
    if draft.client_name.trim().is_empty() {
        return Err(DomainError::MissingClientName);
    }

    // An empty item list counts as incomplete: a committed invoice always
    // carries at least one line item.
    if draft.items.is_empty() {
        return Err(DomainError::incomplete_line_item(0));
    }

    for (index, item) in draft.items.iter().enumerate() {
        if item.description.trim().is_empty() {
            return Err(DomainError::incomplete_line_item(index));
        }
    }

    Ok(())
}
