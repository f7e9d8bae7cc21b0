//! Read-only filtered views over an invoice collection.

use crate::invoice::{Invoice, InvoiceStatus};

/// Status predicate for [`view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Sentinel: every status matches.
    #[default]
    All,
    /// Exact status equality, no hierarchy.
    Only(InvoiceStatus),
}

impl StatusFilter {
    fn matches(self, status: InvoiceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Derive the filtered, searchable view of a collection.
///
/// The search term is matched case-insensitively as a substring of the
/// client name OR the invoice number; an empty term matches everything. The
/// status predicate is ANDed on top. Source order is preserved, nothing is
/// mutated, and the view is recomputed from scratch on every call.
pub fn view<'a>(invoices: &'a [Invoice], search: &str, filter: StatusFilter) -> Vec<&'a Invoice> {
    let needle = search.to_lowercase();

    invoices
        .iter()
        .filter(|invoice| {
            let matches_search = needle.is_empty()
                || invoice.client_name().to_lowercase().contains(&needle)
                || invoice.invoice_number().to_lowercase().contains(&needle);

            matches_search && filter.matches(invoice.status())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{InvoiceDraft, LineItem};
    use chrono::Utc;
    use invoicexpress_core::{Entity, InvoiceId};

    fn invoice(client: &str, number: &str, status: InvoiceStatus) -> Invoice {
        let mut draft = InvoiceDraft::new();
        draft.client_name = client.to_string();
        draft.invoice_number = number.to_string();
        draft.status = status;
        draft.items = vec![LineItem {
            description: "Consulting Services".to_string(),
            quantity: 1.0,
            price: 150.0,
        }];
        Invoice::from_draft(InvoiceId::new(), draft, Utc::now())
    }

    fn fixture() -> Vec<Invoice> {
        vec![
            invoice("Acme Corporation", "INV-2023-001", InvoiceStatus::Paid),
            invoice("Stark Industries", "INV-2023-002", InvoiceStatus::Pending),
            invoice("Acme Services", "INV-2023-003", InvoiceStatus::Pending),
            invoice("Wayne Enterprises", "INV-ACME-004", InvoiceStatus::Paid),
        ]
    }

    #[test]
    fn empty_search_and_all_statuses_matches_everything() {
        let invoices = fixture();
        let result = view(&invoices, "", StatusFilter::All);
        assert_eq!(result.len(), invoices.len());
    }

    #[test]
    fn search_is_case_insensitive_over_client_name_and_number() {
        let invoices = fixture();
        let result = view(&invoices, "acme", StatusFilter::All);

        // Two client-name matches plus one invoice-number match.
        assert_eq!(result.len(), 3);
        assert!(result.iter().any(|i| i.invoice_number() == "INV-ACME-004"));
    }

    #[test]
    fn predicates_are_anded() {
        let invoices = fixture();
        let result = view(&invoices, "acme", StatusFilter::Only(InvoiceStatus::Paid));

        let numbers: Vec<&str> = result.iter().map(|i| i.invoice_number()).collect();
        assert_eq!(numbers, vec!["INV-2023-001", "INV-ACME-004"]);
    }

    #[test]
    fn status_filter_uses_exact_equality() {
        let invoices = fixture();
        let result = view(&invoices, "", StatusFilter::Only(InvoiceStatus::Overdue));
        assert!(result.is_empty());
    }

    #[test]
    fn source_order_is_preserved() {
        let invoices = fixture();
        let result = view(&invoices, "", StatusFilter::Only(InvoiceStatus::Pending));

        let ids: Vec<InvoiceId> = result.iter().map(|i| *Entity::id(*i)).collect();
        let expected: Vec<InvoiceId> = invoices
            .iter()
            .filter(|i| i.status() == InvoiceStatus::Pending)
            .map(|i| *Entity::id(i))
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn view_does_not_mutate_the_source() {
        let invoices = fixture();
        let before = invoices.clone();
        let _ = view(&invoices, "stark", StatusFilter::Only(InvoiceStatus::Pending));
        assert_eq!(invoices, before);
    }
}
