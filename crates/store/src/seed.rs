//! Fixed fallback collection used when no valid persisted data exists.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use invoicexpress_core::InvoiceId;
use invoicexpress_invoicing::{Invoice, InvoiceDraft, InvoiceStatus, LineItem};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are compile-time constants, known valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn stamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn item(description: &str, quantity: f64, price: f64) -> LineItem {
    LineItem {
        description: description.to_string(),
        quantity,
        price,
    }
}

fn invoice(id: u128, created_at: DateTime<Utc>, draft: InvoiceDraft) -> Invoice {
    Invoice::from_draft(InvoiceId::from_uuid(Uuid::from_u128(id)), draft, created_at)
}

/// The fixed three-invoice starter collection.
///
/// Installed when nothing has been persisted yet, and substituted when
/// persisted data turns out to be unreadable. Deterministic so the recovery
/// path is testable.
pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        invoice(
            1,
            stamp(2023, 9, 15, 10, 30),
            InvoiceDraft {
                client_name: "Acme Corporation".to_string(),
                invoice_number: "INV-2023-001".to_string(),
                issue_date: date(2023, 9, 15),
                due_date: date(2023, 10, 15),
                status: InvoiceStatus::Paid,
                items: vec![
                    item("Web Development Services", 1.0, 1500.0),
                    item("Hosting (Annual)", 1.0, 200.0),
                ],
                notes: "Thank you for your business!".to_string(),
            },
        ),
        invoice(
            2,
            stamp(2023, 10, 1, 14, 45),
            InvoiceDraft {
                client_name: "Stark Industries".to_string(),
                invoice_number: "INV-2023-002".to_string(),
                issue_date: date(2023, 10, 1),
                due_date: date(2023, 10, 31),
                status: InvoiceStatus::Pending,
                items: vec![
                    item("Consulting Services", 10.0, 150.0),
                    item("Technical Documentation", 1.0, 350.0),
                ],
                notes: "Net 30 payment terms".to_string(),
            },
        ),
        invoice(
            3,
            stamp(2023, 10, 15, 9, 15),
            InvoiceDraft {
                client_name: "Wayne Enterprises".to_string(),
                invoice_number: "INV-2023-003".to_string(),
                issue_date: date(2023, 10, 15),
                due_date: date(2023, 11, 15),
                status: InvoiceStatus::Draft,
                items: vec![
                    item("Security Audit", 1.0, 2500.0),
                    item("Penetration Testing", 2.0, 1200.0),
                ],
                notes: String::new(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicexpress_core::Entity;
    use std::collections::HashSet;

    #[test]
    fn seed_is_three_distinct_invoices() {
        let seed = seed_invoices();
        assert_eq!(seed.len(), 3);

        let ids: HashSet<&InvoiceId> = seed.iter().map(Entity::id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(seed_invoices(), seed_invoices());
    }

    #[test]
    fn seed_totals_match_the_line_items() {
        let seed = seed_invoices();
        assert_eq!(seed[0].total(), 1700.0);
        assert_eq!(seed[1].total(), 1850.0);
        assert_eq!(seed[2].total(), 4900.0);
    }

    #[test]
    fn seed_statuses_cover_the_starter_lifecycle() {
        let seed = seed_invoices();
        assert_eq!(seed[0].status(), InvoiceStatus::Paid);
        assert_eq!(seed[1].status(), InvoiceStatus::Pending);
        assert_eq!(seed[2].status(), InvoiceStatus::Draft);
        assert!(seed.iter().all(|i| i.updated_at().is_none()));
    }
}
