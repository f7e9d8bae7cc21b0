//! Human-readable invoice number generation.

use chrono::Utc;
use rand::Rng;

/// Generate a display invoice number of the form `INV-<6 digits>-<3 digits>`.
///
/// The first group is the last six digits of the current Unix-epoch
/// milliseconds, the second a zero-padded random value below 1000. The
/// result is cosmetic: uniqueness is carried by the invoice id, not by this
/// string. Free of side effects, so the form layer may regenerate it on
/// every blank form without touching the store.
pub fn generate_invoice_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let stamp = millis.unsigned_abs() % 1_000_000;
    let suffix: u32 = rand::rng().random_range(0..1000);
    format!("INV-{stamp:06}-{suffix:03}")
}
