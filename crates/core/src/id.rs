//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an invoice.
///
/// Backed by UUIDv7 (time-ordered), so freshly minted ids sort roughly by
/// creation time and collisions are astronomically unlikely rather than
/// formally prevented. Assigned once at commit and immutable thereafter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Mint a new identifier.
    ///
    /// Prefer passing ids explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for InvoiceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<InvoiceId> for Uuid {
    fn from(value: InvoiceId) -> Self {
        value.0
    }
}

impl FromStr for InvoiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("InvoiceId: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct() {
        let a = InvoiceId::new();
        let b = InvoiceId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn parses_its_own_display_form() {
        let id = InvoiceId::new();
        let parsed: InvoiceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn rejects_garbage() {
        let err = "not-a-uuid".parse::<InvoiceId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
