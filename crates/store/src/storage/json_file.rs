//! JSON-file storage backend.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use invoicexpress_invoicing::Invoice;

use super::{InvoiceStorage, StorageError};

/// File-backed storage: the whole collection as one JSON document.
///
/// Saves go through a sibling temp file followed by a rename, so a crash
/// mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the default per-user location:
    /// `{app_data_dir}/invoicexpress/invoices.json`.
    pub fn at_default_path() -> Result<Self, StorageError> {
        default_storage_path()
            .map(Self::new)
            .map_err(|e| StorageError::Io(format!("{e:#}")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InvoiceStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Invoice>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        let invoices =
            serde_json::from_str(&raw).map_err(|e| StorageError::Deserialize(e.to_string()))?;
        Ok(Some(invoices))
    }

    fn save(&self, invoices: &[Invoice]) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(invoices)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        write_atomically(&self.path, raw.as_bytes())
            .map_err(|e| StorageError::Io(format!("{e:#}")))
    }
}

/// Write via a temp file in the target directory, then rename into place.
fn write_atomically(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create storage directory at {dir:?}"))?;

    let tmp = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp)
            .with_context(|| format!("failed to create temp file at {tmp:?}"))?;
        file.write_all(bytes)
            .with_context(|| format!("failed to write invoices to {tmp:?}"))?;
        file.sync_all()
            .with_context(|| format!("failed to flush invoices to {tmp:?}"))?;
    }
    fs::rename(&tmp, path).with_context(|| format!("failed to move {tmp:?} into place"))?;

    Ok(())
}

/// Resolve the default storage path:
/// `{app_data_dir}/invoicexpress/invoices.json`.
fn default_storage_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut home| {
                home.push(".local");
                home.push("share");
                home
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut path = base;
    path.push("invoicexpress");
    path.push("invoices.json");
    Ok(path)
}
