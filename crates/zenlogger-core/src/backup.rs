//! Whole-store backup and restore.
//!
//! A backup is one JSON document:
//!
//! ```json
//! { "version": "1.0.0", "timestamp": "2026-01-01T00:00:00.000Z",
//!   "data": { "<store key>": "<raw stored JSON text>" } }
//! ```
//!
//! Values in `data` are carried as opaque strings. They are never decoded
//! and re-encoded, so a stored value that is itself a JSON string survives
//! byte-for-byte, and so does one that is not valid JSON at all. Import is merge-overwrite: keys missing from the document
//! are left alone.

use std::collections::BTreeMap;

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BackupError;
use crate::storage::KeyValueStore;

/// Current backup format version (semver).
pub const BACKUP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub version: String,
    pub timestamp: String,
    pub data: BTreeMap<String, String>,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Keys written in total.
    pub written: usize,
    /// Of those, keys that replaced an existing value.
    pub overwritten: usize,
}

impl BackupDocument {
    /// Serialize pretty-printed, keys sorted.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate a document without touching any store.
    ///
    /// # Errors
    /// `InvalidFormat` unless the text is a JSON object whose `data` field
    /// is an object of strings.
    pub fn from_json(json: &str) -> Result<Self, BackupError> {
        let root: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| BackupError::InvalidFormat(format!("not JSON: {e}")))?;
        let obj = root
            .as_object()
            .ok_or_else(|| BackupError::InvalidFormat("top level is not an object".into()))?;

        let raw_data = obj
            .get("data")
            .ok_or_else(|| BackupError::InvalidFormat("missing 'data' field".into()))?
            .as_object()
            .ok_or_else(|| BackupError::InvalidFormat("'data' is not an object".into()))?;

        let mut data = BTreeMap::new();
        for (key, value) in raw_data {
            let raw = value.as_str().ok_or_else(|| {
                BackupError::InvalidFormat(format!("value for '{key}' is not a string"))
            })?;
            if serde_json::from_str::<serde::de::IgnoredAny>(raw).is_err() {
                tracing::warn!(%key, "backup value is not valid JSON, restoring it verbatim");
            }
            data.insert(key.clone(), raw.to_string());
        }

        let text_field = |name: &str| {
            obj.get(name)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };

        Ok(Self {
            version: text_field("version"),
            timestamp: text_field("timestamp"),
            data,
        })
    }
}

/// Snapshot every key in `store`.
///
/// Keys are read one at a time; a key deleted between listing and reading
/// is skipped.
pub async fn export<S: KeyValueStore + ?Sized>(store: &S) -> Result<BackupDocument, BackupError> {
    let mut data = BTreeMap::new();
    for key in store.keys().await? {
        if let Some(value) = store.get(&key).await? {
            data.insert(key, value);
        }
    }

    tracing::info!(keys = data.len(), "store exported");
    Ok(BackupDocument {
        version: BACKUP_VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        data,
    })
}

/// Write every entry of `doc` into `store`, overwriting same-named keys.
///
/// Callers should reload any in-memory state derived from the store afterwards.
pub async fn import<S: KeyValueStore + ?Sized>(
    store: &S,
    doc: &BackupDocument,
) -> Result<ImportSummary, BackupError> {
    if major_version(&doc.version) != major_version(BACKUP_VERSION) {
        tracing::warn!(
            found = %doc.version,
            expected = BACKUP_VERSION,
            "backup version differs, importing anyway"
        );
    }

    let existing = store.keys().await?;
    let mut summary = ImportSummary::default();
    for (key, value) in &doc.data {
        store.set(key, value).await?;
        summary.written += 1;
        if existing.contains(key) {
            summary.overwritten += 1;
        }
    }

    tracing::info!(
        written = summary.written,
        overwritten = summary.overwritten,
        "backup imported"
    );
    Ok(summary)
}

/// Validate `json` completely, then import it. Nothing is written if
/// validation fails.
pub async fn import_json<S: KeyValueStore + ?Sized>(
    store: &S,
    json: &str,
) -> Result<ImportSummary, BackupError> {
    let doc = BackupDocument::from_json(json)?;
    import(store, &doc).await
}

/// `<app>_backup_<YYYY-MM-DD>.json`
pub fn backup_file_name(app: &str, date: NaiveDate) -> String {
    format!("{app}_backup_{}.json", date.format("%Y-%m-%d"))
}

fn major_version(version: &str) -> Option<u32> {
    version.split('.').next()?.parse().ok()
}
