//! # Import/Export Codec
//!
//! The portable document is JSON:
//!
//! ```text
//! {
//!   "items": [ { "id": ..., "title": ..., "createdAt": ... }, ... ],
//!   "exportDate": "2024-05-01T09:30:00Z"
//! }
//! ```
//!
//! Only `items` is required on the way in. Anything else in the document is
//! ignored, so files written by other versions still import.

use crate::error::{CanvasError, Result};
use crate::model::{fresh_id, Item};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub items: Vec<Item>,
    #[serde(rename = "exportDate")]
    pub export_date: DateTime<Utc>,
}

/// What to do when an imported item's id is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportPolicy {
    /// Append as-is, duplicates included.
    #[default]
    Append,
    /// Give colliding items fresh ids.
    RegenerateIds,
    /// Refuse the whole document.
    RejectCollisions,
}

impl std::str::FromStr for ImportPolicy {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "append" => Ok(ImportPolicy::Append),
            "regenerate-ids" => Ok(ImportPolicy::RegenerateIds),
            "reject-collisions" => Ok(ImportPolicy::RejectCollisions),
            other => Err(CanvasError::Validation(format!(
                "Unknown import policy: {} (expected append, regenerate-ids or reject-collisions)",
                other
            ))),
        }
    }
}

/// Pretty-printed export document.
pub fn encode(items: &[Item], now: DateTime<Utc>) -> Result<String> {
    let doc = ExportDocument {
        items: items.to_vec(),
        export_date: now,
    };
    serde_json::to_string_pretty(&doc).map_err(CanvasError::Serialization)
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("codecanvas-export-{}.json", now.format("%Y-%m-%d"))
}

/// Parses a document and returns its items, in document order.
pub fn decode(text: &str) -> Result<Vec<Item>> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| CanvasError::InvalidImport(format!("not valid JSON ({})", e)))?;

    let items = doc
        .get("items")
        .ok_or_else(|| CanvasError::InvalidImport("missing `items` field".to_string()))?;
    let items = items
        .as_array()
        .ok_or_else(|| CanvasError::InvalidImport("`items` must be a list".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Item::deserialize(value).map_err(|e| {
                CanvasError::InvalidImport(format!("item {} is not a valid record ({})", i + 1, e))
            })
        })
        .collect()
}

/// Applies `policy` to incoming items against the ids already stored.
/// Returns the items to append and how many got new ids.
pub fn resolve_ids(
    policy: ImportPolicy,
    existing: &[Item],
    incoming: Vec<Item>,
) -> Result<(Vec<Item>, usize)> {
    let mut used: HashSet<i64> = existing.iter().map(|i| i.id).collect();

    match policy {
        ImportPolicy::Append => {
            let collisions = incoming.iter().filter(|i| used.contains(&i.id)).count();
            if collisions > 0 {
                warn!("importing {} items with ids already in the store", collisions);
            }
            Ok((incoming, 0))
        }
        ImportPolicy::RejectCollisions => {
            for item in &incoming {
                if !used.insert(item.id) {
                    return Err(CanvasError::IdCollision(item.id));
                }
            }
            Ok((incoming, 0))
        }
        ImportPolicy::RegenerateIds => {
            let mut max = used.iter().copied().max();
            let mut regenerated = 0;
            let mut out = Vec::with_capacity(incoming.len());
            for mut item in incoming {
                if used.contains(&item.id) {
                    item.id = fresh_id(max.max(Some(item.id)))?;
                    regenerated += 1;
                }
                used.insert(item.id);
                max = max.max(Some(item.id));
                out.push(item);
            }
            Ok((out, regenerated))
        }
    }
}
