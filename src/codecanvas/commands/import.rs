use crate::codec::{self, ImportPolicy};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CanvasError, Result};
use crate::store::{ItemStore, KvBackend};
use std::fs;
use std::path::Path;

/// Reads an export document from disk and appends its items.
pub fn run<B: KvBackend>(
    store: &mut ItemStore<B>,
    path: &Path,
    policy: ImportPolicy,
) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(CanvasError::Io)?;
    apply(store, &text, policy)
}

/// Decodes `text` and appends its items in document order. Nothing is
/// written unless the whole document is accepted.
pub fn apply<B: KvBackend>(
    store: &mut ItemStore<B>,
    text: &str,
    policy: ImportPolicy,
) -> Result<CmdResult> {
    let incoming = codec::decode(text)?;
    let (items, regenerated) = codec::resolve_ids(policy, store.list(), incoming)?;
    let count = items.len();
    store.extend(items.clone())?;

    let mut result = CmdResult::default().with_affected_items(items);
    result.add_message(CmdMessage::success(format!("Imported {} items", count)));
    if regenerated > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} items were given new ids",
            regenerated
        )));
    }
    Ok(result)
}
