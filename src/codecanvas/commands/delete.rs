use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, KvBackend};

pub fn run<B: KvBackend>(store: &mut ItemStore<B>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let existing = store.get(id).cloned();
        if store.delete(id)? {
            if let Some(item) = existing {
                result.add_message(CmdMessage::success(format!("Item deleted: {}", item.title)));
                result.affected_items.push(item);
            }
        } else {
            result.add_message(CmdMessage::warning(format!("No item with id {}", id)));
        }
    }

    Ok(result)
}
