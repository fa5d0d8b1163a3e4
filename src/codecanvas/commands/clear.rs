use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, KvBackend};

pub fn run<B: KvBackend>(store: &mut ItemStore<B>) -> Result<CmdResult> {
    let removed = store.len();
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All data cleared ({} items removed)",
        removed
    )));
    Ok(result)
}
