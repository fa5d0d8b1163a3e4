use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ItemStore, KvBackend};

/// Dashboard counters. Everything that is not a code snippet counts as a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub code: usize,
    pub notes: usize,
}

pub fn run<B: KvBackend>(store: &ItemStore<B>) -> Result<CmdResult> {
    let total = store.len();
    let code = store.list().iter().filter(|i| i.template.is_code()).count();
    Ok(CmdResult::default().with_stats(Stats {
        total,
        code,
        notes: total - code,
    }))
}
