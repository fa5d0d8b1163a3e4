use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ItemStore, KvBackend};

/// The last `limit` items added, most recent first.
pub fn run<B: KvBackend>(store: &ItemStore<B>, limit: usize) -> Result<CmdResult> {
    let recent = store.list().iter().rev().take(limit).cloned().collect();
    Ok(CmdResult::default().with_listed_items(recent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Item, Template};
    use crate::store::MemBackend;

    #[test]
    fn newest_insertions_first() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        for id in 1..=8 {
            store
                .add(Item::new(
                    id,
                    format!("t{}", id),
                    "c".into(),
                    Template::Classic,
                    Color::Blue,
                ))
                .unwrap();
        }
        let result = run(&store, 6).unwrap();
        let ids: Vec<i64> = result.listed_items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = ItemStore::open(MemBackend::new()).unwrap();
        assert!(run(&store, 6).unwrap().listed_items.is_empty());
    }
}
