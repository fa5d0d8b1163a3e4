use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ItemStore, KvBackend};

pub fn run<B: KvBackend>(store: &ItemStore<B>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for &id in ids {
        match store.get(id) {
            Some(item) => result.listed_items.push(item.clone()),
            None => result.add_message(CmdMessage::warning(format!("No item with id {}", id))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Item, Template};
    use crate::store::MemBackend;

    #[test]
    fn returns_found_items_and_warns_on_missing() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store
            .add(Item::new(5, "t".into(), "c".into(), Template::Classic, Color::Blue))
            .unwrap();

        let result = run(&store, &[5, 6]).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }
}
