use crate::commands::{validated_text, CmdMessage, CmdResult, NewItem};
use crate::error::Result;
use crate::model::Item;
use crate::store::{ItemStore, KvBackend};

pub fn run<B: KvBackend>(store: &mut ItemStore<B>, new_item: NewItem) -> Result<CmdResult> {
    let (title, content) = validated_text(&new_item.title, &new_item.content)?;
    let item = Item::new(
        store.next_id()?,
        title,
        content,
        new_item.template,
        new_item.color,
    );
    store.add(item.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Item saved: {}", item.title)));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;
    use crate::model::{Color, Template};
    use crate::store::MemBackend;

    #[test]
    fn creates_trimmed_item_at_end() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        run(
            &mut store,
            NewItem::new("First", "x", Template::Classic, Color::Blue),
        )
        .unwrap();
        let result = run(
            &mut store,
            NewItem::new("  A  ", "\nl1\nl2\n", Template::Checklist, Color::Blue),
        )
        .unwrap();

        let created = &result.affected_items[0];
        assert_eq!(created.title, "A");
        assert_eq!(created.content, "l1\nl2");
        assert_eq!(store.list().last(), Some(created));
    }

    #[test]
    fn ids_are_unique_across_quick_creates() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        for i in 0..20 {
            run(
                &mut store,
                NewItem::new(format!("t{}", i), "c", Template::Code, Color::Red),
            )
            .unwrap();
        }
        let mut ids: Vec<i64> = store.list().iter().map(|i| i.id).collect();
        let sorted = {
            let mut s = ids.clone();
            s.sort();
            s
        };
        assert_eq!(ids, sorted);
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn largest_possible_id_blocks_creation_without_wrapping() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store
            .add(Item::new(
                i64::MAX,
                "imported".into(),
                "c".into(),
                Template::Classic,
                Color::Blue,
            ))
            .unwrap();

        let result = run(&mut store, NewItem::new("t", "c", Template::Classic, Color::Blue));
        assert!(matches!(result, Err(CanvasError::Store(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_blank_title_or_content() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        let blank_title = run(
            &mut store,
            NewItem::new("   ", "c", Template::Classic, Color::Blue),
        );
        assert!(matches!(blank_title, Err(CanvasError::Validation(_))));

        let blank_content = run(
            &mut store,
            NewItem::new("t", "\n\n", Template::Classic, Color::Blue),
        );
        assert!(matches!(blank_content, Err(CanvasError::Validation(_))));
        assert!(store.is_empty());
    }
}
