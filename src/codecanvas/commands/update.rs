use crate::commands::{validated_text, CmdMessage, CmdResult, ItemEdit};
use crate::error::Result;
use crate::model::Item;
use crate::store::{ItemStore, KvBackend};

/// Replaces the record stored under `id` with `item`, whole.
///
/// An unknown id is not an error: the result carries a warning and the store
/// is untouched.
pub fn run<B: KvBackend>(store: &mut ItemStore<B>, id: i64, item: Item) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.update(id, item.clone())? {
        result.add_message(CmdMessage::success(format!("Item updated: {}", item.title)));
        result.affected_items.push(item);
    } else {
        result.add_message(CmdMessage::warning(format!("No item with id {}", id)));
    }
    Ok(result)
}

/// Builds the full replacement from the stored record plus the edited fields,
/// then replaces it.
pub fn edit<B: KvBackend>(store: &mut ItemStore<B>, edit: ItemEdit) -> Result<CmdResult> {
    let Some(current) = store.get(edit.id).cloned() else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No item with id {}", edit.id)));
        return Ok(result);
    };

    let (title, content) = validated_text(
        edit.title.as_deref().unwrap_or(&current.title),
        edit.content.as_deref().unwrap_or(&current.content),
    )?;
    let replacement = current.replaced_with(
        title,
        content,
        edit.template.unwrap_or_else(|| current.template.clone()),
        edit.color.unwrap_or_else(|| current.color.clone()),
    );
    run(store, edit.id, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Template};
    use crate::store::MemBackend;

    fn seeded() -> ItemStore<MemBackend> {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        for (id, title) in [(1, "a"), (2, "b"), (3, "c")] {
            store
                .add(Item::new(
                    id,
                    title.into(),
                    "body".into(),
                    Template::Classic,
                    Color::Blue,
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn replaces_exactly_and_keeps_position() {
        let mut store = seeded();
        let replacement = Item::new(2, "B".into(), "new".into(), Template::Code, Color::Red);
        run(&mut store, 2, replacement.clone()).unwrap();

        assert_eq!(store.list()[1], replacement);
        assert_eq!(store.get(2), Some(&replacement));
    }

    #[test]
    fn unknown_id_warns_and_changes_nothing() {
        let mut store = seeded();
        let before = store.list().to_vec();
        let result = run(
            &mut store,
            9,
            Item::new(9, "x".into(), "y".into(), Template::Classic, Color::Blue),
        )
        .unwrap();

        assert!(result.has_problems());
        assert!(result.affected_items.is_empty());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn edit_copies_forward_untouched_fields() {
        let mut store = seeded();
        let created_at = store.get(3).unwrap().created_at;
        edit(
            &mut store,
            ItemEdit {
                id: 3,
                color: Some(Color::Green),
                ..ItemEdit::default()
            },
        )
        .unwrap();

        let item = store.get(3).unwrap();
        assert_eq!(item.title, "c");
        assert_eq!(item.content, "body");
        assert_eq!(item.color, Color::Green);
        assert_eq!(item.created_at, created_at);
    }

    #[test]
    fn edit_unknown_id_warns() {
        let mut store = seeded();
        let result = edit(
            &mut store,
            ItemEdit {
                id: 42,
                title: Some("x".into()),
                ..ItemEdit::default()
            },
        )
        .unwrap();
        assert!(result.has_problems());
    }

    #[test]
    fn edit_rejects_blank_title() {
        let mut store = seeded();
        let outcome = edit(
            &mut store,
            ItemEdit {
                id: 1,
                title: Some("  ".into()),
                ..ItemEdit::default()
            },
        );
        assert!(outcome.is_err());
        assert_eq!(store.get(1).unwrap().title, "a");
    }
}
