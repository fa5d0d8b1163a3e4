use crate::commands::{create, CmdResult, NewItem};
use crate::error::{CanvasError, Result};
use crate::gallery::{starters, StarterKind};
use crate::model::Color;
use crate::store::{ItemStore, KvBackend};

pub fn run(kind: Option<StarterKind>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_starters(starters(kind)))
}

/// Creates an item from the 1-based `number`th starter of the gallery view.
pub fn use_starter<B: KvBackend>(
    store: &mut ItemStore<B>,
    kind: Option<StarterKind>,
    number: usize,
    color: Color,
) -> Result<CmdResult> {
    let starter = number
        .checked_sub(1)
        .and_then(|i| starters(kind).get(i).copied())
        .ok_or_else(|| CanvasError::Validation(format!("No starter number {}", number)))?;

    create::run(
        store,
        NewItem::new(
            starter.title,
            starter.content,
            starter.template.clone(),
            color,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;
    use crate::store::MemBackend;

    #[test]
    fn lists_code_starters() {
        let result = run(Some(StarterKind::Code)).unwrap();
        assert_eq!(result.starters.len(), 4);
        assert!(result.starters.iter().all(|s| s.template == Template::Code));
    }

    #[test]
    fn using_a_starter_creates_an_item() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        let result = use_starter(&mut store, Some(StarterKind::Note), 2, Color::Purple).unwrap();

        let item = &result.affected_items[0];
        assert_eq!(item.title, "Project Plan");
        assert_eq!(item.template, Template::Checklist);
        assert_eq!(item.color, Color::Purple);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        assert!(use_starter(&mut store, None, 0, Color::Blue).is_err());
        assert!(use_starter(&mut store, Some(StarterKind::Code), 5, Color::Blue).is_err());
        assert!(store.is_empty());
    }
}
