//! Intent table.
//!
//! Every user-facing action is one [`Intent`] variant, and
//! [`CanvasApi::dispatch`] maps each variant to exactly one API operation.
//! Front ends build intents from their own events (key presses, clicks,
//! command-line arguments) and hand them over without reaching into stores.

use crate::api::CanvasApi;
use crate::codec::ImportPolicy;
use crate::commands::{CmdResult, ConfigAction, ItemEdit, LibraryQuery, NewItem};
use crate::error::Result;
use crate::gallery::StarterKind;
use crate::model::{Color, Theme};
use crate::store::KvBackend;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Intent {
    Create(NewItem),
    Update(ItemEdit),
    Delete(Vec<i64>),
    Clear,
    List(LibraryQuery),
    Recent,
    Stats,
    View(Vec<i64>),
    Export {
        dir: Option<PathBuf>,
    },
    Import {
        path: PathBuf,
        policy: Option<ImportPolicy>,
    },
    Gallery(Option<StarterKind>),
    UseStarter {
        kind: Option<StarterKind>,
        number: usize,
        color: Color,
    },
    GetTheme,
    SetTheme(Theme),
    Config(ConfigAction),
}

impl Intent {
    /// True for intents that may change persisted state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Intent::Create(_)
                | Intent::Update(_)
                | Intent::Delete(_)
                | Intent::Clear
                | Intent::Import { .. }
                | Intent::UseStarter { .. }
                | Intent::SetTheme(_)
                | Intent::Config(ConfigAction::Set(..))
        )
    }
}

impl<B: KvBackend> CanvasApi<B> {
    pub fn dispatch(&mut self, intent: Intent) -> Result<CmdResult> {
        if intent.is_mutation() {
            log::debug!("dispatching {:?}", intent);
        } else {
            log::trace!("dispatching {:?}", intent);
        }
        match intent {
            Intent::Create(new_item) => self.create_item(new_item),
            Intent::Update(edit) => self.edit_item(edit),
            Intent::Delete(ids) => self.delete_items(&ids),
            Intent::Clear => self.clear_items(),
            Intent::List(query) => self.list_items(&query),
            Intent::Recent => self.recent_items(),
            Intent::Stats => self.stats(),
            Intent::View(ids) => self.view_items(&ids),
            Intent::Export { dir } => self.export_items(dir.as_deref()),
            Intent::Import { path, policy } => self.import_file(&path, policy),
            Intent::Gallery(kind) => self.gallery(kind),
            Intent::UseStarter {
                kind,
                number,
                color,
            } => self.use_starter(kind, number, color),
            Intent::GetTheme => self.theme(),
            Intent::SetTheme(theme) => self.set_theme(theme),
            Intent::Config(action) => self.config(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use crate::model::Template;
    use crate::store::MemBackend;

    fn api() -> CanvasApi<MemBackend> {
        CanvasApi::new(MemBackend::new(), CanvasConfig::default(), "/nonexistent").unwrap()
    }

    #[test]
    fn create_edit_delete_through_intents() {
        let mut api = api();
        let created = api
            .dispatch(Intent::Create(NewItem::new(
                "A",
                "l1\nl2",
                Template::Checklist,
                Color::Blue,
            )))
            .unwrap();
        let id = created.affected_items[0].id;

        api.dispatch(Intent::Update(ItemEdit {
            id,
            title: Some("B".into()),
            ..ItemEdit::default()
        }))
        .unwrap();
        let viewed = api.dispatch(Intent::View(vec![id])).unwrap();
        assert_eq!(viewed.listed_items[0].title, "B");
        assert_eq!(viewed.listed_items[0].content, "l1\nl2");

        api.dispatch(Intent::Delete(vec![id])).unwrap();
        let stats = api.dispatch(Intent::Stats).unwrap().stats.unwrap();
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn starter_and_theme_intents() {
        let mut api = api();
        api.dispatch(Intent::UseStarter {
            kind: Some(StarterKind::Code),
            number: 1,
            color: Color::Green,
        })
        .unwrap();
        let recent = api.dispatch(Intent::Recent).unwrap();
        assert_eq!(recent.listed_items[0].title, "JavaScript Function");

        api.dispatch(Intent::SetTheme(Theme::Light)).unwrap();
        let theme = api.dispatch(Intent::GetTheme).unwrap().theme;
        assert_eq!(theme, Some(Theme::Light));
    }

    #[test]
    fn reads_are_not_mutations() {
        assert!(!Intent::List(LibraryQuery::default()).is_mutation());
        assert!(!Intent::Config(ConfigAction::ShowAll).is_mutation());
        assert!(Intent::Clear.is_mutation());
    }
}
