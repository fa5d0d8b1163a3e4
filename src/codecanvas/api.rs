//! # API Facade
//!
//! The single entry point for codecanvas operations, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs`, fills in values that come from
//! configuration (recent limit, import policy, export directory) and returns
//! `Result<CmdResult>`. It does no printing and holds no business logic.
//!
//! `CanvasApi<B: KvBackend>` is generic over the storage backend:
//! - Production: `CanvasApi<FsBackend>`
//! - Testing: `CanvasApi<MemBackend>`

use crate::codec::ImportPolicy;
use crate::commands;
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::gallery::StarterKind;
use crate::model::{Color, Item, Theme};
use crate::store::{ItemStore, KvBackend, PreferenceStore};
use chrono::Utc;
use std::path::{Path, PathBuf};

pub use crate::commands::{
    CmdMessage, CmdResult, ConfigAction, ExportFile, ItemEdit, LibraryQuery, MessageLevel,
    NewItem, SortOrder, Stats, TemplateFilter,
};

pub struct CanvasApi<B: KvBackend> {
    items: ItemStore<B>,
    prefs: PreferenceStore<B>,
    config: CanvasConfig,
    data_dir: PathBuf,
}

impl<B: KvBackend + Clone> CanvasApi<B> {
    /// Opens both stores over the same backend. Fails when the items slot
    /// exists but cannot be read.
    pub fn new(backend: B, config: CanvasConfig, data_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            items: ItemStore::open(backend.clone())?,
            prefs: PreferenceStore::open(backend),
            config,
            data_dir: data_dir.into(),
        })
    }
}

impl<B: KvBackend> CanvasApi<B> {
    pub fn items(&self) -> &[Item] {
        self.items.list()
    }

    pub fn create_item(&mut self, new_item: NewItem) -> Result<CmdResult> {
        commands::create::run(&mut self.items, new_item)
    }

    pub fn replace_item(&mut self, id: i64, item: Item) -> Result<CmdResult> {
        commands::update::run(&mut self.items, id, item)
    }

    pub fn edit_item(&mut self, edit: ItemEdit) -> Result<CmdResult> {
        commands::update::edit(&mut self.items, edit)
    }

    pub fn delete_items(&mut self, ids: &[i64]) -> Result<CmdResult> {
        commands::delete::run(&mut self.items, ids)
    }

    pub fn clear_items(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.items)
    }

    pub fn list_items(&self, query: &LibraryQuery) -> Result<CmdResult> {
        commands::list::run(&self.items, query)
    }

    pub fn recent_items(&self) -> Result<CmdResult> {
        commands::recent::run(&self.items, self.config.recent_limit)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.items)
    }

    pub fn view_items(&self, ids: &[i64]) -> Result<CmdResult> {
        commands::view::run(&self.items, ids)
    }

    /// Writes to `dir`, else the configured export dir, else the working
    /// directory.
    pub fn export_items(&self, dir: Option<&Path>) -> Result<CmdResult> {
        let dir = dir
            .map(Path::to_path_buf)
            .or_else(|| self.config.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        commands::export::run(&self.items, &dir, Utc::now())
    }

    pub fn import_file(&mut self, path: &Path, policy: Option<ImportPolicy>) -> Result<CmdResult> {
        let policy = policy.unwrap_or(self.config.import_policy);
        commands::import::run(&mut self.items, path, policy)
    }

    pub fn import_document(
        &mut self,
        text: &str,
        policy: Option<ImportPolicy>,
    ) -> Result<CmdResult> {
        let policy = policy.unwrap_or(self.config.import_policy);
        commands::import::apply(&mut self.items, text, policy)
    }

    pub fn gallery(&self, kind: Option<StarterKind>) -> Result<CmdResult> {
        commands::gallery::run(kind)
    }

    pub fn use_starter(
        &mut self,
        kind: Option<StarterKind>,
        number: usize,
        color: Color,
    ) -> Result<CmdResult> {
        commands::gallery::use_starter(&mut self.items, kind, number, color)
    }

    pub fn theme(&self) -> Result<CmdResult> {
        commands::theme::get(&self.prefs)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<CmdResult> {
        commands::theme::set(&mut self.prefs, theme)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.config, &self.data_dir, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;
    use crate::store::MemBackend;
    use tempfile::TempDir;

    fn api_with(backend: MemBackend, config: CanvasConfig) -> CanvasApi<MemBackend> {
        CanvasApi::new(backend, config, "/nonexistent").unwrap()
    }

    fn add(api: &mut CanvasApi<MemBackend>, title: &str) {
        api.create_item(NewItem::new(title, "c", Template::Classic, Color::Blue))
            .unwrap();
    }

    #[test]
    fn recent_uses_configured_limit() {
        let config = CanvasConfig {
            recent_limit: 2,
            ..CanvasConfig::default()
        };
        let mut api = api_with(MemBackend::new(), config);
        for t in ["a", "b", "c"] {
            add(&mut api, t);
        }
        let titles: Vec<String> = api
            .recent_items()
            .unwrap()
            .listed_items
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn import_falls_back_to_configured_policy() {
        let config = CanvasConfig {
            import_policy: ImportPolicy::RejectCollisions,
            ..CanvasConfig::default()
        };
        let mut api = api_with(MemBackend::new(), config);
        add(&mut api, "a");
        let doc = crate::codec::encode(api.items(), Utc::now()).unwrap();

        assert!(api.import_document(&doc, None).is_err());
        assert!(api
            .import_document(&doc, Some(ImportPolicy::Append))
            .is_ok());
        assert_eq!(api.items().len(), 2);
    }

    #[test]
    fn export_prefers_explicit_dir_over_config() {
        let configured = TempDir::new().unwrap();
        let explicit = TempDir::new().unwrap();
        let config = CanvasConfig {
            export_dir: Some(configured.path().to_path_buf()),
            ..CanvasConfig::default()
        };
        let mut api = api_with(MemBackend::new(), config);
        add(&mut api, "a");

        let to_config = api.export_items(None).unwrap().export.unwrap();
        assert!(to_config.path.starts_with(configured.path()));
        let to_explicit = api.export_items(Some(explicit.path())).unwrap().export.unwrap();
        assert!(to_explicit.path.starts_with(explicit.path()));
    }

    #[test]
    fn stores_share_backend_but_not_state() {
        let backend = MemBackend::new();
        let mut api = api_with(backend.clone(), CanvasConfig::default());
        add(&mut api, "a");
        api.set_theme(Theme::Light).unwrap();
        api.clear_items().unwrap();

        let reopened = api_with(backend, CanvasConfig::default());
        assert!(reopened.items().is_empty());
        assert_eq!(reopened.theme().unwrap().theme, Some(Theme::Light));
    }
}
