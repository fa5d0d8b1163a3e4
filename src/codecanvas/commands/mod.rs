use crate::config::CanvasConfig;
use crate::error::{CanvasError, Result};
use crate::gallery::Starter;
use crate::model::{Color, Item, Template, Theme};
use std::path::PathBuf;

pub mod clear;
pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod gallery;
pub mod import;
pub mod list;
pub mod recent;
pub mod stats;
pub mod theme;
pub mod update;
pub mod view;

pub use config::ConfigAction;
pub use list::{LibraryQuery, SortOrder, TemplateFilter};
pub use stats::Stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A written export file.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub path: PathBuf,
    pub item_count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub starters: Vec<&'static Starter>,
    pub stats: Option<Stats>,
    pub theme: Option<Theme>,
    pub export: Option<ExportFile>,
    pub config: Option<CanvasConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_starters(mut self, starters: Vec<&'static Starter>) -> Self {
        self.starters = starters;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: CanvasConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is a warning.
    pub fn has_problems(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Warning)
    }
}

/// Fields for a new item, as collected by a creation flow.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub content: String,
    pub template: Template,
    pub color: Color,
}

impl NewItem {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        template: Template,
        color: Color,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            template,
            color,
        }
    }
}

/// An edit of an existing item. Unset fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct ItemEdit {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub template: Option<Template>,
    pub color: Option<Color>,
}

/// Trims and checks the two fields the creation flow requires.
pub(crate) fn validated_text(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() {
        return Err(CanvasError::Validation("Please enter a title".to_string()));
    }
    if content.is_empty() {
        return Err(CanvasError::Validation("Please enter some content".to_string()));
    }
    Ok((title.to_string(), content.to_string()))
}
