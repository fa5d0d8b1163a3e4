use crate::commands::CmdResult;
use crate::error::{CanvasError, Result};
use crate::model::{Item, Template};
use crate::store::{ItemStore, KvBackend};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateFilter {
    #[default]
    All,
    Only(Template),
}

impl FromStr for TemplateFilter {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(TemplateFilter::All);
        }
        Template::from_known(s)
            .map(TemplateFilter::Only)
            .ok_or_else(|| CanvasError::Validation(format!("Unknown template: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Store order, oldest insertion first.
    Stored,
    #[default]
    Newest,
    Oldest,
    Title,
}

impl FromStr for SortOrder {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stored" => Ok(SortOrder::Stored),
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "title" => Ok(SortOrder::Title),
            other => Err(CanvasError::Validation(format!(
                "Unknown sort order: {} (expected newest, oldest, title or stored)",
                other
            ))),
        }
    }
}

/// Read-only library view over the store: filter, then search, then sort.
#[derive(Debug, Clone, Default)]
pub struct LibraryQuery {
    pub filter: TemplateFilter,
    pub sort: SortOrder,
    pub search: Option<String>,
}

impl LibraryQuery {
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let needle = self
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());

        let mut out: Vec<Item> = items
            .iter()
            .filter(|item| match &self.filter {
                TemplateFilter::All => true,
                TemplateFilter::Only(t) => &item.template == t,
            })
            .filter(|item| match &needle {
                None => true,
                Some(n) => {
                    item.title.to_lowercase().contains(n) || item.content.to_lowercase().contains(n)
                }
            })
            .cloned()
            .collect();

        match self.sort {
            SortOrder::Stored => {}
            SortOrder::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Title => out.sort_by(compare_titles),
        }
        out
    }
}

fn compare_titles(a: &Item, b: &Item) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

pub fn run<B: KvBackend>(store: &ItemStore<B>, query: &LibraryQuery) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(query.apply(store.list())))
}
