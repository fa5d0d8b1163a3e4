use super::fragments::non_blank_lines;
use crate::model::Template;

/// Card summaries clip text to this many characters.
pub const CARD_CLIP: usize = 100;

/// Starter gallery previews clip shorter.
pub const GALLERY_CLIP: usize = 60;

pub const CHECKLIST_PREVIEW_ENTRIES: usize = 3;
pub const CHECKLIST_ENTRY_CLIP: usize = 30;

const ELLIPSIS: char = '…';

/// Truncated summary of an item's content for cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Text(String),
    Code(String),
    /// At most three entries, each clipped.
    Checklist(Vec<String>),
}

pub fn preview(template: &Template, content: &str) -> Preview {
    match template {
        Template::Checklist => Preview::Checklist(
            non_blank_lines(content)
                .iter()
                .take(CHECKLIST_PREVIEW_ENTRIES)
                .map(|entry| clip(entry, CHECKLIST_ENTRY_CLIP))
                .collect(),
        ),
        Template::Code => Preview::Code(clip(content, CARD_CLIP)),
        _ => Preview::Text(clip(content, CARD_CLIP)),
    }
}

pub fn gallery_preview(content: &str) -> String {
    clip(content, GALLERY_CLIP)
}

/// Keeps the first `max` characters, appending `…` when anything was cut.
/// Counts chars, so multi-byte text is never split mid-character.
pub fn clip(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}
