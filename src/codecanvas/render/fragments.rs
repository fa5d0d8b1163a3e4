use crate::model::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub text: String,
    pub checked: bool,
}

/// Structured full rendering of an item's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Free text, one element per source line (blank lines kept).
    Text { lines: Vec<String> },
    Checklist { entries: Vec<ChecklistEntry> },
    /// Events in source order.
    Timeline { events: Vec<String> },
    /// Nodes in source order; a connector goes between each consecutive pair.
    Diagram { nodes: Vec<String> },
    /// Comma separated ideas in order of appearance.
    Brainstorm { ideas: Vec<String> },
    /// Verbatim literal block.
    Code { source: String },
}

impl Rendered {
    /// Number of entries for list-like kinds, lines for text, 1 for code.
    pub fn len(&self) -> usize {
        match self {
            Rendered::Text { lines } => lines.len(),
            Rendered::Checklist { entries } => entries.len(),
            Rendered::Timeline { events } => events.len(),
            Rendered::Diagram { nodes } => nodes.len(),
            Rendered::Brainstorm { ideas } => ideas.len(),
            Rendered::Code { .. } => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn render(template: &Template, content: &str) -> Rendered {
    match template {
        Template::Checklist => Rendered::Checklist {
            entries: non_blank_lines(content)
                .into_iter()
                .map(|text| ChecklistEntry {
                    text,
                    checked: false,
                })
                .collect(),
        },
        Template::Timeline => Rendered::Timeline {
            events: non_blank_lines(content),
        },
        Template::Diagram => Rendered::Diagram {
            nodes: non_blank_lines(content),
        },
        Template::Brainstorm => Rendered::Brainstorm {
            ideas: ideas(content),
        },
        Template::Code => Rendered::Code {
            source: content.to_string(),
        },
        Template::Classic | Template::Other(_) => Rendered::Text {
            lines: content.split('\n').map(str::to_string).collect(),
        },
    }
}

/// Source lines with whitespace-only lines dropped. Kept lines are not trimmed.
pub(crate) fn non_blank_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn ideas(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|idea| !idea.is_empty())
        .map(str::to_string)
        .collect()
}
