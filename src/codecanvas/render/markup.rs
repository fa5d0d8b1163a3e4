use super::escape::escape_html;
use super::fragments::{render, Rendered};
use super::preview::{gallery_preview, preview, Preview};
use crate::gallery::Starter;
use crate::model::{Color, Item, Template};

const DIAGRAM_ARROW: &str = "<div class=\"diagram-arrow\">↓</div>";

impl Rendered {
    /// Escaped HTML fragment for the full item view.
    pub fn to_markup(&self) -> String {
        match self {
            Rendered::Text { lines } => {
                let body: Vec<String> = lines.iter().map(|l| escape_html(l)).collect();
                format!("<div class=\"item-content\">{}</div>", body.join("<br>"))
            }
            Rendered::Checklist { entries } => entries
                .iter()
                .map(|entry| {
                    format!(
                        "<div class=\"checklist-item\"><input type=\"checkbox\"{}><span>{}</span></div>",
                        if entry.checked { " checked" } else { "" },
                        escape_html(&entry.text)
                    )
                })
                .collect(),
            Rendered::Timeline { events } => {
                let mut out = String::from("<div class=\"timeline-container\">");
                for event in events {
                    out.push_str(&format!(
                        "<div class=\"timeline-item\"><div>{}</div></div>",
                        escape_html(event)
                    ));
                }
                out.push_str("</div>");
                out
            }
            Rendered::Diagram { nodes } => {
                let mut out = String::from("<div class=\"diagram-container\">");
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        out.push_str(DIAGRAM_ARROW);
                    }
                    out.push_str(&format!(
                        "<div class=\"diagram-box\">{}</div>",
                        escape_html(node)
                    ));
                }
                out.push_str("</div>");
                out
            }
            Rendered::Brainstorm { ideas } => {
                let mut out = String::from("<div class=\"brainstorm-container\">");
                for idea in ideas {
                    out.push_str(&format!(
                        "<div class=\"brainstorm-item\">{}</div>",
                        escape_html(idea)
                    ));
                }
                out.push_str("</div>");
                out
            }
            Rendered::Code { source } => {
                format!("<div class=\"code-snippet\">{}</div>", escape_html(source))
            }
        }
    }
}

impl Preview {
    /// Escaped HTML fragment for the body of a summary card.
    pub fn to_markup(&self) -> String {
        match self {
            Preview::Text(text) => {
                format!("<div class=\"preview-text\">{}</div>", escape_html(text))
            }
            Preview::Code(text) => {
                format!("<div class=\"preview-code\">{}</div>", escape_html(text))
            }
            Preview::Checklist(entries) => entries
                .iter()
                .map(|entry| {
                    format!(
                        "<div class=\"preview-checklist-item\"><i class=\"far fa-square\"></i><span>{}</span></div>",
                        escape_html(entry)
                    )
                })
                .collect(),
        }
    }
}

fn background(color: &Color) -> String {
    match color.gradient() {
        Some(gradient) => format!(" style=\"background: {}\"", gradient),
        None => String::new(),
    }
}

fn header(class: &str, template: &Template, title: &str) -> String {
    format!(
        "<div class=\"{class}-header\"><div class=\"{class}-icon\">{}</div><div class=\"{class}-title\">{}</div><div class=\"{class}-type\">{}</div></div>",
        template.icon(),
        escape_html(title),
        escape_html(template.label()),
        class = class
    )
}

/// Summary card: icon, title, template label and clipped preview.
pub fn render_card(item: &Item) -> String {
    format!(
        "<div class=\"item-card\" data-id=\"{}\"{}>{}<div class=\"item-preview-content\">{}</div></div>",
        item.id,
        background(&item.color),
        header("item", &item.template, &item.title),
        preview(&item.template, &item.content).to_markup()
    )
}

/// Full view of one item with every entry rendered.
pub fn render_item(item: &Item) -> String {
    format!(
        "<div class=\"item-preview\"{}>{}<div class=\"preview-content\">{}</div></div>",
        background(&item.color),
        header("preview", &item.template, &item.title),
        render(&item.template, &item.content).to_markup()
    )
}

/// Gallery tile for a starter template.
pub fn render_starter(starter: &Starter) -> String {
    format!(
        "<div class=\"template-item\"><div class=\"template-item-header\"><div class=\"template-item-icon\">{}</div><h3 class=\"template-item-title\">{}</h3></div><p class=\"template-item-content\">{}</p><div class=\"template-item-meta\"><span>{}</span><span>Click to use</span></div></div>",
        starter.icon,
        escape_html(starter.title),
        escape_html(&gallery_preview(starter.content)),
        escape_html(starter.template.label())
    )
}
