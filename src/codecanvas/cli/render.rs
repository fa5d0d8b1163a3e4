//! Terminal rendering of command results.
//!
//! Everything here returns a `String` so it can be tested without a
//! terminal; the `print_*` wrappers are what the handlers call.

use super::styles::{swatch_rgb, SWATCH};
use chrono::{DateTime, Utc};
use codecanvas::api::{CmdMessage, MessageLevel, Stats};
use codecanvas::config::CanvasConfig;
use codecanvas::gallery::Starter;
use codecanvas::model::{Color, Item, Theme};
use codecanvas::render::{gallery_preview, render, Rendered};
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 14;
const SEPARATOR: &str = "--------------------------------";

fn swatch(color: &Color) -> ColoredString {
    match swatch_rgb(color) {
        Some((r, g, b)) => SWATCH.truecolor(r, g, b),
        None => SWATCH.dimmed(),
    }
}

/// One line per item: swatch, id, icon, title and a content preview, with the
/// template label and age right-aligned.
pub fn render_item_list(items: &[Item], empty_message: &str) -> String {
    if items.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut out = String::new();
    for item in items {
        let id = format!("{} ", item.id);
        let icon = format!("{} ", item.template.icon());
        let preview: String = item
            .content
            .chars()
            .take(LINE_WIDTH)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = format!("{} {}", item.title, preview);

        let label = format!("{:>width$}", item.template.label(), width = LABEL_WIDTH);
        let fixed = 2 + id.width() + icon.width() + LABEL_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        out.push_str(&format!(
            "{} {}{}{}{}{}{}\n",
            swatch(&item.color),
            id.yellow(),
            icon,
            title_display,
            " ".repeat(padding),
            label.cyan(),
            format_time_ago(item.created_at).dimmed()
        ));
    }
    out
}

/// Full view: header, then every entry of the item's template.
pub fn render_full_items(items: &[Item]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {} {} {}\n",
            swatch(&item.color),
            item.id.to_string().yellow(),
            item.template.icon(),
            item.title.bold()
        ));
        out.push_str(&format!(
            "{}\n",
            format!(
                "{} · {}",
                item.template.label(),
                item.created_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        ));
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&render_body(&render(&item.template, &item.content)));
    }
    out
}

fn render_body(rendered: &Rendered) -> String {
    let mut out = String::new();
    match rendered {
        Rendered::Text { lines } => {
            for line in lines {
                out.push_str(&format!("{}\n", line));
            }
        }
        Rendered::Checklist { entries } => {
            for entry in entries {
                let mark = if entry.checked { "☑" } else { "☐" };
                out.push_str(&format!("{} {}\n", mark, entry.text));
            }
        }
        Rendered::Timeline { events } => {
            for event in events {
                out.push_str(&format!("{} {}\n", "●".cyan(), event));
            }
        }
        Rendered::Diagram { nodes } => {
            let inner = nodes.iter().map(|n| n.width()).max().unwrap_or(0) + 2;
            for (i, node) in nodes.iter().enumerate() {
                if i > 0 {
                    out.push_str(&format!("{:^width$}\n", "↓", width = inner + 2));
                }
                let pad = inner - node.width();
                let left = pad / 2;
                out.push_str(&format!("┌{}┐\n", "─".repeat(inner)));
                out.push_str(&format!(
                    "│{}{}{}│\n",
                    " ".repeat(left),
                    node,
                    " ".repeat(pad - left)
                ));
                out.push_str(&format!("└{}┘\n", "─".repeat(inner)));
            }
        }
        Rendered::Brainstorm { ideas } => {
            for idea in ideas {
                out.push_str(&format!("{} {}\n", "•".magenta(), idea));
            }
        }
        Rendered::Code { source } => {
            for line in source.split('\n') {
                out.push_str(&format!("    {}\n", line.green()));
            }
        }
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "{} {}   {} {}   {} {}\n",
        "Items".dimmed(),
        stats.total.to_string().bold(),
        "Code".dimmed(),
        stats.code.to_string().bold(),
        "Notes".dimmed(),
        stats.notes.to_string().bold()
    )
}

/// Numbered starter tiles, numbering from 1 as `use` expects.
pub fn render_starters(starters: &[&Starter]) -> String {
    let mut out = String::new();
    for (i, starter) in starters.iter().enumerate() {
        out.push_str(&format!(
            "{} {} {}  {}\n",
            format!("{}.", i + 1).yellow(),
            starter.icon,
            starter.title.bold(),
            starter.template.label().cyan()
        ));
        let preview = gallery_preview(starter.content).replace('\n', " ");
        out.push_str(&format!("     {}\n", preview.dimmed()));
    }
    out
}

pub fn render_theme(theme: &Theme) -> String {
    let shown = if theme.is_dark() { "dark" } else { "light" };
    if theme.as_str() == shown {
        format!("{}\n", theme)
    } else {
        format!("{} {}\n", theme, format!("(shown as {})", shown).dimmed())
    }
}

pub fn render_config(config: &CanvasConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());

    // Pad units to the width of "seconds" so the "ago" column lines up.
    let time_str = time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
