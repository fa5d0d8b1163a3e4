use crate::error::{CanvasError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering schema applied to an item's content.
///
/// Unrecognized values are kept verbatim in `Other` so persisted and imported
/// records always load; consumers treat them like `Classic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    #[default]
    Classic,
    Checklist,
    Timeline,
    Diagram,
    Brainstorm,
    Code,
    Other(String),
}

impl Template {
    pub const ALL: [Template; 6] = [
        Template::Classic,
        Template::Checklist,
        Template::Timeline,
        Template::Diagram,
        Template::Brainstorm,
        Template::Code,
    ];

    /// Parses one of the six known kinds, rejecting anything else.
    pub fn from_known(value: &str) -> Option<Self> {
        match Self::from(value) {
            Template::Other(_) => None,
            known => Some(known),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Template::Classic => "classic",
            Template::Checklist => "checklist",
            Template::Timeline => "timeline",
            Template::Diagram => "diagram",
            Template::Brainstorm => "brainstorm",
            Template::Code => "code",
            Template::Other(raw) => raw,
        }
    }

    /// Human readable name. Unknown kinds show their raw value.
    pub fn label(&self) -> &str {
        match self {
            Template::Classic => "Classic Note",
            Template::Checklist => "Checklist",
            Template::Timeline => "Timeline",
            Template::Diagram => "Diagram",
            Template::Brainstorm => "Brainstorm",
            Template::Code => "Code Snippet",
            Template::Other(raw) => raw,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Template::Checklist => "✅",
            Template::Timeline => "📅",
            Template::Diagram => "📊",
            Template::Brainstorm => "💡",
            Template::Code => "💻",
            Template::Classic | Template::Other(_) => "📝",
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Template::Code)
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        match value {
            "classic" => Template::Classic,
            "checklist" => Template::Checklist,
            "timeline" => Template::Timeline,
            "diagram" => Template::Diagram,
            "brainstorm" => Template::Brainstorm,
            "code" => Template::Code,
            other => Template::Other(other.to_string()),
        }
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::from(value.as_str())
    }
}

impl From<Template> for String {
    fn from(value: Template) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosmetic card tag. Has no effect on how content is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Orange,
    Purple,
    Red,
    Other(String),
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Purple,
        Color::Red,
    ];

    pub fn from_known(value: &str) -> Option<Self> {
        match Self::from(value) {
            Color::Other(_) => None,
            known => Some(known),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Other(raw) => raw,
        }
    }

    /// Card background. Unknown colors get no background at all.
    pub fn gradient(&self) -> Option<&'static str> {
        match self {
            Color::Blue => Some("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
            Color::Green => Some("linear-gradient(135deg, #11998e 0%, #38ef7d 100%)"),
            Color::Orange => Some("linear-gradient(135deg, #f093fb 0%, #f5576c 100%)"),
            Color::Purple => Some("linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)"),
            Color::Red => Some("linear-gradient(135deg, #fa709a 0%, #fee140 100%)"),
            Color::Other(_) => None,
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        match value {
            "blue" => Color::Blue,
            "green" => Color::Green,
            "orange" => Color::Orange,
            "purple" => Color::Purple,
            "red" => Color::Red,
            other => Color::Other(other.to_string()),
        }
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color::from(value.as_str())
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active display theme. Any string is accepted when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Other(String),
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Other(raw) => raw,
        }
    }

    /// Only `dark` gets the dark treatment; anything else renders light.
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            other => Theme::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub template: Template,
    pub color: Color,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: i64, title: String, content: String, template: Template, color: Color) -> Self {
        Self {
            id,
            title,
            content,
            template,
            color,
            created_at: Utc::now(),
        }
    }

    /// Builds the replacement record for an edit, carrying identity and
    /// creation time forward.
    pub fn replaced_with(
        &self,
        title: String,
        content: String,
        template: Template,
        color: Color,
    ) -> Self {
        Self {
            id: self.id,
            title,
            content,
            template,
            color,
            created_at: self.created_at,
        }
    }
}

/// Millisecond-timestamp id, bumped past `current_max` when the clock has not
/// moved on, so ids stay unique and follow creation order.
pub fn fresh_id(current_max: Option<i64>) -> Result<i64> {
    let now = Utc::now().timestamp_millis();
    match current_max {
        Some(max) if max >= now => max.checked_add(1).ok_or_else(|| {
            CanvasError::Store(format!("no item id is available above {}", max))
        }),
        _ => Ok(now),
    }
}
