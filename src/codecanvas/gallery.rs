//! Built-in starter templates offered in the note and code galleries.

use crate::model::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterKind {
    Note,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Starter {
    pub title: &'static str,
    pub content: &'static str,
    pub template: Template,
    pub icon: &'static str,
}

impl Starter {
    pub fn kind(&self) -> StarterKind {
        if self.template.is_code() {
            StarterKind::Code
        } else {
            StarterKind::Note
        }
    }
}

pub static STARTERS: &[Starter] = &[
    Starter {
        title: "Meeting Notes",
        content: "Key points from today's meeting...",
        template: Template::Classic,
        icon: "📝",
    },
    Starter {
        title: "Project Plan",
        content: "Task 1\nTask 2\nTask 3",
        template: Template::Checklist,
        icon: "✅",
    },
    Starter {
        title: "Brainstorm Ideas",
        content: "Idea 1, Idea 2, Idea 3",
        template: Template::Brainstorm,
        icon: "💡",
    },
    Starter {
        title: "Research Notes",
        content: "Findings and observations...",
        template: Template::Classic,
        icon: "🔍",
    },
    Starter {
        title: "JavaScript Function",
        content: "function example() {\n  // Your code here\n}",
        template: Template::Code,
        icon: "💻",
    },
    Starter {
        title: "HTML Structure",
        content: "<div class=\"container\">\n  <h1>Title</h1>\n  <p>Content</p>\n</div>",
        template: Template::Code,
        icon: "💻",
    },
    Starter {
        title: "CSS Styles",
        content: ".container {\n  display: flex;\n  justify-content: center;\n}",
        template: Template::Code,
        icon: "💻",
    },
    Starter {
        title: "Python Script",
        content: "def main():\n    print(\"Hello World\")\n\nif __name__ == \"__main__\":\n    main()",
        template: Template::Code,
        icon: "💻",
    },
];

/// Starters of one kind, or all of them, in gallery order.
pub fn starters(kind: Option<StarterKind>) -> Vec<&'static Starter> {
    STARTERS
        .iter()
        .filter(|s| kind.map_or(true, |k| s.kind() == k))
        .collect()
}
