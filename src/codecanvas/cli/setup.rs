use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use codecanvas::gallery::StarterKind;
use codecanvas::model::{Color, Template};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codecanvas", bin_name = "codecanvas", version)]
#[command(about = "Template-aware notes and code snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $CODECANVAS_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new item
    #[command(alias = "n")]
    Create {
        /// Title of the item
        title: String,

        /// Content (read from stdin when omitted and stdin is not a terminal)
        #[arg(short, long)]
        content: Option<String>,

        /// classic, checklist, timeline, diagram, brainstorm or code
        #[arg(short, long, default_value = "classic", value_parser = parse_template)]
        template: Template,

        /// blue, green, orange, purple or red
        #[arg(long, default_value = "blue", value_parser = parse_color)]
        color: Color,
    },

    /// List the library
    #[command(alias = "ls")]
    List {
        /// Only show one template kind ("all" shows everything)
        #[arg(short, long, default_value = "all")]
        template: String,

        /// newest, oldest, title or stored
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Case-insensitive search in titles and content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the most recently added items
    Recent,

    /// View one or more items in full
    #[command(alias = "v")]
    View {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        /// Print the escaped HTML fragment instead of terminal output
        #[arg(long, conflicts_with = "card")]
        markup: bool,

        /// Print the escaped HTML summary card
        #[arg(long)]
        card: bool,
    },

    /// Edit fields of an item; unset fields are kept
    #[command(alias = "e")]
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long, value_parser = parse_template)]
        template: Option<Template>,

        #[arg(long, value_parser = parse_color)]
        color: Option<Color>,
    },

    /// Delete one or more items
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Delete every item (the theme is kept)
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show item counts
    Stats,

    /// Export all items to a JSON document
    Export {
        /// Directory to write into (defaults to export-dir, then the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import items from an export document
    Import {
        path: PathBuf,

        /// append, regenerate-ids or reject-collisions (defaults to import-policy)
        #[arg(long)]
        policy: Option<String>,
    },

    /// Show or set the theme
    Theme {
        /// dark or light
        value: Option<String>,
    },

    /// Browse starter templates
    Gallery {
        #[arg(value_enum)]
        kind: Option<GalleryKind>,

        /// Print the escaped HTML gallery tiles
        #[arg(long)]
        markup: bool,
    },

    /// Create an item from a starter template
    Use {
        /// Starter number as shown by `gallery`
        number: usize,

        /// Number within this gallery instead of the full list
        #[arg(short, long, value_enum)]
        kind: Option<GalleryKind>,

        #[arg(long, default_value = "blue", value_parser = parse_color)]
        color: Color,
    },

    /// Show or set configuration
    Config {
        /// import-policy, recent-limit or export-dir
        key: Option<String>,

        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GalleryKind {
    Notes,
    Code,
}

impl From<GalleryKind> for StarterKind {
    fn from(kind: GalleryKind) -> Self {
        match kind {
            GalleryKind::Notes => StarterKind::Note,
            GalleryKind::Code => StarterKind::Code,
        }
    }
}

fn parse_template(s: &str) -> Result<Template, String> {
    Template::from_known(s).ok_or_else(|| {
        format!(
            "unknown template '{}' (expected classic, checklist, timeline, diagram, brainstorm or code)",
            s
        )
    })
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_known(s).ok_or_else(|| {
        format!(
            "unknown color '{}' (expected blue, green, orange, purple or red)",
            s
        )
    })
}
