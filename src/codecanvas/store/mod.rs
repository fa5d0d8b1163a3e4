//! # Storage Layer
//!
//! Persistence is split in two levels:
//!
//! - [`backend::KvBackend`]: raw key/value slots. This is the "how" of storage
//!   (a directory of files in production, a map in tests).
//! - [`item_store::ItemStore`] and [`preferences::PreferenceStore`]: the "what".
//!   Each owns one slot, keeps an in-memory copy, and rewrites its whole slot
//!   on every mutation before returning.
//!
//! ## Slots
//!
//! ```text
//! <data dir>/
//! ├── codeCanvasItems.json   # JSON array of every item, in store order
//! ├── codeCanvasTheme.json   # active theme string
//! └── config.json            # CanvasConfig (not a slot, see config.rs)
//! ```
//!
//! The two stores are independent: clearing items never touches the theme.

pub mod backend;
pub mod fs_backend;
pub mod item_store;
pub mod mem_backend;
pub mod preferences;

pub use backend::KvBackend;
pub use fs_backend::FsBackend;
pub use item_store::ItemStore;
pub use mem_backend::MemBackend;
pub use preferences::PreferenceStore;

/// Slot holding the items snapshot.
pub const ITEMS_KEY: &str = "codeCanvasItems";

/// Slot holding the theme preference.
pub const THEME_KEY: &str = "codeCanvasTheme";
