//! # Template Rendering
//!
//! Pure functions from `(template, content)` to display output. Nothing here
//! touches a store or does I/O, and no input makes rendering fail: unknown
//! templates render like `classic`, empty content renders as zero entries.
//!
//! Rendering happens in two steps:
//!
//! 1. [`fragments::render`] / [`preview::preview`] split raw content into
//!    structured fragments ([`Rendered`], [`Preview`]). Any presentation layer
//!    can draw these (the CLI draws them to the terminal).
//! 2. [`markup`] turns fragments and whole items into HTML fragments using the
//!    card/preview class names. All user text passes through
//!    [`escape::escape_html`] on the way out.

pub mod escape;
pub mod fragments;
pub mod markup;
pub mod preview;

pub use escape::escape_html;
pub use fragments::{render, ChecklistEntry, Rendered};
pub use markup::{render_card, render_item, render_starter};
pub use preview::{clip, gallery_preview, preview, Preview};
