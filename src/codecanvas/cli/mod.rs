//! # CLI Layer
//!
//! One possible client of the codecanvas library. This is the only place
//! that parses arguments, writes to the terminal or picks an exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: builds an `Intent` per subcommand, dispatches it, prints the result
//! - `render`: turns `CmdResult` pieces into terminal text
//! - `styles`: color swatches shared by the renderers

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
