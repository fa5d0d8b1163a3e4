//! # Codecanvas Architecture
//!
//! Codecanvas is a **UI-agnostic library** for organizing notes and code
//! snippets as template-shaped items (checklists, timelines, diagrams,
//! brainstorms, code). The command-line binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Intent
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, dispatch.rs)                            │
//! │  - Thin facade over commands, one method per intent         │
//! │  - Fills in configured defaults                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KvBackend trait: FsBackend (production), MemBackend      │
//! │  - ItemStore and PreferenceStore, one slot each             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure helpers sit beside the layers: [`render`] turns an item into escaped
//! markup or structured fragments, [`codec`] reads and writes the portable
//! export document.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through the `log` facade; the binary decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`dispatch`]: Intent table mapping UI actions to API calls
//! - [`commands`]: Business logic for each command
//! - [`store`]: Key/value backends and the two stores built on them
//! - [`model`]: Core data types (`Item`, `Template`, `Color`, `Theme`)
//! - [`render`]: Template renderer and HTML escaping
//! - [`codec`]: Import/export document format
//! - [`gallery`]: Built-in starter templates
//! - [`config`]: Configuration management
//! - [`logging`]: `env_logger` setup for binaries
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;
