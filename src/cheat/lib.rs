//! # Cheat Architecture
//!
//! Cheat is a **UI-agnostic cheat sheet library** with a thin CLI client.
//! The binary is the only place that knows about stdout/stderr, interactive
//! prompts, and exit codes; everything from [`api`] inward takes regular
//! Rust arguments and returns structured `Result` values.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)   argument parsing, printing, terminal I/O
//!          │
//! API (api.rs)              thin facade, one method per operation
//!          │
//! Commands (commands/)      business logic: search, add, delete
//!          │
//! Storage (store/)          RecordStore trait; CsvStore + InMemoryStore
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, canonical field order)
//! - [`render`]: Table rendering of record sets
//! - [`prompt`]: Injectable line-input capability for interactive flows
//! - [`error`]: Error types
//!
//! ## Testing Strategy
//!
//! Commands carry the bulk of the unit tests, running against
//! `InMemoryStore`. The file store is tested against temp directories, and
//! the full CLI (including the interactive flows, driven over piped stdin)
//! is covered by end-to-end tests in `tests/`.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod prompt;
pub mod render;
pub mod store;
