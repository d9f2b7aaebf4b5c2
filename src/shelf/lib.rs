//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book catalog library**. The interactive menu in
//! the binary is one client of it; nothing below the API layer knows about a
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, subcommands, input validation, rendering      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses raw status strings into `Status`                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, remove, search, list, status                        │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog + Storage (catalog.rs, store/)                     │
//! │  - In-memory `Vec<Book>` synchronized with a `DataStore`    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation rewrites the whole store before it becomes visible in
//! memory. The catalog assumes it is the only writer of its file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`catalog`]: The book collection and its load/save policy
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book` and `Status`
//! - [`config`]: Store path resolution and `config.json`
//! - [`logging`]: stderr logger bootstrap
//! - [`error`]: Error types
//! - `cli`: Menu loop, arguments and rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
