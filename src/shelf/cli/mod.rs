//! # CLI Behavior
//!
//! This is **one client** of the shelf library. It is the only place that
//! knows about stdin, stdout, exit codes and colors.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no subcommand opens the interactive menu:
//!
//! ```text
//! 1. Add a book
//! 2. Remove a book
//! 3. Search books
//! 4. List all books
//! 5. Change book status
//! 6. Exit
//! ```
//!
//! Year and id answers are re-asked until they parse as integers, so the
//! library only ever sees well-typed arguments. A missing id or an unknown
//! status is printed and the menu continues.
//!
//! ## Subcommands
//!
//! `add`, `remove`, `search`, `list` and `status` run a single operation
//! and exit, which makes the catalog scriptable. Here a missing id or an
//! unknown status is an error (exit code 1).
//!
//! ## Store Location
//!
//! `--store PATH`, then `SHELF_STORE`, then `store_path` in `config.json`,
//! then `library.json` in the platform data dir.

mod commands;
mod menu;
mod render;
mod setup;

pub use commands::run;
