//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the catalog and wherever its
//! books live. A store only knows how to read and write the whole collection;
//! it has no notion of ids, searching or statuses.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//! - [`memory::InMemoryStore`]: Keeps the encoded document in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "title": "Dune",
//!         "author": "Herbert",
//!         "year": 1965,
//!         "status": "available"
//!     }
//! ]
//! ```
//!
//! Both stores share [`encode_books`] and [`decode_books`], so a document that
//! round-trips through one round-trips through the other.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

pub mod fs;
pub mod memory;

const INDENT: &[u8] = b"    ";

/// Abstract interface for book storage.
pub trait DataStore {
    /// Read the whole collection. `Ok(None)` means the store does not exist yet.
    /// Malformed content is reported as [`ShelfError::Serialization`].
    fn load_books(&self) -> Result<Option<Vec<Book>>>;

    /// Replace the whole collection.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    /// Human readable location, used in messages and logs.
    fn location(&self) -> String;
}

pub fn encode_books(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser).map_err(ShelfError::Serialization)?;
    String::from_utf8(buf).map_err(|e| ShelfError::Store(e.to_string()))
}

pub fn decode_books(content: &[u8]) -> Result<Vec<Book>> {
    serde_json::from_slice(content).map_err(ShelfError::Serialization)
}
