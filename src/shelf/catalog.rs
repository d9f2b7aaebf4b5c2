//! # Catalog
//!
//! [`Catalog`] owns the ordered collection of books and keeps it in step with
//! its [`DataStore`]. The in-memory collection only ever reflects the last
//! successful load or the last successful save: mutations are staged on a copy,
//! persisted, and only then committed.
//!
//! ## Load Policy
//!
//! - A missing store starts an empty catalog; the file is created on the
//!   first mutation.
//! - A malformed store is discarded wholesale: the catalog starts empty and
//!   the next save overwrites the bad document. No partial recovery is tried.
//! - Any other read failure is returned to the caller.

use crate::commands::CmdMessage;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use crate::store::DataStore;
use log::{debug, warn};

/// What `load` found in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store held this many books.
    Loaded(usize),
    /// No store yet; one will be created on the first save.
    Created,
    /// The store could not be parsed and was reset to empty.
    Corrupt,
}

impl LoadOutcome {
    /// The note a UI should show for this outcome, if any.
    pub fn message(&self, location: &str) -> Option<CmdMessage> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Created => Some(CmdMessage::info(format!(
                "No catalog found at {}. A new one will be created.",
                location
            ))),
            LoadOutcome::Corrupt => Some(CmdMessage::warning(format!(
                "Catalog at {} contains invalid data. Starting with an empty catalog.",
                location
            ))),
        }
    }
}

pub struct Catalog<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> Catalog<S> {
    /// Build a catalog over `store` and load it.
    pub fn open(store: S) -> Result<(Self, LoadOutcome)> {
        let mut catalog = Self {
            store,
            books: Vec::new(),
        };
        let outcome = catalog.load()?;
        Ok((catalog, outcome))
    }

    pub fn load(&mut self) -> Result<LoadOutcome> {
        let location = self.store.location();
        match self.store.load_books() {
            Ok(Some(books)) => {
                debug!("loaded {} books from {}", books.len(), location);
                let count = books.len();
                self.books = books;
                Ok(LoadOutcome::Loaded(count))
            }
            Ok(None) => {
                debug!("no catalog at {}, starting empty", location);
                self.books = Vec::new();
                Ok(LoadOutcome::Created)
            }
            Err(ShelfError::Serialization(e)) => {
                warn!("discarding malformed catalog at {}: {}", location, e);
                self.books = Vec::new();
                Ok(LoadOutcome::Corrupt)
            }
            Err(e) => Err(e),
        }
    }

    /// Write the whole collection to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save_books(&self.books)?;
        debug!(
            "saved {} books to {}",
            self.books.len(),
            self.store.location()
        );
        Ok(())
    }

    /// Persist `books` and, only if that succeeds, make it the current collection.
    pub(crate) fn commit(&mut self, books: Vec<Book>) -> Result<()> {
        self.store.save_books(&books)?;
        debug!("saved {} books to {}", books.len(), self.store.location());
        self.books = books;
        Ok(())
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub(crate) fn position(&self, id: u32) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// One past the highest id in use, so ids freed by removals never collide.
    pub fn next_id(&self) -> Result<u32> {
        self.books
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| ShelfError::Store("no ids left".to_string()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn location(&self) -> String {
        self.store.location()
    }
}
