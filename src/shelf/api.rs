//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for every UI. It owns the
//! [`Catalog`], dispatches to the command modules and turns raw user input
//! (such as status strings) into typed values before any command runs.
//!
//! The API does no printing and holds no business logic: it returns
//! `Result<CmdResult>` and leaves presentation to the caller.
//!
//! `ShelfApi<S: DataStore>` is generic over the backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::Status;
use crate::store::DataStore;

pub struct ShelfApi<S: DataStore> {
    catalog: Catalog<S>,
}

impl<S: DataStore> ShelfApi<S> {
    /// Load the catalog behind `store`. The returned result carries the
    /// note about a missing or corrupt store, if any.
    pub fn open(store: S) -> Result<(Self, commands::CmdResult)> {
        let (catalog, outcome) = Catalog::open(store)?;
        let mut result = commands::CmdResult::default();
        if let Some(message) = outcome.message(&catalog.location()) {
            result.add_message(message);
        }
        Ok((Self { catalog }, result))
    }

    pub fn reload(&mut self) -> Result<LoadOutcome> {
        self.catalog.load()
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: i32,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, title, author, year)
    }

    pub fn remove_book(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.catalog, id)
    }

    pub fn search_books(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, query)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    /// The status is validated before the book is looked up, so an invalid
    /// value is reported the same way whether or not `id` exists.
    pub fn change_status(&mut self, id: u32, status: &str) -> Result<commands::CmdResult> {
        let status: Status = status.parse()?;
        commands::status::run(&mut self.catalog, id, status)
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }
}

pub use crate::catalog::LoadOutcome;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
