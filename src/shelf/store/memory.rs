use super::{decode_books, encode_books, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::io;

/// Holds the encoded document in memory, exactly as `FileStore` would write it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    content: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw document text, malformed or not.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with an IO error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        match &self.content {
            Some(content) => decode_books(content.as_bytes()).map(Some),
            None => Ok(None),
        }
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "writes disabled",
            )));
        }
        self.content = Some(encode_books(books)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    /// Builds a store whose document already holds the given books.
    #[derive(Default)]
    pub struct StoreFixture {
        books: Vec<Book>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_book(mut self, id: u32, title: &str, author: &str, year: i32) -> Self {
            self.books.push(Book::new(id, title, author, year));
            self
        }

        pub fn with_checked_out_book(
            mut self,
            id: u32,
            title: &str,
            author: &str,
            year: i32,
        ) -> Self {
            let mut book = Book::new(id, title, author, year);
            book.status = Status::CheckedOut;
            self.books.push(book);
            self
        }

        pub fn with_books(mut self, count: u32) -> Self {
            let start = self.books.iter().map(|b| b.id).max().unwrap_or(0);
            for i in 1..=count {
                let id = start + i;
                self.books.push(Book::new(
                    id,
                    format!("Test Book {}", id),
                    format!("Author {}", id),
                    1900 + id as i32,
                ));
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            let content = encode_books(&self.books).unwrap();
            InMemoryStore::with_content(content)
        }
    }
}
