use super::{decode_books, encode_books, DataStore};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A catalog persisted as one JSON file.
///
/// Every save rewrites the whole file through a temp file and a rename, so a
/// crash mid-write leaves either the old or the new document, never a
/// truncated one.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("library.json");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ShelfError::Io(e)),
        };
        decode_books(&content).map(Some)
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content = encode_books(books)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("library.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = setup();
        assert!(store.load_books().unwrap().is_none());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let (_dir, mut store) = setup();
        let mut second = Book::new(7, "Foo", "Bar", 2000);
        second.status = Status::CheckedOut;
        let books = vec![second, Book::new(1, "Dune", "Herbert", 1965)];

        store.save_books(&books).unwrap();
        assert_eq!(store.load_books().unwrap(), Some(books));
    }

    #[test]
    fn save_overwrites_and_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store
            .save_books(&[Book::new(1, "A", "B", 1), Book::new(2, "C", "D", 2)])
            .unwrap();
        store.save_books(&[Book::new(3, "E", "F", 3)]).unwrap();

        let loaded = store.load_books().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 3);

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("books.json");
        let mut store = FileStore::new(path);
        store.save_books(&[]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.load_books(),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn non_utf8_file_is_a_serialization_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            store.load_books(),
            Err(ShelfError::Serialization(_))
        ));
    }
}
