use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(
    catalog: &mut Catalog<S>,
    title: &str,
    author: &str,
    year: i32,
) -> Result<CmdResult> {
    let book = Book::new(catalog.next_id()?, title, author, year);

    let mut books = catalog.books().to_vec();
    books.push(book.clone());
    catalog.commit(books)?;

    info!("added book {} ({})", book.id, book.title);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Book '{}' added (id {}).",
            book.title, book.id
        )))
        .with_affected_books(vec![book]))
}
