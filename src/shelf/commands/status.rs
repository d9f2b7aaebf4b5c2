use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Status;
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(catalog: &mut Catalog<S>, id: u32, status: Status) -> Result<CmdResult> {
    let pos = catalog.position(id).ok_or(ShelfError::BookNotFound(id))?;

    let mut books = catalog.books().to_vec();
    books[pos].status = status;
    let updated = books[pos].clone();
    catalog.commit(books)?;

    info!("book {} status set to {}", id, status);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Book {} status changed to '{}'.",
            id, status
        )))
        .with_affected_books(vec![updated]))
}
