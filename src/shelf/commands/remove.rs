use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(catalog: &mut Catalog<S>, id: u32) -> Result<CmdResult> {
    let pos = catalog.position(id).ok_or(ShelfError::BookNotFound(id))?;

    let mut books = catalog.books().to_vec();
    let removed = books.remove(pos);
    catalog.commit(books)?;

    info!("removed book {} ({})", removed.id, removed.title);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Book {} removed.", id)))
        .with_affected_books(vec![removed]))
}
