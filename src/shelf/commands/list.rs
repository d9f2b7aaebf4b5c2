use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("Catalog is empty."));
    }
    Ok(result.with_listed_books(catalog.books().to_vec()))
}
