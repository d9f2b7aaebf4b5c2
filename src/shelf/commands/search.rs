use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Books whose title or author contains `query` (case-insensitive), or whose
/// year is exactly `query`. Catalog order is kept.
pub fn run<S: DataStore>(catalog: &Catalog<S>, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = catalog
        .books()
        .iter()
        .filter(|book| book.matches(query))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn catalog() -> Catalog<InMemoryStore> {
        let store = StoreFixture::new()
            .with_book(1, "Dune", "Frank Herbert", 1965)
            .with_book(2, "Foo", "Bar", 2000)
            .with_book(3, "Children of Dune", "Frank Herbert", 1976)
            .with_book(4, "2000 Leagues", "Verne", 1870)
            .build();
        Catalog::open(store).unwrap().0
    }

    #[test]
    fn matches_title_case_insensitively_in_order() {
        let result = run(&catalog(), "dune").unwrap();
        let ids: Vec<u32> = result.listed_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn matches_author() {
        let result = run(&catalog(), "HERBERT").unwrap();
        assert_eq!(result.listed_books.len(), 2);
    }

    #[test]
    fn year_matches_exactly_or_through_title() {
        let result = run(&catalog(), "2000").unwrap();
        let ids: Vec<u32> = result.listed_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 4]);

        let partial = run(&catalog(), "197").unwrap();
        assert!(partial.listed_books.is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let result = run(&catalog(), "Asimov").unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books found.");
    }

    #[test]
    fn does_not_touch_the_store() {
        let catalog = catalog();
        let before = catalog.books().to_vec();
        run(&catalog, "Dune").unwrap();
        assert_eq!(catalog.books(), before.as_slice());
        assert_eq!(catalog.store().saves(), 0);
    }
}
