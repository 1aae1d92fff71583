use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::store::DataStore;

/// `list`: every deck with its card count.
pub fn decks<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let decks = library.deck_summaries()?;
    let message = if decks.is_empty() {
        CmdMessage::info("No decks yet. Create one with adddeck NAME.")
    } else {
        CmdMessage::info(format!("{} decks listed!", decks.len()))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_decks(decks))
}

/// `listtags`: deck names only, one message per deck.
pub fn deck_names<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let decks = library.deck_summaries()?;
    let mut result = CmdResult::default();
    if decks.is_empty() {
        result.add_message(CmdMessage::info("No decks yet."));
    }
    for deck in &decks {
        result.add_message(CmdMessage::info(deck.name.clone()));
    }
    Ok(result.with_listed_decks(decks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_decks_in_creation_order_with_counts() {
        let lib = Library::new(
            StoreFixture::new()
                .with_cards("spanish", 3)
                .with_deck("empty")
                .store,
        );
        let result = decks(&lib).unwrap();
        let rows: Vec<_> = result
            .listed_decks
            .iter()
            .map(|d| (d.name.as_str(), d.card_count))
            .collect();
        assert_eq!(rows, vec![("spanish", 3), ("empty", 0)]);
        assert_eq!(result.feedback(), Some("2 decks listed!"));
    }

    #[test]
    fn deck_names_become_messages() {
        let lib = Library::new(StoreFixture::new().with_deck("a").with_deck("b").store);
        let result = deck_names(&lib).unwrap();
        let names: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn empty_library_says_so() {
        let lib = Library::new(StoreFixture::new().store);
        assert!(decks(&lib).unwrap().listed_decks.is_empty());
        assert_eq!(deck_names(&lib).unwrap().feedback(), Some("No decks yet."));
    }
}
