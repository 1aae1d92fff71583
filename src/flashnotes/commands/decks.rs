//! Deck navigation and management: `adddeck`, `deletedeck`, `enterdeck`, `home`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashnotesError, Result};
use crate::library::{CardFilter, Library};
use crate::model::Mode;
use crate::store::DataStore;

pub fn add<S: DataStore>(library: &mut Library<S>, name: String) -> Result<CmdResult> {
    library.add_deck(&name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("New deck added: {}", name)))
        .with_listed_decks(library.deck_summaries()?))
}

pub fn delete<S: DataStore>(library: &mut Library<S>, name: String) -> Result<CmdResult> {
    let removed = library.remove_deck(&name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Deleted deck: {} ({} flashcards)",
            name, removed
        )))
        .with_listed_decks(library.deck_summaries()?))
}

/// Open a deck. The caller switches to [`Mode::DeckDetail`] from `mode_change`.
pub fn enter<S: DataStore>(library: &mut Library<S>, name: String) -> Result<CmdResult> {
    if !library.has_deck(&name)? {
        return Err(FlashnotesError::DeckNotFound(name));
    }
    library.set_filter(CardFilter::Deck(name.clone()));
    let cards = library.indexed_visible()?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Entered deck: {} ({} flashcards)",
            name,
            cards.len()
        )))
        .with_listed_cards(cards)
        .with_mode_change(Mode::deck(name)))
}

pub fn home<S: DataStore>(library: &mut Library<S>) -> Result<CmdResult> {
    library.set_filter(CardFilter::All);
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Back to the deck list."))
        .with_listed_decks(library.deck_summaries()?)
        .with_mode_change(Mode::Home))
}
