use super::{DataStore, Document};
use crate::error::Result;
use crate::model::Flashcard;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    doc: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn list_decks(&self) -> Result<Vec<String>> {
        Ok(self.doc.deck_names())
    }

    fn save_deck(&mut self, name: &str) -> Result<()> {
        self.doc.add_deck(name)
    }

    fn delete_deck(&mut self, name: &str) -> Result<usize> {
        self.doc.remove_deck(name)
    }

    fn list_cards(&self, deck: Option<&str>) -> Result<Vec<Flashcard>> {
        self.doc.cards(deck)
    }

    fn save_card(&mut self, card: &Flashcard) -> Result<()> {
        self.doc.add_card(card)
    }

    fn replace_card(&mut self, target: &Flashcard, edited: &Flashcard) -> Result<()> {
        self.doc.replace_card(target, edited)
    }

    fn delete_card(&mut self, card: &Flashcard) -> Result<()> {
        self.doc.remove_card(card)
    }

    fn clear(&mut self) -> Result<()> {
        self.doc.clear();
        Ok(())
    }
}

// --- Test Fixtures ---
