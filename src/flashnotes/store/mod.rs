//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts persistence of decks and their flashcards, so the
//! library and the commands never care where the data lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//! - [`memory::InMemoryStore`]: No persistence; used by tests and as a scratch store
//!
//! Both keep their data as a [`Document`] and share its editing rules, so they behave
//! identically apart from durability.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "decks": [
//!     { "name": "Spanish", "cards": [ { "question": "hola", "answer": "hello" } ] }
//!   ]
//! }
//! ```
//!
//! Deck order and card order within a deck are insertion order and are stable; the
//! visible indexes users type (`delete 2`) depend on it.

use crate::decks::validate_deck_name;
use crate::error::{FlashnotesError, Result};
use crate::model::Flashcard;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Abstract interface for flashcard storage.
pub trait DataStore {
    /// Deck names in insertion order
    fn list_decks(&self) -> Result<Vec<String>>;

    /// Create an empty deck
    fn save_deck(&mut self, name: &str) -> Result<()>;

    /// Delete a deck and all of its cards, returning how many cards went with it
    fn delete_deck(&mut self, name: &str) -> Result<usize>;

    /// Cards of one deck, or of every deck when `deck` is `None`
    fn list_cards(&self, deck: Option<&str>) -> Result<Vec<Flashcard>>;

    /// Append a card to its deck
    fn save_card(&mut self, card: &Flashcard) -> Result<()>;

    /// Replace `target` in place with `edited`
    fn replace_card(&mut self, target: &Flashcard, edited: &Flashcard) -> Result<()>;

    fn delete_card(&mut self, card: &Flashcard) -> Result<()>;

    /// Remove every deck and card
    fn clear(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub decks: Vec<DeckRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<CardRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub question: String,
    pub answer: String,
}

impl CardRecord {
    fn from_card(card: &Flashcard) -> Self {
        Self {
            question: card.question.clone(),
            answer: card.answer.clone(),
        }
    }

    fn to_card(&self, deck: &str) -> Flashcard {
        Flashcard::new(self.question.clone(), self.answer.clone(), deck)
    }

    fn is(&self, card: &Flashcard) -> bool {
        self.question == card.question && self.answer == card.answer
    }
}

impl Document {
    fn deck(&self, name: &str) -> Result<&DeckRecord> {
        self.decks
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| FlashnotesError::DeckNotFound(name.to_string()))
    }

    fn deck_mut(&mut self, name: &str) -> Result<&mut DeckRecord> {
        self.decks
            .iter_mut()
            .find(|d| d.name == name)
            .ok_or_else(|| FlashnotesError::DeckNotFound(name.to_string()))
    }

    pub fn deck_names(&self) -> Vec<String> {
        self.decks.iter().map(|d| d.name.clone()).collect()
    }

    pub fn add_deck(&mut self, name: &str) -> Result<()> {
        validate_deck_name(name)?;
        if self.decks.iter().any(|d| d.name == name) {
            return Err(FlashnotesError::DuplicateDeck(name.to_string()));
        }
        self.decks.push(DeckRecord {
            name: name.to_string(),
            cards: Vec::new(),
        });
        Ok(())
    }

    pub fn remove_deck(&mut self, name: &str) -> Result<usize> {
        let pos = self
            .decks
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| FlashnotesError::DeckNotFound(name.to_string()))?;
        Ok(self.decks.remove(pos).cards.len())
    }

    pub fn cards(&self, deck: Option<&str>) -> Result<Vec<Flashcard>> {
        match deck {
            Some(name) => {
                let deck = self.deck(name)?;
                Ok(deck.cards.iter().map(|c| c.to_card(&deck.name)).collect())
            }
            None => Ok(self
                .decks
                .iter()
                .flat_map(|d| d.cards.iter().map(|c| c.to_card(&d.name)))
                .collect()),
        }
    }

    pub fn add_card(&mut self, card: &Flashcard) -> Result<()> {
        let deck = self.deck_mut(&card.deck)?;
        if deck.cards.iter().any(|c| c.is(card)) {
            return Err(FlashnotesError::DuplicateFlashcard(card.deck.clone()));
        }
        deck.cards.push(CardRecord::from_card(card));
        Ok(())
    }

    pub fn replace_card(&mut self, target: &Flashcard, edited: &Flashcard) -> Result<()> {
        if target.deck != edited.deck {
            return Err(FlashnotesError::Store(
                "a flashcard cannot be moved to another deck".to_string(),
            ));
        }
        let deck = self.deck_mut(&target.deck)?;
        let pos = deck
            .cards
            .iter()
            .position(|c| c.is(target))
            .ok_or_else(|| FlashnotesError::Store("flashcard not found".to_string()))?;
        if target != edited && deck.cards.iter().any(|c| c.is(edited)) {
            return Err(FlashnotesError::DuplicateFlashcard(edited.deck.clone()));
        }
        deck.cards[pos] = CardRecord::from_card(edited);
        Ok(())
    }

    pub fn remove_card(&mut self, card: &Flashcard) -> Result<()> {
        let deck = self.deck_mut(&card.deck)?;
        let pos = deck
            .cards
            .iter()
            .position(|c| c.is(card))
            .ok_or_else(|| FlashnotesError::Store("flashcard not found".to_string()))?;
        deck.cards.remove(pos);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.decks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn doc_with(deck: &str, cards: &[(&str, &str)]) -> Document {
        let mut doc = Document::default();
        doc.add_deck(deck).unwrap();
        for (q, a) in cards {
            doc.add_card(&Flashcard::new(*q, *a, deck)).unwrap();
        }
        doc
    }

    #[test]
    fn cards_keep_insertion_order() {
        let doc = doc_with("math", &[("1+1", "2"), ("2+2", "4"), ("3+3", "6")]);
        let questions: Vec<_> = doc
            .cards(Some("math"))
            .unwrap()
            .into_iter()
            .map(|c| c.question)
            .collect();
        assert_eq!(questions, vec!["1+1", "2+2", "3+3"]);
    }

    #[test]
    fn all_cards_span_decks() {
        let mut doc = doc_with("math", &[("1+1", "2")]);
        doc.add_deck("geo").unwrap();
        doc.add_card(&Flashcard::new("Capital of Peru", "Lima", "geo"))
            .unwrap();
        let all = doc.cards(None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].deck, "geo");
    }

    #[test]
    fn duplicate_deck_is_rejected() {
        let mut doc = doc_with("math", &[]);
        let err = doc.add_deck("math").unwrap_err();
        assert!(matches!(err, FlashnotesError::DuplicateDeck(name) if name == "math"));
    }

    #[test]
    fn invalid_deck_name_is_rejected() {
        let mut doc = Document::default();
        let err = doc.add_deck("../escape").unwrap_err();
        assert!(matches!(err, FlashnotesError::InvalidDeckName(_)));
        assert!(doc.decks.is_empty());
    }

    #[test]
    fn duplicate_card_is_rejected() {
        let mut doc = doc_with("math", &[("1+1", "2")]);
        let err = doc.add_card(&Flashcard::new("1+1", "2", "math")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Command);
    }

    #[test]
    fn same_card_in_another_deck_is_fine() {
        let mut doc = doc_with("math", &[("1+1", "2")]);
        doc.add_deck("review").unwrap();
        doc.add_card(&Flashcard::new("1+1", "2", "review")).unwrap();
        assert_eq!(doc.cards(None).unwrap().len(), 2);
    }

    #[test]
    fn card_for_unknown_deck_is_rejected() {
        let mut doc = Document::default();
        let err = doc.add_card(&Flashcard::new("q", "a", "nope")).unwrap_err();
        assert!(matches!(err, FlashnotesError::DeckNotFound(_)));
    }

    #[test]
    fn replace_keeps_position() {
        let mut doc = doc_with("math", &[("1+1", "2"), ("2+2", "5")]);
        doc.replace_card(
            &Flashcard::new("2+2", "5", "math"),
            &Flashcard::new("2+2", "4", "math"),
        )
        .unwrap();
        let cards = doc.cards(Some("math")).unwrap();
        assert_eq!(cards[1].answer, "4");
    }

    #[test]
    fn replace_onto_existing_card_is_rejected() {
        let mut doc = doc_with("math", &[("1+1", "2"), ("2+2", "4")]);
        let err = doc
            .replace_card(
                &Flashcard::new("2+2", "4", "math"),
                &Flashcard::new("1+1", "2", "math"),
            )
            .unwrap_err();
        assert!(matches!(err, FlashnotesError::DuplicateFlashcard(_)));
    }

    #[test]
    fn replace_with_itself_is_accepted() {
        let mut doc = doc_with("math", &[("1+1", "2")]);
        let card = Flashcard::new("1+1", "2", "math");
        doc.replace_card(&card, &card).unwrap();
    }

    #[test]
    fn removing_deck_reports_card_count() {
        let mut doc = doc_with("math", &[("1+1", "2"), ("2+2", "4")]);
        assert_eq!(doc.remove_deck("math").unwrap(), 2);
        assert!(doc.deck_names().is_empty());
    }

    #[test]
    fn removing_missing_card_is_a_store_error() {
        let mut doc = doc_with("math", &[]);
        let err = doc
            .remove_card(&Flashcard::new("q", "a", "math"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
