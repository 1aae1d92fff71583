//! # Library
//!
//! The library is the flashcard collection as commands see it: a [`DataStore`] plus a
//! [`CardFilter`] that decides which cards are currently *visible*. The visible
//! collection is what users index into (`delete 2`), what `find` narrows and what a
//! review session snapshots.
//!
//! The filter is computed on every read, so it never goes stale after a store write.

use crate::error::Result;
use crate::model::Flashcard;
use crate::store::DataStore;
use serde::Serialize;
use tracing::debug;

/// Which flashcards are visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardFilter {
    #[default]
    All,
    Deck(String),
    /// Cards of `deck` whose question or answer contains any keyword
    Keywords { deck: String, keywords: Vec<String> },
}

impl CardFilter {
    fn deck(&self) -> Option<&str> {
        match self {
            CardFilter::All => None,
            CardFilter::Deck(deck) | CardFilter::Keywords { deck, .. } => Some(deck),
        }
    }

    pub fn accepts(&self, card: &Flashcard) -> bool {
        match self {
            CardFilter::All => true,
            CardFilter::Deck(deck) => card.deck == *deck,
            CardFilter::Keywords { deck, keywords } => {
                card.deck == *deck && card.matches_any(keywords)
            }
        }
    }
}

/// A visible flashcard paired with the 1-based index users refer to it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCard {
    pub index: usize,
    pub card: Flashcard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub name: String,
    pub card_count: usize,
}

pub struct Library<S: DataStore> {
    store: S,
    filter: CardFilter,
}

impl<S: DataStore> Library<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            filter: CardFilter::All,
        }
    }

    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CardFilter) {
        debug!(?filter, "visible collection filter changed");
        self.filter = filter;
    }

    pub fn visible_collection(&self) -> Result<Vec<Flashcard>> {
        // A deck that vanished from under the filter shows nothing rather than failing
        let cards = match self.filter.deck() {
            Some(deck) if !self.has_deck(deck)? => Vec::new(),
            deck => self.store.list_cards(deck)?,
        };
        Ok(cards
            .into_iter()
            .filter(|c| self.filter.accepts(c))
            .collect())
    }

    pub fn visible_count(&self) -> Result<usize> {
        Ok(self.visible_collection()?.len())
    }

    pub fn indexed_visible(&self) -> Result<Vec<DisplayCard>> {
        Ok(self
            .visible_collection()?
            .into_iter()
            .enumerate()
            .map(|(i, card)| DisplayCard { index: i + 1, card })
            .collect())
    }

    /// Resolve a 1-based visible index.
    pub fn visible_card(&self, index: usize) -> Result<Option<Flashcard>> {
        if index == 0 {
            return Ok(None);
        }
        Ok(self.visible_collection()?.into_iter().nth(index - 1))
    }

    pub fn has_deck(&self, name: &str) -> Result<bool> {
        Ok(self.store.list_decks()?.iter().any(|d| d == name))
    }

    pub fn deck_summaries(&self) -> Result<Vec<DeckSummary>> {
        let cards = self.store.list_cards(None)?;
        Ok(self
            .store
            .list_decks()?
            .into_iter()
            .map(|name| {
                let card_count = cards.iter().filter(|c| c.deck == name).count();
                DeckSummary { name, card_count }
            })
            .collect())
    }

    pub fn add_deck(&mut self, name: &str) -> Result<()> {
        self.store.save_deck(name)
    }

    pub fn remove_deck(&mut self, name: &str) -> Result<usize> {
        self.store.delete_deck(name)
    }

    pub fn add_flashcard(&mut self, card: &Flashcard) -> Result<()> {
        self.store.save_card(card)
    }

    pub fn remove_flashcard(&mut self, card: &Flashcard) -> Result<()> {
        self.store.delete_card(card)
    }

    pub fn replace_flashcard(&mut self, target: &Flashcard, edited: &Flashcard) -> Result<()> {
        self.store.replace_card(target, edited)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        self.filter = CardFilter::All;
        Ok(())
    }
}
