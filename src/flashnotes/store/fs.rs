use super::{DataStore, Document};
use crate::error::{FlashnotesError, Result};
use crate::model::Flashcard;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON-file storage. Every mutation is a load, edit, save cycle so the file is the
/// single source of truth; a failed edit leaves the file untouched.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }
        let content = fs::read_to_string(&self.path).map_err(FlashnotesError::Io)?;
        if content.trim().is_empty() {
            return Ok(Document::default());
        }
        let doc = serde_json::from_str(&content).map_err(FlashnotesError::Serialization)?;
        Ok(doc)
    }

    fn save(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FlashnotesError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(doc).map_err(FlashnotesError::Serialization)?;
        fs::write(&self.path, content).map_err(FlashnotesError::Io)?;
        debug!(path = %self.path.display(), decks = doc.decks.len(), "saved flashcards");
        Ok(())
    }

    fn update<T>(&mut self, edit: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut doc = self.load()?;
        let out = edit(&mut doc)?;
        self.save(&doc)?;
        Ok(out)
    }
}

impl DataStore for FileStore {
    fn list_decks(&self) -> Result<Vec<String>> {
        Ok(self.load()?.deck_names())
    }

    fn save_deck(&mut self, name: &str) -> Result<()> {
        self.update(|doc| doc.add_deck(name))
    }

    fn delete_deck(&mut self, name: &str) -> Result<usize> {
        let removed = self.update(|doc| doc.remove_deck(name))?;
        info!(deck = name, cards = removed, "deleted deck");
        Ok(removed)
    }

    fn list_cards(&self, deck: Option<&str>) -> Result<Vec<Flashcard>> {
        self.load()?.cards(deck)
    }

    fn save_card(&mut self, card: &Flashcard) -> Result<()> {
        self.update(|doc| doc.add_card(card))
    }

    fn replace_card(&mut self, target: &Flashcard, edited: &Flashcard) -> Result<()> {
        self.update(|doc| doc.replace_card(target, edited))
    }

    fn delete_card(&mut self, card: &Flashcard) -> Result<()> {
        self.update(|doc| doc.remove_card(card))
    }

    fn clear(&mut self) -> Result<()> {
        self.update(|doc| {
            doc.clear();
            Ok(())
        })
    }
}
