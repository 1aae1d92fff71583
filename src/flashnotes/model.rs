use serde::{Deserialize, Serialize};
use std::fmt;

/// A question/answer pair belonging to one deck.
///
/// There is no surrogate key: two flashcards are the same card when question, answer
/// and deck are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub deck: String,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        deck: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            deck: deck.into(),
        }
    }

    /// Case-insensitive match of any keyword against question or answer.
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        let question = self.question.to_lowercase();
        let answer = self.answer.to_lowercase();
        keywords.iter().any(|k| {
            let k = k.to_lowercase();
            question.contains(&k) || answer.contains(&k)
        })
    }
}

/// Navigational context of the application, independent of whether a review is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Home,
    DeckDetail { deck: String },
}

impl Mode {
    pub fn deck(deck: impl Into<String>) -> Self {
        Mode::DeckDetail { deck: deck.into() }
    }

    pub fn open_deck(&self) -> Option<&str> {
        match self {
            Mode::Home => None,
            Mode::DeckDetail { deck } => Some(deck),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Home => write!(f, "home"),
            Mode::DeckDetail { deck } => write!(f, "deck {}", deck),
        }
    }
}

/// Which side of a flashcard is showing during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    Question,
    Answer,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::Question => Face::Answer,
            Face::Answer => Face::Question,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_full_triple() {
        let a = Flashcard::new("Q", "A", "math");
        assert_eq!(a, Flashcard::new("Q", "A", "math"));
        assert_ne!(a, Flashcard::new("Q", "A", "physics"));
        assert_ne!(a, Flashcard::new("Q", "B", "math"));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let card = Flashcard::new("Capital of France?", "Paris", "geo");
        assert!(card.matches_any(&["paris".into()]));
        assert!(card.matches_any(&["nope".into(), "CAPITAL".into()]));
        assert!(!card.matches_any(&["berlin".into()]));
    }

    #[test]
    fn mode_reports_open_deck() {
        assert_eq!(Mode::Home.open_deck(), None);
        assert_eq!(Mode::deck("math").open_deck(), Some("math"));
    }

    #[test]
    fn face_flips_back_and_forth() {
        assert_eq!(Face::default().flipped(), Face::Answer);
        assert_eq!(Face::Answer.flipped(), Face::Question);
    }
}
