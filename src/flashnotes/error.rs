use crate::decks::DeckNameError;
use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_UNAVAILABLE_IN_REVIEW_MODE: &str =
    "This command is not available in review mode. Type endreview to leave the review first.";
pub const MESSAGE_ALREADY_IN_REVIEW_MODE: &str = "You are already in review mode.";
pub const MESSAGE_ILLEGAL_IN_HOME: &str = "Cannot call command in home screen.";
pub const MESSAGE_ILLEGAL_IN_DECK: &str = "Cannot call command in card screen.";

#[derive(Error, Debug)]
pub enum FlashnotesError {
    #[error("Invalid command format!\n{usage}")]
    MalformedInput { usage: &'static str },

    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error("{0}")]
    IllegalInMode(&'static str),

    #[error("{}", MESSAGE_ALREADY_IN_REVIEW_MODE)]
    AlreadyInReview,

    #[error("{reason}\n{usage}")]
    ArgumentParse {
        reason: String,
        usage: &'static str,
    },

    #[error("Cannot review an empty deck! Add cards using 'add q/QUESTION a/ANSWER' first.")]
    EmptyDeck,

    #[error("There are no more cards in this review. Type endreview to leave the review.")]
    ReviewExhausted,

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Deck already exists: {0}")]
    DuplicateDeck(String),

    #[error("This flashcard already exists in deck {0}")]
    DuplicateFlashcard(String),

    #[error("The flashcard index provided is invalid: {0}")]
    InvalidIndex(usize),

    #[error("Invalid deck name: {0}")]
    InvalidDeckName(#[from] DeckNameError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification of a [`FlashnotesError`], stable for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    UnknownCommand,
    RejectedIllegalInMode,
    RejectedAlreadyInReview,
    ArgumentParse,
    EmptyDeck,
    ReviewExhausted,
    /// A well-formed command whose preconditions do not hold (unknown deck, duplicates, ...)
    Command,
    Storage,
}

impl FlashnotesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlashnotesError::MalformedInput { .. } => ErrorKind::MalformedInput,
            FlashnotesError::UnknownCommand => ErrorKind::UnknownCommand,
            FlashnotesError::IllegalInMode(_) => ErrorKind::RejectedIllegalInMode,
            FlashnotesError::AlreadyInReview => ErrorKind::RejectedAlreadyInReview,
            FlashnotesError::ArgumentParse { .. } => ErrorKind::ArgumentParse,
            FlashnotesError::EmptyDeck => ErrorKind::EmptyDeck,
            FlashnotesError::ReviewExhausted => ErrorKind::ReviewExhausted,
            FlashnotesError::DeckNotFound(_)
            | FlashnotesError::DuplicateDeck(_)
            | FlashnotesError::DuplicateFlashcard(_)
            | FlashnotesError::InvalidIndex(_)
            | FlashnotesError::InvalidDeckName(_) => ErrorKind::Command,
            FlashnotesError::Io(_)
            | FlashnotesError::Serialization(_)
            | FlashnotesError::Store(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn parse(reason: impl Into<String>, usage: &'static str) -> Self {
        FlashnotesError::ArgumentParse {
            reason: reason.into(),
            usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlashnotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_rejections_have_distinct_messages() {
        let already = FlashnotesError::AlreadyInReview;
        let unavailable = FlashnotesError::IllegalInMode(MESSAGE_UNAVAILABLE_IN_REVIEW_MODE);
        assert_ne!(already.to_string(), unavailable.to_string());
        assert_ne!(already.kind(), unavailable.kind());
    }

    #[test]
    fn gate_rejections_render_their_message_constants() {
        assert_eq!(FlashnotesError::UnknownCommand.to_string(), MESSAGE_UNKNOWN_COMMAND);
        assert_eq!(
            FlashnotesError::AlreadyInReview.to_string(),
            MESSAGE_ALREADY_IN_REVIEW_MODE
        );
    }

    #[test]
    fn argument_errors_carry_usage() {
        let err = FlashnotesError::parse(MESSAGE_INVALID_COMMAND_FORMAT, "delete: usage");
        assert_eq!(err.kind(), ErrorKind::ArgumentParse);
        assert!(err.to_string().ends_with("delete: usage"));
    }

    #[test]
    fn io_errors_are_storage() {
        let err: FlashnotesError = std::io::Error::other("disk gone").into();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
