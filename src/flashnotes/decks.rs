//! Deck name validation.
//!
//! Valid deck names:
//! - Letters, digits, spaces, underscores (`_`) and hyphens (`-`)
//! - Must start with a letter or digit
//! - At most [`MAX_DECK_NAME_LEN`] characters
//!
//! Surrounding whitespace is not part of the name; callers trim before validating.

pub const MAX_DECK_NAME_LEN: usize = 50;

/// Validates a deck name according to the rules above.
///
/// # Examples
/// ```
/// use flashnotes::decks::validate_deck_name;
///
/// assert!(validate_deck_name("Spanish verbs").is_ok());
/// assert!(validate_deck_name("cs-101_midterm").is_ok());
///
/// assert!(validate_deck_name("").is_err());
/// assert!(validate_deck_name("-draft").is_err());
/// assert!(validate_deck_name("a/b").is_err());
/// ```
pub fn validate_deck_name(name: &str) -> Result<(), DeckNameError> {
    let first = name.chars().next().ok_or(DeckNameError::Empty)?;
    if !first.is_alphanumeric() {
        return Err(DeckNameError::InvalidStart(first));
    }

    let len = name.chars().count();
    if len > MAX_DECK_NAME_LEN {
        return Err(DeckNameError::TooLong(len));
    }

    match name.chars().find(|&ch| !is_valid_deck_char(ch)) {
        Some(ch) => Err(DeckNameError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

fn is_valid_deck_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == ' ' || ch == '_' || ch == '-'
}

/// Error type for deck name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckNameError {
    Empty,
    /// Must start with a letter or digit
    InvalidStart(char),
    TooLong(usize),
    InvalidCharacter(char),
}

impl std::fmt::Display for DeckNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckNameError::Empty => write!(f, "deck name cannot be empty"),
            DeckNameError::InvalidStart(ch) => {
                write!(f, "deck name must start with a letter or digit, found '{}'", ch)
            }
            DeckNameError::TooLong(len) => write!(
                f,
                "deck name is {} characters long (at most {} allowed)",
                len, MAX_DECK_NAME_LEN
            ),
            DeckNameError::InvalidCharacter(ch) => write!(
                f,
                "deck name contains invalid character '{}' (only letters, digits, spaces, underscore and hyphen allowed)",
                ch
            ),
        }
    }
}

impl std::error::Error for DeckNameError {}
