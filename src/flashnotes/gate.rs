//! Mode legality checks.
//!
//! [`check`] is a pure function of (word, mode, review flag). The review flag wins over
//! the base mode: while a review runs only the review column of the registry matters.

use crate::error::{
    FlashnotesError, MESSAGE_ILLEGAL_IN_DECK, MESSAGE_ILLEGAL_IN_HOME,
    MESSAGE_UNAVAILABLE_IN_REVIEW_MODE,
};
use crate::model::Mode;
use crate::registry::{self, CommandSpec, Gate};

#[derive(Debug, Clone, Copy)]
pub enum LegalityResult {
    Allowed(&'static CommandSpec),
    RejectedIllegalInMode(&'static str),
    RejectedAlreadyInReview,
    UnknownCommand,
}

impl PartialEq for LegalityResult {
    fn eq(&self, other: &Self) -> bool {
        use LegalityResult::*;
        match (self, other) {
            (Allowed(a), Allowed(b)) => a.word == b.word,
            (RejectedIllegalInMode(a), RejectedIllegalInMode(b)) => a == b,
            (RejectedAlreadyInReview, RejectedAlreadyInReview) => true,
            (UnknownCommand, UnknownCommand) => true,
            _ => false,
        }
    }
}

impl Eq for LegalityResult {}

impl LegalityResult {
    pub fn into_result(self) -> Result<&'static CommandSpec, FlashnotesError> {
        match self {
            LegalityResult::Allowed(spec) => Ok(spec),
            LegalityResult::RejectedIllegalInMode(reason) => {
                Err(FlashnotesError::IllegalInMode(reason))
            }
            LegalityResult::RejectedAlreadyInReview => Err(FlashnotesError::AlreadyInReview),
            LegalityResult::UnknownCommand => Err(FlashnotesError::UnknownCommand),
        }
    }
}

pub fn check(word: &str, mode: &Mode, review_active: bool) -> LegalityResult {
    let Some(spec) = registry::lookup(word) else {
        return LegalityResult::UnknownCommand;
    };

    let (gate, reason) = if review_active {
        (spec.legality.review, MESSAGE_UNAVAILABLE_IN_REVIEW_MODE)
    } else {
        match mode {
            Mode::Home => (spec.legality.home, MESSAGE_ILLEGAL_IN_HOME),
            Mode::DeckDetail { .. } => (spec.legality.deck, MESSAGE_ILLEGAL_IN_DECK),
        }
    };

    match gate {
        Gate::Allowed => LegalityResult::Allowed(spec),
        Gate::Illegal => LegalityResult::RejectedIllegalInMode(reason),
        Gate::AlreadyInReview => LegalityResult::RejectedAlreadyInReview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandWord;

    fn allowed(words: &[&str], mode: &Mode, review: bool) {
        for w in words {
            assert!(
                matches!(check(w, mode, review), LegalityResult::Allowed(s) if s.word.as_str() == *w),
                "{} should be allowed in {} (review={})",
                w,
                mode,
                review
            );
        }
    }

    fn illegal(words: &[&str], mode: &Mode, review: bool, reason: &'static str) {
        for w in words {
            assert_eq!(
                check(w, mode, review),
                LegalityResult::RejectedIllegalInMode(reason),
                "{} should be illegal in {} (review={})",
                w,
                mode,
                review
            );
        }
    }

    #[test]
    fn home_matrix() {
        let home = Mode::Home;
        allowed(
            &["adddeck", "deletedeck", "enterdeck", "exit", "help", "list", "listtags", "clear"],
            &home,
            false,
        );
        // home and setreviewlimit are known words, so Home rejects them as illegal
        // here rather than reporting an unknown command.
        illegal(
            &[
                "add", "edit", "delete", "find", "review", "correct", "flip", "wrong",
                "endreview", "home", "setreviewlimit",
            ],
            &home,
            false,
            MESSAGE_ILLEGAL_IN_HOME,
        );
    }

    #[test]
    fn deck_matrix() {
        let deck = Mode::deck("geo");
        allowed(
            &[
                "add", "delete", "edit", "exit", "find", "help", "home", "review",
                "setreviewlimit",
            ],
            &deck,
            false,
        );
        illegal(
            &[
                "adddeck", "clear", "correct", "deletedeck", "enterdeck", "flip", "list",
                "listtags", "endreview", "wrong",
            ],
            &deck,
            false,
            MESSAGE_ILLEGAL_IN_DECK,
        );
    }

    #[test]
    fn review_matrix_ignores_base_mode() {
        for mode in [Mode::Home, Mode::deck("geo")] {
            allowed(&["flip", "correct", "wrong", "endreview", "help"], &mode, true);
            illegal(
                &[
                    "add", "edit", "delete", "clear", "find", "setreviewlimit", "enterdeck",
                    "list", "listtags", "adddeck", "exit", "deletedeck", "home",
                ],
                &mode,
                true,
                MESSAGE_UNAVAILABLE_IN_REVIEW_MODE,
            );
        }
    }

    #[test]
    fn review_while_reviewing_is_its_own_rejection() {
        for mode in [Mode::Home, Mode::deck("geo")] {
            assert_eq!(
                check("review", &mode, true),
                LegalityResult::RejectedAlreadyInReview
            );
        }
    }

    #[test]
    fn unknown_words_at_every_stage() {
        for (mode, review) in [
            (Mode::Home, false),
            (Mode::deck("geo"), false),
            (Mode::deck("geo"), true),
        ] {
            for w in ["", "ADD", "reviews", "quit", "listtag"] {
                assert_eq!(check(w, &mode, review), LegalityResult::UnknownCommand);
            }
        }
    }

    #[test]
    fn check_is_deterministic_over_the_whole_table() {
        for word in CommandWord::ALL {
            for mode in [Mode::Home, Mode::deck("geo")] {
                for review in [false, true] {
                    let first = check(word.as_str(), &mode, review);
                    let second = check(word.as_str(), &mode, review);
                    assert_eq!(first, second);
                    assert_ne!(first, LegalityResult::UnknownCommand);
                }
            }
        }
    }

    #[test]
    fn rejections_convert_to_typed_errors() {
        use crate::error::ErrorKind;
        let kind = |r: LegalityResult| r.into_result().unwrap_err().kind();
        assert_eq!(
            kind(check("review", &Mode::Home, true)),
            ErrorKind::RejectedAlreadyInReview
        );
        assert_eq!(
            kind(check("add", &Mode::Home, false)),
            ErrorKind::RejectedIllegalInMode
        );
        assert_eq!(
            kind(check("nope", &Mode::Home, false)),
            ErrorKind::UnknownCommand
        );
    }
}
