//! # Command Registry
//!
//! The vocabulary of the command language: every command word, whether it is legal in
//! each mode, its usage text, and the parser that turns its arguments into a
//! [`Command`].
//!
//! Legality is one row per word with one column per mode:
//!
//! ```text
//! word            home   deck   review
//! add             ✗      ✓      ✗
//! review          ✗      ✓      already
//! flip            ✗      ✗      ✓
//! help            ✓      ✓      ✓
//! ...
//! ```
//!
//! The registry holds no mode logic of its own; [`crate::gate`] reads the table.

use crate::commands::Command;
use crate::error::Result;
use crate::parsers;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Edit,
    Delete,
    Clear,
    Find,
    Review,
    Flip,
    Correct,
    Wrong,
    EndReview,
    List,
    ListTags,
    AddDeck,
    DeleteDeck,
    EnterDeck,
    Home,
    Exit,
    Help,
    SetReviewLimit,
}

impl CommandWord {
    /// Every word, in the order `help` lists them.
    pub const ALL: [CommandWord; 19] = [
        CommandWord::AddDeck,
        CommandWord::EnterDeck,
        CommandWord::DeleteDeck,
        CommandWord::List,
        CommandWord::ListTags,
        CommandWord::Clear,
        CommandWord::Add,
        CommandWord::Edit,
        CommandWord::Delete,
        CommandWord::Find,
        CommandWord::Home,
        CommandWord::SetReviewLimit,
        CommandWord::Review,
        CommandWord::Flip,
        CommandWord::Correct,
        CommandWord::Wrong,
        CommandWord::EndReview,
        CommandWord::Help,
        CommandWord::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Edit => "edit",
            CommandWord::Delete => "delete",
            CommandWord::Clear => "clear",
            CommandWord::Find => "find",
            CommandWord::Review => "review",
            CommandWord::Flip => "flip",
            CommandWord::Correct => "correct",
            CommandWord::Wrong => "wrong",
            CommandWord::EndReview => "endreview",
            CommandWord::List => "list",
            CommandWord::ListTags => "listtags",
            CommandWord::AddDeck => "adddeck",
            CommandWord::DeleteDeck => "deletedeck",
            CommandWord::EnterDeck => "enterdeck",
            CommandWord::Home => "home",
            CommandWord::Exit => "exit",
            CommandWord::Help => "help",
            CommandWord::SetReviewLimit => "setreviewlimit",
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a word may do in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allowed,
    Illegal,
    /// Only meaningful for `review` while a review is running
    AlreadyInReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legality {
    pub home: Gate,
    pub deck: Gate,
    pub review: Gate,
}

/// Turns the argument string (and the open deck, if any) into a command.
pub type ParseFn = fn(&str, Option<&str>) -> Result<Command>;

pub struct CommandSpec {
    pub word: CommandWord,
    pub legality: Legality,
    pub usage: &'static str,
    parse: ParseFn,
}

impl CommandSpec {
    pub fn parse(&self, args: &str, deck: Option<&str>) -> Result<Command> {
        (self.parse)(args, deck)
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("word", &self.word)
            .field("legality", &self.legality)
            .finish()
    }
}

pub const HELP_USAGE: &str = "help: Shows the available commands.\nExample: help";

fn spec(
    word: CommandWord,
    (home, deck, review): (Gate, Gate, Gate),
    usage: &'static str,
    parse: ParseFn,
) -> CommandSpec {
    CommandSpec {
        word,
        legality: Legality { home, deck, review },
        usage,
        parse,
    }
}

static REGISTRY: Lazy<HashMap<&'static str, CommandSpec>> = Lazy::new(|| {
    use CommandWord as W;
    use Gate::{AlreadyInReview as R, Allowed as A, Illegal as X};

    let specs = [
        spec(
            W::Add,
            (X, A, X),
            "add: Adds a flashcard to the open deck.\nParameters: q/QUESTION a/ANSWER\nExample: add q/What is 2+2? a/4",
            parsers::parse_add,
        ),
        spec(
            W::Edit,
            (X, A, X),
            "edit: Edits the flashcard at INDEX in the displayed list. Omitted fields keep their value.\nParameters: INDEX [q/QUESTION] [a/ANSWER]\nExample: edit 1 a/4",
            parsers::parse_edit,
        ),
        spec(
            W::Delete,
            (X, A, X),
            "delete: Deletes the flashcard at INDEX in the displayed list.\nParameters: INDEX\nExample: delete 1",
            parsers::parse_delete,
        ),
        spec(
            W::Clear,
            (A, X, X),
            "clear: Deletes every deck and flashcard.\nExample: clear",
            |_, _| Ok(Command::Clear),
        ),
        spec(
            W::Find,
            (X, A, X),
            "find: Shows the flashcards of the open deck containing any of the keywords (case-insensitive).\nParameters: KEYWORD [MORE_KEYWORDS]...\nExample: find capital river",
            parsers::parse_find,
        ),
        spec(
            W::Review,
            (X, A, R),
            "review: Starts reviewing the displayed flashcards in random order.\nExample: review",
            |_, _| Ok(Command::Review),
        ),
        spec(
            W::Flip,
            (X, X, A),
            "flip: Shows the other side of the current card.\nExample: flip",
            |_, _| Ok(Command::Flip),
        ),
        spec(
            W::Correct,
            (X, X, A),
            "correct: Marks the current card as answered correctly and moves on.\nExample: correct",
            |_, _| Ok(Command::Correct),
        ),
        spec(
            W::Wrong,
            (X, X, A),
            "wrong: Marks the current card as answered wrongly and moves on.\nExample: wrong",
            |_, _| Ok(Command::Wrong),
        ),
        spec(
            W::EndReview,
            (X, X, A),
            "endreview: Ends the review and shows the score.\nExample: endreview",
            |_, _| Ok(Command::EndReview),
        ),
        spec(
            W::List,
            (A, X, X),
            "list: Lists every deck.\nExample: list",
            |_, _| Ok(Command::List),
        ),
        spec(
            W::ListTags,
            (A, X, X),
            "listtags: Lists deck names only.\nExample: listtags",
            |_, _| Ok(Command::ListTags),
        ),
        spec(
            W::AddDeck,
            (A, X, X),
            "adddeck: Creates an empty deck.\nParameters: NAME\nExample: adddeck Spanish verbs",
            parsers::parse_add_deck,
        ),
        spec(
            W::DeleteDeck,
            (A, X, X),
            "deletedeck: Deletes a deck and all of its flashcards.\nParameters: NAME\nExample: deletedeck Spanish verbs",
            parsers::parse_delete_deck,
        ),
        spec(
            W::EnterDeck,
            (A, X, X),
            "enterdeck: Opens a deck.\nParameters: NAME\nExample: enterdeck Spanish verbs",
            parsers::parse_enter_deck,
        ),
        spec(
            W::Home,
            (X, A, X),
            "home: Closes the open deck and returns to the deck list.\nExample: home",
            |_, _| Ok(Command::Home),
        ),
        spec(
            W::Exit,
            (A, A, X),
            "exit: Exits the program.\nExample: exit",
            |_, _| Ok(Command::Exit),
        ),
        spec(W::Help, (A, A, A), HELP_USAGE, |_, _| Ok(Command::Help)),
        spec(
            W::SetReviewLimit,
            (X, A, X),
            "setreviewlimit: Sets how many cards the next reviews cover ('all' for no limit).\nParameters: LIMIT\nExample: setreviewlimit 20",
            parsers::parse_review_limit,
        ),
    ];

    specs.into_iter().map(|s| (s.word.as_str(), s)).collect()
});

/// Exact, case-sensitive lookup.
pub fn lookup(word: &str) -> Option<&'static CommandSpec> {
    REGISTRY.get(word)
}

pub fn spec_for(word: CommandWord) -> &'static CommandSpec {
    // Every CommandWord has a row; the table test pins this down
    &REGISTRY[word.as_str()]
}

/// Usage text of a registered word, or the help usage for anything else.
pub fn usage(word: &str) -> &'static str {
    lookup(word).map_or(HELP_USAGE, |s| s.usage)
}

/// All specs in help order.
pub fn all() -> impl Iterator<Item = &'static CommandSpec> {
    CommandWord::ALL.into_iter().map(spec_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_has_exactly_one_row() {
        assert_eq!(REGISTRY.len(), CommandWord::ALL.len());
        for word in CommandWord::ALL {
            let spec = lookup(word.as_str()).expect("missing row");
            assert_eq!(spec.word, word);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("review").is_some());
        assert!(lookup("Review").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn usage_starts_with_the_word() {
        for spec in all() {
            assert!(
                spec.usage.starts_with(&format!("{}:", spec.word)),
                "bad usage for {}",
                spec.word
            );
        }
        assert_eq!(usage("nonsense"), HELP_USAGE);
    }

    #[test]
    fn already_in_review_only_applies_to_review() {
        for spec in all() {
            let is_review = spec.word == CommandWord::Review;
            assert_eq!(spec.legality.review == Gate::AlreadyInReview, is_review);
            assert_ne!(spec.legality.home, Gate::AlreadyInReview);
            assert_ne!(spec.legality.deck, Gate::AlreadyInReview);
        }
    }

    #[test]
    fn zero_argument_commands_ignore_trailing_text() {
        assert_eq!(
            spec_for(CommandWord::Help).parse(" me please", None).unwrap(),
            Command::Help
        );
        assert_eq!(
            spec_for(CommandWord::EndReview).parse(" now", None).unwrap(),
            Command::EndReview
        );
    }
}
