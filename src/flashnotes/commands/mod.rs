//! # Command Layer
//!
//! A [`Command`] is the executable form of one interpreted input line. The interpreter
//! builds it (see [`crate::registry`]) and then runs [`Command::execute`] against a
//! [`Context`] borrowing the library and the review session.
//!
//! ## What Commands Do NOT Do
//!
//! - **Mode checks**: the gate already approved the command
//! - **Review-flag changes**: the interpreter commits those after a successful run
//! - **Mode changes**: `enterdeck`/`home` *report* the new mode in
//!   [`CmdResult::mode_change`]; the caller owning the mode applies it
//! - **Terminal I/O**: results are structured data, the UI renders them
//!
//! ## Command Modules
//!
//! - [`add`], [`edit`], [`delete`], [`find`]: cards of the open deck
//! - [`decks`]: `adddeck`, `deletedeck`, `enterdeck`, `home`
//! - [`list`]: `list`, `listtags`
//! - [`clear`]: wipe everything
//! - [`review`]: `review`, `flip`, `correct`, `wrong`, `endreview`, `setreviewlimit`
//! - [`general`]: `help`, `exit`

use crate::error::Result;
use crate::library::{DeckSummary, DisplayCard, Library};
use crate::model::Mode;
use crate::registry::CommandWord;
use crate::review::{Outcome, ReviewCard, ReviewLimit, ReviewProgress, ReviewSession, ReviewSummary};
use crate::store::DataStore;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod decks;
pub mod delete;
pub mod edit;
pub mod find;
pub mod general;
pub mod list;
pub mod review;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        question: String,
        answer: String,
        deck: String,
    },
    Edit {
        index: usize,
        question: Option<String>,
        answer: Option<String>,
    },
    Delete {
        index: usize,
    },
    Clear,
    Find {
        keywords: Vec<String>,
    },
    Review,
    Flip,
    Correct,
    Wrong,
    EndReview,
    List,
    ListTags,
    AddDeck {
        name: String,
    },
    DeleteDeck {
        name: String,
    },
    EnterDeck {
        name: String,
    },
    Home,
    Exit,
    Help,
    SetReviewLimit {
        limit: ReviewLimit,
    },
}

impl Command {
    pub fn word(&self) -> CommandWord {
        match self {
            Command::Add { .. } => CommandWord::Add,
            Command::Edit { .. } => CommandWord::Edit,
            Command::Delete { .. } => CommandWord::Delete,
            Command::Clear => CommandWord::Clear,
            Command::Find { .. } => CommandWord::Find,
            Command::Review => CommandWord::Review,
            Command::Flip => CommandWord::Flip,
            Command::Correct => CommandWord::Correct,
            Command::Wrong => CommandWord::Wrong,
            Command::EndReview => CommandWord::EndReview,
            Command::List => CommandWord::List,
            Command::ListTags => CommandWord::ListTags,
            Command::AddDeck { .. } => CommandWord::AddDeck,
            Command::DeleteDeck { .. } => CommandWord::DeleteDeck,
            Command::EnterDeck { .. } => CommandWord::EnterDeck,
            Command::Home => CommandWord::Home,
            Command::Exit => CommandWord::Exit,
            Command::Help => CommandWord::Help,
            Command::SetReviewLimit { .. } => CommandWord::SetReviewLimit,
        }
    }

    pub fn execute<S: DataStore>(self, ctx: &mut Context<'_, S>) -> Result<CmdResult> {
        match self {
            Command::Add {
                question,
                answer,
                deck,
            } => add::run(ctx.library, question, answer, deck),
            Command::Edit {
                index,
                question,
                answer,
            } => edit::run(ctx.library, index, question, answer),
            Command::Delete { index } => delete::run(ctx.library, index),
            Command::Clear => clear::run(ctx.library),
            Command::Find { keywords } => find::run(ctx.library, ctx.mode, keywords),
            Command::Review => review::start(ctx.library, ctx.review),
            Command::Flip => review::flip(ctx.review),
            Command::Correct => review::score(ctx.review, Outcome::Correct),
            Command::Wrong => review::score(ctx.review, Outcome::Wrong),
            Command::EndReview => review::end(ctx.review),
            Command::List => list::decks(ctx.library),
            Command::ListTags => list::deck_names(ctx.library),
            Command::AddDeck { name } => decks::add(ctx.library, name),
            Command::DeleteDeck { name } => decks::delete(ctx.library, name),
            Command::EnterDeck { name } => decks::enter(ctx.library, name),
            Command::Home => decks::home(ctx.library),
            Command::Exit => general::exit(),
            Command::Help => general::help(),
            Command::SetReviewLimit { limit } => review::set_limit(ctx.review, limit),
        }
    }
}

/// What a command may touch while it runs.
pub struct Context<'a, S: DataStore> {
    pub library: &'a mut Library<S>,
    pub review: &'a mut ReviewSession,
    pub mode: &'a Mode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command. The UI decides how to render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_cards: Vec<DisplayCard>,
    pub listed_decks: Vec<DeckSummary>,
    /// Card to show after a review move
    pub review_card: Option<ReviewCard>,
    pub review_progress: Option<ReviewProgress>,
    pub review_summary: Option<ReviewSummary>,
    /// New navigational mode for the caller to adopt
    pub mode_change: Option<Mode>,
    /// Review limit the caller may want to persist
    pub review_limit: Option<ReviewLimit>,
    /// Usage text of every command, set by `help`
    pub help: Vec<&'static str>,
    pub show_help: bool,
    pub exit: bool,
    pub enter_review: bool,
    pub exit_review: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<DisplayCard>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_listed_decks(mut self, decks: Vec<DeckSummary>) -> Self {
        self.listed_decks = decks;
        self
    }

    pub fn with_mode_change(mut self, mode: Mode) -> Self {
        self.mode_change = Some(mode);
        self
    }

    /// Content of the first message, the command's headline feedback.
    pub fn feedback(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_knows_its_word() {
        let cmd = Command::SetReviewLimit {
            limit: ReviewLimit::Unlimited,
        };
        assert_eq!(cmd.word(), CommandWord::SetReviewLimit);
        assert_eq!(Command::EndReview.word().as_str(), "endreview");
    }

    #[test]
    fn feedback_is_first_message() {
        let result = CmdResult::default()
            .with_message(CmdMessage::success("done"))
            .with_message(CmdMessage::info("detail"));
        assert_eq!(result.feedback(), Some("done"));
        assert_eq!(CmdResult::default().feedback(), None);
    }
}
