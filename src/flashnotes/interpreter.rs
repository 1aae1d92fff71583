//! # Command Interpreter
//!
//! Turns one raw input line into an executed command:
//!
//! ```text
//! raw ──tokenize──▶ (word, args) ──gate──▶ CommandSpec ──parse──▶ Command ──execute──▶ CmdResult
//! ```
//!
//! The interpreter owns the review flag and the [`ReviewSession`]. Both live on the
//! instance, so independent interpreters never share review state.
//!
//! The review flag only changes in [`Interpreter::execute`], after the command has
//! succeeded. A rejected, malformed or failing line therefore leaves the flag and the
//! session exactly as they were.

use crate::commands::{CmdResult, Command, Context};
use crate::error::Result;
use crate::gate;
use crate::library::Library;
use crate::model::Mode;
use crate::registry::CommandWord;
use crate::review::{ReviewLimit, ReviewSession};
use crate::store::DataStore;
use crate::tokenizer::split_command;
use tracing::debug;

#[derive(Default)]
pub struct Interpreter {
    review_active: bool,
    session: ReviewSession,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter whose review shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_session(ReviewSession::with_seed(seed))
    }

    pub fn with_session(session: ReviewSession) -> Self {
        Self {
            review_active: false,
            session,
        }
    }

    pub fn is_review_active(&self) -> bool {
        self.review_active
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn review_limit(&self) -> ReviewLimit {
        self.session.limit()
    }

    /// Applies from the next review on.
    pub fn set_review_limit(&mut self, limit: ReviewLimit) {
        self.session.set_limit(limit);
    }

    /// Tokenize, gate and parse `raw`. Never mutates anything.
    pub fn interpret(&self, raw: &str, mode: &Mode) -> Result<Command> {
        let (word, args) = split_command(raw)?;
        let spec = gate::check(word, mode, self.review_active).into_result()?;
        let command = spec.parse(args, mode.open_deck())?;
        debug!(%word, %mode, review = self.review_active, "interpreted command");
        Ok(command)
    }

    /// Run an already interpreted command, then commit the review-flag transition.
    ///
    /// `command` is trusted to have passed the gate for `mode`; use [`run`](Self::run)
    /// for raw input.
    pub fn execute<S: DataStore>(
        &mut self,
        command: Command,
        library: &mut Library<S>,
        mode: &Mode,
    ) -> Result<CmdResult> {
        let word = command.word();
        let mut ctx = Context {
            library,
            review: &mut self.session,
            mode,
        };
        let result = command.execute(&mut ctx)?;

        match word {
            CommandWord::Review => self.review_active = true,
            CommandWord::EndReview => self.review_active = false,
            _ => {}
        }
        debug!(%word, review = self.review_active, "executed command");
        Ok(result)
    }

    pub fn run<S: DataStore>(
        &mut self,
        raw: &str,
        library: &mut Library<S>,
        mode: &Mode,
    ) -> Result<CmdResult> {
        let command = self.interpret(raw, mode)?;
        self.execute(command, library, mode)
    }
}
