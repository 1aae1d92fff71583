//! # API Facade
//!
//! The API layer is a **thin facade** over the interpreter. It is the single entry
//! point UI clients use: hand it a line, get back a `Result<CmdResult>`.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the [`Library`], the [`Interpreter`] and the current [`Mode`]
//! - **Applies mode changes** reported by commands (`enterdeck`, `home`)
//! - **Returns structured types**, never strings for the terminal
//!
//! ## Generic Over DataStore
//!
//! `FlashnotesApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FlashnotesApi<FileStore>`
//! - Testing: `FlashnotesApi<InMemoryStore>`

use crate::commands::CmdResult;
use crate::error::Result;
use crate::interpreter::Interpreter;
use crate::library::Library;
use crate::model::Mode;
use crate::review::ReviewLimit;
use crate::store::DataStore;
use tracing::debug;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct FlashnotesApi<S: DataStore> {
    library: Library<S>,
    interpreter: Interpreter,
    mode: Mode,
}

impl<S: DataStore> FlashnotesApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_interpreter(store, Interpreter::new())
    }

    pub fn with_interpreter(store: S, interpreter: Interpreter) -> Self {
        Self {
            library: Library::new(store),
            interpreter,
            mode: Mode::Home,
        }
    }

    /// Interpret and execute one input line.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let result = self.interpreter.run(line, &mut self.library, &self.mode)?;
        if let Some(mode) = &result.mode_change {
            debug!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode.clone();
        }
        Ok(result)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_review_active(&self) -> bool {
        self.interpreter.is_review_active()
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn review_limit(&self) -> ReviewLimit {
        self.interpreter.review_limit()
    }

    pub fn set_review_limit(&mut self, limit: ReviewLimit) {
        self.interpreter.set_review_limit(limit);
    }
}
