//! # Flashnotes Architecture
//!
//! Flashnotes is a flashcard study library driven by one-line textual commands
//! (`add q/What is 2+2? a/4`, `review`, `correct`, ...). The CLI binary is one client;
//! everything from [`api`] inward is UI-agnostic.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - REPL loop, logging setup, config loading, colored output │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the current Mode and the Library                    │
//! │  - Applies mode changes reported by commands                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interpreter (interpreter.rs)                               │
//! │  tokenizer → gate → registry → Command → execute            │
//! │  - Owns the review flag and the ReviewSession               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Executes against Library and ReviewSession               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (library.rs) over Storage (store/)                 │
//! │  - Filtered "visible" view over DataStore                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modes and Review
//!
//! The application is either at **Home** (no deck open) or in **DeckDetail** (one deck
//! open). A review session is an orthogonal flag layered over whichever mode was active
//! when it started, so ending a review returns to that mode. Which command words are
//! legal in which mode is one table, see [`registry`] and [`gate`].
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never prints or exits.
//! Only the stores touch the filesystem.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade UI clients talk to
//! - [`interpreter`]: Line interpretation and review-flag ownership
//! - [`tokenizer`]: Command word / argument split
//! - [`gate`]: Mode legality checks
//! - [`registry`]: Command vocabulary, usage text and parsers
//! - [`parsers`]: Argument grammars
//! - [`commands`]: Command objects and their execution
//! - [`review`]: Review session state machine
//! - [`library`]: Visible-collection view over the store
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Flashcard`, `Mode`)
//! - [`decks`]: Deck name validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod decks;
pub mod error;
pub mod gate;
pub mod interpreter;
pub mod library;
pub mod model;
pub mod parsers;
pub mod registry;
pub mod review;
pub mod store;
pub mod tokenizer;
