//! # CLI Layer
//!
//! One possible UI client for flashnotes: a line-oriented session over stdin/stdout.
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Parses process arguments
//! - Installs the tracing subscriber
//! - Persists configuration changes reported by commands
//!
//! ## Structure
//!
//! - [`setup`]: clap arguments and logging
//! - [`render`]: `CmdResult` → terminal text
//! - `run()`: builds the context and drives the read-eval-print loop

pub mod render;
pub mod setup;

use clap::Parser;
use flashnotes::api::FlashnotesApi;
use flashnotes::config::{resolve_data_dir, FlashnotesConfig};
use flashnotes::error::Result;
use flashnotes::interpreter::Interpreter;
use flashnotes::review::ReviewLimit;
use flashnotes::store::fs::FileStore;
use flashnotes::store::DataStore;
use render::{prompt, render_error, render_result};
use setup::{init_logging, Cli};
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

struct AppContext<S: DataStore> {
    api: FlashnotesApi<S>,
    config: FlashnotesConfig,
    data_dir: PathBuf,
}

impl<S: DataStore> AppContext<S> {
    fn persist_review_limit(&mut self, limit: ReviewLimit) -> Result<()> {
        self.config.set_review_limit(limit);
        self.config.save(&self.data_dir)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    repl(&mut ctx, stdin.lock(), &mut out, interactive)
}

fn init_context(cli: &Cli) -> Result<AppContext<FileStore>> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    fs::create_dir_all(&data_dir)?;

    let config = FlashnotesConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        FlashnotesConfig::default()
    });
    let store = FileStore::new(config.data_path(&data_dir));
    info!(path = %store.path().display(), "opened flashcard store");

    let interpreter = match cli.seed {
        Some(seed) => Interpreter::with_seed(seed),
        None => Interpreter::new(),
    };
    let mut api = FlashnotesApi::with_interpreter(store, interpreter);
    api.set_review_limit(config.review_limit());

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn repl<S: DataStore>(
    ctx: &mut AppContext<S>,
    mut input: impl BufRead,
    out: &mut impl Write,
    interactive: bool,
) -> Result<()> {
    if interactive {
        writeln!(out, "Welcome to Flashnotes! Type help to see the commands.")?;
    }
    let mut buf = Vec::new();
    loop {
        if interactive {
            write!(out, "{}", prompt(ctx.api.mode(), ctx.api.is_review_active()))?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);

        match ctx.api.execute(&line) {
            Ok(result) => {
                render_result(out, &result)?;
                if let Some(limit) = result.review_limit {
                    if let Err(e) = ctx.persist_review_limit(limit) {
                        warn!(error = %e, "could not save review limit");
                        render_error(out, &e)?;
                    }
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                debug!(kind = ?e.kind(), "command failed");
                render_error(out, &e)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Strips the line terminator. Bytes that are not UTF-8 become U+FFFD so the
/// line still reaches the interpreter and gets a normal error back.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if matches!(line, Cow::Owned(_)) {
        warn!("input line is not valid UTF-8");
    }
    line
}
