use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("FLASHNOTES_GIT_HASH");
    const IS_RELEASE: &str = env!("FLASHNOTES_IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "flashnotes", bin_name = "flashnotes", version = get_version())]
#[command(
    about = "Study flashcards from the terminal, one command per line",
    long_about = "Reads one command per line from stdin. Type `help` inside the session for the command list."
)]
pub struct Cli {
    /// Directory holding flashcards and config (default: $FLASHNOTES_HOME or the platform data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seed for review shuffles, for reproducible card order
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Log to stderr so stdout carries only the session transcript.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["flashnotes", "--data-dir", "/tmp/x", "--seed", "7", "-v"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.verbose);
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::try_parse_from(["flashnotes"]).unwrap();
        assert!(cli.data_dir.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Cli::try_parse_from(["flashnotes", "--seed", "soon"]).is_err());
    }
}
