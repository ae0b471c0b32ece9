use crate::config::Component;
use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for themeshot.
///
/// Every flag pre-answers the matching interactive prompt; with no flags the
/// run is fully interactive.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Destination directory for generated components (skips the path prompt).
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Emit JavaScript (.jsx) components instead of TypeScript (.tsx).
    #[arg(long)]
    pub javascript: bool,

    /// Components to generate, comma-separated (skips the selection prompt).
    #[arg(short, long, value_delimiter = ',', value_enum)]
    pub components: Vec<Component>,

    /// Answer every remaining prompt with its default.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Generate files without installing runtime dependencies.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
