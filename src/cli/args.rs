use crate::{constants::verbosity, xml::Indent};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for nscgen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Destination file for the generated config. Asked for at the end when omitted.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Policy document as a JSON string or `-` to read it from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Path to a JSON or YAML policy document.
    #[arg(long = "answers-file", value_name = "PATH")]
    pub answers_file: Option<PathBuf>,

    /// Never prompt; fail if something would have to be asked.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Print the generated config instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Indentation per level: `tab` or a number of spaces.
    #[arg(long, default_value = "tab")]
    pub indent: Indent,
}

/// Parse command line arguments. Every argument is optional.
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
