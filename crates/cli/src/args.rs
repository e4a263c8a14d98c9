use crate::options::OutputFormat;
use clap::{ArgAction, Parser, ValueHint};
use sloc_tally_engine::config::DEFAULT_ROOT;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sloc_tally",
    version = crate::VERSION,
    about = "Counts total and significant (non-blank, non-`//`) lines of every file in a directory"
)]
pub struct Args {
    /// Directory whose entries are counted (not recursive)
    #[arg(value_hint = ValueHint::DirPath, default_value = DEFAULT_ROOT)]
    pub dir: PathBuf,

    /// Process entries sorted by file name instead of listing order
    #[arg(long)]
    pub sort: bool,

    /// Skip entries that cannot be read or decoded instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
