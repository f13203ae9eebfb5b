// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::{CliEntryOrder, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ngstore",
    version = crate::VERSION,
    about = "Print a directory snapshot the way the NextGIS store describes it"
)]
pub struct Args {
    /// Directory to list
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Print only the path of the entry at this index
    #[arg(long, help_heading = "Output")]
    pub entry: Option<usize>,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Entry order
    #[arg(long, value_enum, default_value = "dirs-first", help_heading = "Listing")]
    pub order: CliEntryOrder,

    /// Leave out entries whose name starts with a dot
    #[arg(long, help_heading = "Listing")]
    pub skip_hidden: bool,

    /// Glob patterns matched against entry names to leave out (comma separated, repeatable)
    #[arg(long, value_delimiter = ',', help_heading = "Listing")]
    pub exclude: Vec<String>,

    /// Classify symbolic links themselves instead of their targets
    #[arg(long, help_heading = "Listing")]
    pub no_follow_links: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
