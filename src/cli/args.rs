//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "phoneword")]
#[command(about = "Generate phonewords and translate them back to numbers", long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate all phonewords of a number
    Wordify {
        /// Phone number with country code and dashes, e.g. 1-877-527-7454
        number: String,

        /// Vocabulary file (one lowercase word per line)
        #[arg(short, long)]
        vocab: PathBuf,

        /// Number template; defaults to the US shape 0-000-000-0000
        #[arg(short, long)]
        template: Option<String>,

        /// Keep at most this many renderings
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Translate a phoneword back to the number it dials
    Translate {
        /// Phoneword, e.g. 1-877-KARS-4-KIDS
        phoneword: String,

        /// Number template; when omitted the phoneword's own shape is used
        #[arg(short, long)]
        template: Option<String>,
    },
}
