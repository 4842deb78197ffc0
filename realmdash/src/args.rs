use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "realmdash")]
#[command(version, about = "Resource and military views over a realm snapshot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Show the economic resources table.
    Resources(ViewArgs),

    /// Show the military summary, unit table and unit cards.
    Military(ViewArgs),

    /// Check that a snapshot parses and report what it contains.
    Validate {
        /// Snapshot JSON file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Write the bundled sample snapshot.
    Sample {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, PartialEq)]
pub struct ViewArgs {
    /// Snapshot JSON file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Sort column: `resource`, `total`, or a realm name
    #[arg(short, long, default_value = "resource")]
    pub sort: String,

    /// Sort descending instead of ascending
    #[arg(short, long)]
    pub descending: bool,

    /// Only show resources whose name contains this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Output the view as JSON
    #[arg(long)]
    pub json: bool,
}
