use claw_context_core::DEFAULT_MAX_MESSAGES;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "claw-context")]
#[command(version)]
#[command(about = "Session context analysis and memory sync")]
pub struct Cli {
    /// JSON config file (defaults to ~/clawd/claw-context.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a session transcript
    Analyze {
        /// Session file (JSON array, {"messages": [...]} or JSONL)
        #[arg(short, long)]
        file: PathBuf,

        /// Also report how far the session compresses
        #[arg(long)]
        compress: bool,

        /// Max non-system messages after compression
        #[arg(long, default_value_t = DEFAULT_MAX_MESSAGES)]
        max: usize,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sync analysis results into the memory store
    Sync {
        /// Session file
        #[arg(short, long)]
        file: PathBuf,

        /// MEMORY.md to append to
        #[arg(long)]
        memory: Option<String>,

        /// Directory of daily memory files
        #[arg(long)]
        memory_dir: Option<String>,

        /// Show the entry without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Compress a session transcript
    Compress {
        /// Input session file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (.jsonl writes one message per line)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Max non-system messages to keep
        #[arg(long, default_value_t = DEFAULT_MAX_MESSAGES)]
        max: usize,
    },

    /// Print version information
    Version,
}
