use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// undoray - batch replay and state printing for undo-array containers
#[derive(Debug, Parser)]
#[command(name = "undoray", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output: debug-level logging plus slot-count and history-depth
    /// header lines when printing array state.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay an operation script against a fresh array, optionally many times over.
    ///
    /// Each iteration parses the script, builds the array it describes, applies every
    /// operation, and drops the array again; large repeat counts exercise the container
    /// for leaks under an external memory monitor.
    Replay {
        /// Path to the operation script.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Number of times to repeat the parse-replay-drop cycle.
        #[arg(short = 'n', long, default_value_t = 1)]
        repeat: usize,

        /// Print the final array state after the last iteration.
        #[arg(long)]
        print: bool,
    },

    /// Replay an operation script once and print the resulting array state.
    Print {
        /// Path to the operation script.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
