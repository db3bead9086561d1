//! Command line argument parsing for the centime CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Centime - a Naive Bayes spending-category classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "centime")]
#[command(about = "Train and apply a Naive Bayes spending-category classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CentimeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CentimeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from labeled records
    Train(TrainArgs),

    /// Classify text with a trained model
    Classify(ClassifyArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Labeled records (JSONL, or a batch-export JSON object)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the model snapshot (JSON)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to a trained model snapshot
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// One or more texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}
