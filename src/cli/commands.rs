//! Command implementations for the centime CLI.

use std::fs;

use crate::classify::Classifier;
use crate::cli::args::*;
use crate::error::{CentimeError, Result};
use crate::model::storage::{load_model, save_model};
use crate::training;

/// Execute a CLI command.
pub fn execute_command(args: CentimeArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
    }
}

/// Train a model and write its snapshot.
fn train(args: TrainArgs, cli_args: &CentimeArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading data from: {}", args.input.display());
    }

    // Whole-file read: the pipeline is an in-memory batch by design.
    let input = fs::read_to_string(&args.input)?;
    let run = training::train(&input)?;

    if cli_args.verbosity() > 1 {
        if run.ingest.skipped() > 0 {
            println!(
                "Skipped {} records ({} parse errors, {} missing fields)",
                run.ingest.skipped(),
                run.ingest.parse_errors,
                run.ingest.missing_fields
            );
        }
        if run.empty_documents > 0 {
            println!(
                "Dropped {} records with no token content",
                run.empty_documents
            );
        }
    }

    if cli_args.verbosity() > 0 {
        println!("Saving model to: {}", args.output.display());
    }
    save_model(&run.model, &args.output)?;

    println!("Documents: {}", run.document_count());
    println!("Vocabulary size: {}", run.vocab_size());
    println!("Categories: {}", run.category_count());
    println!(
        "Training accuracy: {}/{} ({:.2}%)",
        run.evaluation.correct,
        run.evaluation.total,
        run.evaluation.accuracy() * 100.0
    );

    Ok(())
}

/// Load a snapshot and classify the given texts.
fn classify(args: ClassifyArgs, cli_args: &CentimeArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading model from: {}", args.model.display());
    }
    let model = load_model(&args.model)?;
    let classifier = Classifier::new(&model);

    for text in &args.texts {
        let prediction = classifier
            .predict(text)
            .ok_or_else(|| CentimeError::model("model snapshot contains no categories"))?;

        if cli_args.verbosity() > 1 {
            println!(
                "{text} -> {} (score {:.4})",
                prediction.category, prediction.score
            );
        } else {
            println!("{}", prediction.category);
        }
    }

    Ok(())
}
