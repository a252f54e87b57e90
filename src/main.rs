use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
};

use clap::Parser;
use cli::{AlignCommand, Cli, CliCommands, CreateIndexCommand};
use log::{info, warn};
use ngalign::{
    frequency_index::{read_snapshot, write_snapshot, FrequencyIndex},
    lexer,
    occurrence::ngram_occurrence,
    Engine, Result, Suggestion, Token,
};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

mod cli;

fn main() {
    let cli = Cli::parse();

    run(cli).unwrap_or_else(|error| println!("Error: {error}"));
}

fn run(cli: Cli) -> Result<()> {
    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match cli.command {
        CliCommands::CreateIndex(create_index_command) => create_index(create_index_command),
        CliCommands::Align(align_command) => align(align_command),
    }
}

fn create_index(create_index_command: CreateIndexCommand) -> Result<()> {
    // Load corpus.
    let source = lexer::tokenize_lines(&fs::read_to_string(
        &create_index_command.source_corpus,
    )?);
    let target = lexer::tokenize_lines(&fs::read_to_string(
        &create_index_command.target_corpus,
    )?);
    info!("Read {} sentence pairs", source.len());

    // Count.
    let mut index = FrequencyIndex::new();
    index.add_corpus(&source, &target, create_index_command.max_ngram_length)?;

    // Write index.
    let mut output = BufWriter::new(File::create(&create_index_command.output)?);
    write_snapshot(
        &mut output,
        create_index_command.max_ngram_length,
        &index,
    )?;
    info!(
        "Wrote {} alignment keys to {:?}",
        index.alignment_count(),
        create_index_command.output
    );

    Ok(())
}

fn align(align_command: AlignCommand) -> Result<()> {
    // Load the corpus index, if any.
    let (max_ngram_length, corpus_index) = if let Some(path) = &align_command.index {
        let mut input = BufReader::new(File::open(path)?);
        read_snapshot(&mut input)?
    } else {
        (align_command.max_ngram_length, FrequencyIndex::new())
    };

    let mut engine =
        Engine::new(align_command.engine_config(max_ngram_length)?).with_corpus_index(corpus_index);

    // Add corpus and saved alignments given as text.
    if let (Some(source_corpus), Some(target_corpus)) =
        (&align_command.source_corpus, &align_command.target_corpus)
    {
        let source = lexer::tokenize_lines(&fs::read_to_string(source_corpus)?);
        let target = lexer::tokenize_lines(&fs::read_to_string(target_corpus)?);
        engine.add_corpus(&source, &target)?;
    }
    if let (Some(saved_source), Some(saved_target)) =
        (&align_command.saved_source, &align_command.saved_target)
    {
        let alignments = lexer::alignments_from_lines(
            &fs::read_to_string(saved_source)?,
            &fs::read_to_string(saved_target)?,
        )?;
        engine.add_saved_alignments(&alignments);
    }
    if engine.corpus_index().is_empty() && engine.saved_alignments_index().is_empty() {
        warn!("Neither a corpus nor saved alignments were given, only positions are scored");
    }
    info!(
        "Aligning with {} corpus and {} saved alignment keys using {}",
        engine.corpus_index().alignment_count(),
        engine.saved_alignments_index().alignment_count(),
        engine.algorithm_names().join(", ")
    );

    // Predict.
    let source = lexer::tokenize(&align_command.source);
    let target = lexer::tokenize(&align_command.target);
    let max_suggestions = engine.config().max_suggestions;
    let suggestions = if let (Some(benchmark_source), Some(benchmark_target)) = (
        &align_command.benchmark_source,
        &align_command.benchmark_target,
    ) {
        let benchmark = lexer::alignments_from_lines(
            &fs::read_to_string(benchmark_source)?,
            &fs::read_to_string(benchmark_target)?,
        )?;
        info!("Restricting predictions to {} benchmark alignments", benchmark.len());
        engine.predict_with_benchmark(&source, &target, &benchmark, max_suggestions)?
    } else {
        engine.predict(&source, &target, max_suggestions)?
    };

    for (rank, suggestion) in suggestions.iter().enumerate() {
        print!("{}. {suggestion}", rank + 1);
        if align_command.verbose {
            print_scores(suggestion, &source, &target);
        }
    }

    Ok(())
}

fn print_scores(suggestion: &Suggestion, source: &[Token], target: &[Token]) {
    for prediction in suggestion.predictions() {
        println!(
            "  {} [occurrence {} -> {}]",
            prediction.key(),
            ngram_occurrence(source, prediction.source()),
            ngram_occurrence(target, prediction.target())
        );
        for (name, score) in prediction.scores() {
            println!("    {name} = {score:.4}");
        }
    }
}
