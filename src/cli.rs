use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use simplelog::LevelFilter;

use ngalign::{
    candidates::DEFAULT_MAX_NGRAM_LENGTH,
    config::{parse_weight, EngineConfig},
    confidence::ConfidenceProfile,
    error::Result,
};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// The level of log messages printed to stderr.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    /// Count the n-grams of a line-aligned bilingual corpus and write them to an index file.
    CreateIndex(CreateIndexCommand),

    /// Predict alignments between a source and a target sentence.
    Align(AlignCommand),
}

#[derive(Args)]
pub struct CreateIndexCommand {
    /// Source sentences, one per line.
    #[arg(long)]
    pub source_corpus: PathBuf,

    /// Target sentences, one per line, corresponding to the source lines.
    #[arg(long)]
    pub target_corpus: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MAX_NGRAM_LENGTH, allow_negative_numbers = true)]
    pub max_ngram_length: isize,

    /// The index file to write.
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct AlignCommand {
    /// The source sentence.
    #[arg(long)]
    pub source: String,

    /// The target sentence.
    #[arg(long)]
    pub target: String,

    /// A corpus index file created with `create-index`.
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Source sentences of a corpus to add, one per line.
    #[arg(long, requires = "target_corpus")]
    pub source_corpus: Option<PathBuf>,

    /// Target sentences of a corpus to add, one per line.
    #[arg(long, requires = "source_corpus")]
    pub target_corpus: Option<PathBuf>,

    /// Source phrases of saved alignments, one per line.
    #[arg(long, requires = "saved_target")]
    pub saved_source: Option<PathBuf>,

    /// Target phrases of saved alignments, one per line, corresponding to the source lines.
    #[arg(long, requires = "saved_source")]
    pub saved_target: Option<PathBuf>,

    /// Ignored if an index is given, which carries its own maximum n-gram length.
    #[arg(long, default_value_t = DEFAULT_MAX_NGRAM_LENGTH, allow_negative_numbers = true)]
    pub max_ngram_length: isize,

    #[arg(long, default_value_t = 1)]
    pub max_suggestions: usize,

    /// Weight of a score in the confidence, as `name=value`. Can be repeated.
    #[arg(long = "weight")]
    pub weights: Vec<String>,

    #[arg(long, value_enum, default_value_t = ConfidenceProfile::V1)]
    pub confidence_profile: ConfidenceProfile,

    /// Source phrases of benchmark alignments, one per line. Only predictions with a
    /// benchmark key are considered.
    #[arg(long, requires = "benchmark_target")]
    pub benchmark_source: Option<PathBuf>,

    /// Target phrases of benchmark alignments, one per line, corresponding to the source lines.
    #[arg(long, requires = "benchmark_source")]
    pub benchmark_target: Option<PathBuf>,

    /// Print the occurrences and all scores of each prediction.
    #[arg(long)]
    pub verbose: bool,
}

impl AlignCommand {
    pub fn engine_config(&self, max_ngram_length: isize) -> Result<EngineConfig> {
        Ok(EngineConfig {
            max_ngram_length,
            max_suggestions: self.max_suggestions,
            weights: self
                .weights
                .iter()
                .map(|weight| parse_weight(weight))
                .collect::<Result<_>>()?,
            confidence_profile: self.confidence_profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, CliCommands};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn align_arguments() {
        let cli = Cli::try_parse_from([
            "ngalign",
            "align",
            "--source",
            "In the beginning",
            "--target",
            "nI eht gninnigeb",
            "--max-suggestions",
            "3",
            "--weight",
            "alignmentPosition=0.5",
        ])
        .unwrap();

        let CliCommands::Align(align) = cli.command else {
            panic!("expected the align command");
        };
        let config = align.engine_config(align.max_ngram_length).unwrap();
        assert_eq!(config.max_ngram_length, 3);
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.weights.get("alignmentPosition"), Some(&0.5));
    }

    #[test]
    fn benchmark_arguments() {
        let cli = Cli::try_parse_from([
            "ngalign",
            "align",
            "--source",
            "a",
            "--target",
            "b",
            "--benchmark-source",
            "source.txt",
            "--benchmark-target",
            "target.txt",
            "--verbose",
        ])
        .unwrap();

        let CliCommands::Align(align) = cli.command else {
            panic!("expected the align command");
        };
        assert!(align.benchmark_source.is_some());
        assert!(align.benchmark_target.is_some());
        assert!(align.verbose);

        assert!(Cli::try_parse_from([
            "ngalign",
            "align",
            "--source",
            "a",
            "--target",
            "b",
            "--benchmark-target",
            "target.txt",
        ])
        .is_err());
    }

    #[test]
    fn corpus_files_come_in_pairs() {
        assert!(Cli::try_parse_from([
            "ngalign",
            "align",
            "--source",
            "a",
            "--target",
            "b",
            "--source-corpus",
            "source.txt",
        ])
        .is_err());
    }
}
