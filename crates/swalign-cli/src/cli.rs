use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "swalign - Smith-Waterman local alignment that reports every optimal alignment of two sequences.",
    help_template = HELP_TEMPLATE,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// The first sequence to align.
    #[arg(value_name = "SEQUENCE1")]
    pub sequence1: String,

    /// The second sequence to align.
    #[arg(value_name = "SEQUENCE2")]
    pub sequence2: String,

    // --- Scoring Overrides ---
    /// Penalty for aligning a symbol against a gap. Always applied as a negative value.
    #[arg(long, value_name = "FLOAT")]
    pub gap_penalty: Option<f64>,

    /// Score for aligning two identical symbols.
    #[arg(long, value_name = "FLOAT")]
    pub match_score: Option<f64>,

    /// Penalty for aligning two different symbols. Always applied as a negative value.
    #[arg(long, value_name = "FLOAT")]
    pub mismatch_penalty: Option<f64>,

    /// Extra penalty for the first gap of a run when re-scoring reported alignments.
    /// It does not change which alignments are optimal.
    #[arg(long, value_name = "FLOAT")]
    pub gap_start_penalty: Option<f64>,

    /// Substitution matrix file. Takes precedence over match/mismatch scores.
    #[arg(short = 'm', long, value_name = "PATH")]
    pub matrix_file: Option<PathBuf>,

    // --- Run Options ---
    /// Optional configuration file in TOML format. Command-line values win over it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stop after reporting this many distinct optimal alignments.
    #[arg(short = 'n', long, value_name = "INT")]
    pub max_alignments: Option<usize>,

    /// Do not draw progress bars.
    #[arg(long)]
    pub no_progress: bool,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
