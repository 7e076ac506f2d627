use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use swalign::core::scoring::scheme::ScoringScheme;
use swalign::engine::config::AlignmentConfigBuilder;
use tracing::info;

pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let config_dir = args.config.as_deref().and_then(Path::parent);

    let scoring_file = file_config.scoring.unwrap_or_default();
    let output_file = file_config.output.unwrap_or_default();

    let match_score = args
        .match_score
        .or(scoring_file.match_score)
        .unwrap_or(defaults.match_score);
    let mismatch_penalty = negative_magnitude(
        args.mismatch_penalty
            .or(scoring_file.mismatch_penalty)
            .unwrap_or(defaults.mismatch_penalty),
    );
    let gap_penalty = negative_magnitude(
        args.gap_penalty
            .or(scoring_file.gap_penalty)
            .unwrap_or(defaults.gap_penalty),
    );
    let gap_start_penalty = negative_magnitude(
        args.gap_start_penalty
            .or(scoring_file.gap_start_penalty)
            .unwrap_or(defaults.gap_start_penalty),
    );

    for (name, value) in [
        ("match-score", match_score),
        ("mismatch-penalty", mismatch_penalty),
        ("gap-penalty", gap_penalty),
        ("gap-start-penalty", gap_start_penalty),
    ] {
        if !value.is_finite() {
            return Err(CliError::Config(format!(
                "`{}` must be a finite number, got {}",
                name, value
            )));
        }
    }

    let matrix_file = args.matrix_file.clone().or_else(|| {
        scoring_file
            .matrix_file
            .map(|path| resolve_relative_to(path, config_dir))
    });

    let mut scheme =
        ScoringScheme::new(match_score, mismatch_penalty, gap_penalty, gap_start_penalty);
    if let Some(path) = &matrix_file {
        info!("Loading substitution matrix from {:?}", path);
        scheme.load_matrix(path)?;
    }

    let alignment = AlignmentConfigBuilder::new()
        .max_alignments(
            args.max_alignments
                .or(output_file.max_alignments)
                .or(defaults.max_alignments),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        sequence1: args.sequence1.clone(),
        sequence2: args.sequence2.clone(),
        scheme,
        matrix_file,
        alignment,
        show_progress: !args.no_progress && !args.quiet,
    })
}

/// Penalties are always applied as negative magnitudes, whichever sign was given.
fn negative_magnitude(value: f64) -> f64 {
    -value.abs()
}

fn resolve_relative_to(path: PathBuf, base: Option<&Path>) -> PathBuf {
    match base {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    const MATRIX: &str = "A C G T\nA 5 -4 -4 -4\nC -4 5 -4 -4\nG -4 -4 5 -4\nT -4 -4 -4 5\n";

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["swalign", "ACGT", "AGT"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = build_config(&parse(&[])).unwrap();
        assert_eq!(config.scheme, ScoringScheme::default());
        assert_eq!(config.alignment.max_alignments, None);
        assert_eq!(config.matrix_file, None);
        assert!(config.show_progress);
        assert_eq!(config.sequence1, "ACGT");
        assert_eq!(config.sequence2, "AGT");
    }

    #[test]
    fn penalties_are_forced_negative() {
        let config = build_config(&parse(&[
            "--gap-penalty",
            "2",
            "--mismatch-penalty",
            "-3",
            "--gap-start-penalty",
            "4",
            "--match-score",
            "2",
        ]))
        .unwrap();
        assert_eq!(config.scheme.gap_penalty, -2.0);
        assert_eq!(config.scheme.mismatch_penalty, -3.0);
        assert_eq!(config.scheme.gap_start_penalty, -4.0);
        assert_eq!(config.scheme.match_score, 2.0);
    }

    #[test]
    fn cli_values_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("swalign.toml");
        fs::write(
            &config_path,
            "[scoring]\nmatch-score = 3.0\ngap-penalty = 2.0\n\n[output]\nmax-alignments = 4\n",
        )
        .unwrap();

        let config = build_config(&parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "--gap-penalty",
            "0.5",
        ]))
        .unwrap();
        assert_eq!(config.scheme.match_score, 3.0);
        assert_eq!(config.scheme.gap_penalty, -0.5);
        assert_eq!(config.alignment.max_alignments, Some(4));
    }

    #[test]
    fn matrix_file_in_config_resolves_against_config_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("matrices")).unwrap();
        fs::write(dir.path().join("matrices").join("dna.mat"), MATRIX).unwrap();
        let config_path = dir.path().join("swalign.toml");
        fs::write(&config_path, "[scoring]\nmatrix-file = \"matrices/dna.mat\"\n").unwrap();

        let config = build_config(&parse(&["--config", config_path.to_str().unwrap()])).unwrap();
        assert_eq!(
            config.matrix_file,
            Some(dir.path().join("matrices").join("dna.mat"))
        );
        assert_eq!(config.scheme.score('A', 'A'), Ok(5.0));
        assert_eq!(config.scheme.score('A', 'C'), Ok(-4.0));
    }

    #[test]
    fn matrix_file_argument_loads_matrix() {
        let dir = tempdir().unwrap();
        let matrix_path = dir.path().join("dna.mat");
        fs::write(&matrix_path, MATRIX).unwrap();

        let config = build_config(&parse(&["--matrix-file", matrix_path.to_str().unwrap()])).unwrap();
        assert_eq!(config.scheme.symbols(), Some(&['A', 'C', 'G', 'T'][..]));
    }

    #[test]
    fn malformed_matrix_file_is_reported() {
        let dir = tempdir().unwrap();
        let matrix_path = dir.path().join("broken.mat");
        fs::write(&matrix_path, "A C\nA 1 x\n").unwrap();

        let result = build_config(&parse(&["--matrix-file", matrix_path.to_str().unwrap()]));
        assert!(matches!(result, Err(CliError::Matrix(_))));
    }

    #[test]
    fn zero_alignment_cap_is_rejected() {
        let result = build_config(&parse(&["--max-alignments", "0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        let result = build_config(&parse(&["--match-score", "inf"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn quiet_or_no_progress_hides_progress() {
        assert!(!build_config(&parse(&["--no-progress"])).unwrap().show_progress);
        assert!(!build_config(&parse(&["-q"])).unwrap().show_progress);
    }
}
