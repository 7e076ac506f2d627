use crate::cli::Cli;
use crate::config::{self, AppConfig};
use crate::error::Result;
use crate::report;
use crate::utils::progress::CliProgressHandler;
use std::io::{self, Write};
use swalign::engine::progress::ProgressReporter;
use swalign::workflows::align;
use tracing::{info, warn};

pub fn run(args: &Cli) -> Result<()> {
    info!("Building scoring configuration...");
    let app_config = config::build_config(args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&app_config, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn execute(app_config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let progress_handler = app_config.show_progress.then(CliProgressHandler::new);
    let reporter = match &progress_handler {
        Some(handler) => ProgressReporter::with_callback(handler.get_callback()),
        None => ProgressReporter::new(),
    };

    info!(
        "Aligning sequences of length {} and {}.",
        app_config.sequence1.chars().count(),
        app_config.sequence2.chars().count()
    );
    let result = align::run(
        &app_config.sequence1,
        &app_config.sequence2,
        &app_config.scheme,
        &app_config.alignment,
        &reporter,
    )?;

    if let Some(handler) = &progress_handler {
        handler.clear();
    }
    if result.truncated {
        warn!(
            "Alignment enumeration was capped at {} result(s).",
            result.alignments.len()
        );
    }

    report::write_report(
        out,
        &app_config.sequence1,
        &app_config.sequence2,
        &result,
        &app_config.scheme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use std::fs;
    use swalign::engine::error::EngineError;
    use tempfile::tempdir;

    fn execute_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let app_config = config::build_config(&cli)?;
        let mut buffer = Vec::new();
        execute(&app_config, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn execute_prints_optimal_score_and_alignment() {
        let text = execute_args(&["swalign", "A", "A", "--no-progress"]).unwrap();
        assert!(text.contains("Optimal Alignment Score: 1.0\n"));
        assert!(text.contains("\nA\nA\n"));
    }

    #[test]
    fn execute_applies_cap_from_arguments() {
        let text = execute_args(&[
            "swalign",
            "TACGGGCCCGCTAC",
            "TAGCCCTATCGGTCA",
            "--match-score",
            "3",
            "--mismatch-penalty",
            "3",
            "--gap-penalty",
            "2",
            "--max-alignments",
            "2",
            "--no-progress",
        ])
        .unwrap();
        assert!(text.contains("Optimal Alignment Score: 15.0\n"));
        assert!(text.contains("enumeration stopped after 2 alignment(s)"));
    }

    #[test]
    fn execute_surfaces_unknown_matrix_symbols() {
        let dir = tempdir().unwrap();
        let matrix_path = dir.path().join("ac.mat");
        fs::write(&matrix_path, "A C\nA 1 -1\nC -1 1\n").unwrap();

        let result = execute_args(&[
            "swalign",
            "ACG",
            "AC",
            "--matrix-file",
            matrix_path.to_str().unwrap(),
            "--no-progress",
        ]);
        assert!(matches!(result, Err(CliError::Engine(EngineError::Scoring { .. }))));
    }
}
