use crate::error::Result;
use std::io::Write;
use swalign::core::scoring::scheme::ScoringScheme;
use swalign::workflows::align::AlignmentResult;

const RULE_WIDTH: usize = 30;

/// Renders a score with at least one decimal place (`5.0`, `2.5`).
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

/// Writes the plain-text alignment report.
///
/// When the scheme carries a nonzero gap-start penalty, every alignment is followed
/// by its re-scored value under that penalty.
pub fn write_report(
    out: &mut impl Write,
    sequence1: &str,
    sequence2: &str,
    result: &AlignmentResult,
    scheme: &ScoringScheme,
) -> Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "Smith-Waterman Local Alignment")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Sequence 1: {}", sequence1)?;
    writeln!(out, "Sequence 2: {}", sequence2)?;
    writeln!(out, "Optimal Alignment Score: {}", format_score(result.best_score))?;
    writeln!(out)?;
    writeln!(out, "Optimal Alignments:")?;
    writeln!(out, "{}", rule)?;

    for alignment in &result.alignments {
        writeln!(out, "{}", alignment.first)?;
        writeln!(out, "{}", alignment.second)?;
        if scheme.gap_start_penalty != 0.0 {
            let affine = scheme.score_aligned(alignment)?;
            writeln!(out, "Affine score: {}", format_score(affine))?;
        }
        writeln!(out, "{}", rule)?;
    }

    if result.truncated {
        writeln!(
            out,
            "Note: enumeration stopped after {} alignment(s); more optimal alignments exist.",
            result.alignments.len()
        )?;
    }

    Ok(())
}
