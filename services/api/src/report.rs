use clap::Args;
use std::io::{self, Write};
use style_assessment::assessment::{
    compute_summary, describe, AnswerKey, DescriptionCatalog, ResponseSet, ResultSummary,
};
use style_assessment::error::AppError;

const BAR_WIDTH: usize = 40;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Comma separated answers, one letter (A-D) per question; leave blanks for skipped questions
    #[arg(long)]
    pub(crate) answers: String,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let responses = ResponseSet::from_letters(&args.answers)?;
    let summary = compute_summary(&responses, &AnswerKey::standard())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_summary(&mut out, &summary, &DescriptionCatalog::standard())?;
    Ok(())
}

/// Prints the results screen: dominant styles, the percentage chart and the
/// narrative for every dominant style.
pub(crate) fn render_summary<W: Write>(
    out: &mut W,
    summary: &ResultSummary,
    catalog: &DescriptionCatalog,
) -> Result<(), AppError> {
    writeln!(
        out,
        "Your dominant communication style: {}",
        summary.dominant_label()
    )?;

    writeln!(out, "\nStyle breakdown")?;
    for row in summary.chart_rows() {
        let filled = ((row.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        writeln!(
            out,
            "  {:<11} {}{} {:>6} ({})",
            row.category.label(),
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            row.percentage_label,
            row.count
        )?;
    }

    for category in summary.dominant() {
        let description = describe(*category, catalog)?;
        writeln!(out, "\n{}", description.title)?;
        writeln!(out, "Keywords: {}", description.keywords.join(", "))?;
        writeln!(out, "Typical behaviors:")?;
        for behavior in description.behaviors {
            writeln!(out, "  - {}", behavior)?;
        }
        writeln!(out, "Working with this style:")?;
        for tip in description.interaction_tips {
            writeln!(out, "  - {}", tip)?;
        }
    }

    Ok(())
}
