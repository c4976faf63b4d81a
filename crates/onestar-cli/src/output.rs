//! Output renderers for the run summary.

use anyhow::anyhow;
use onestar_fsops::PruneReport;
use onestar_library::RunCounters;
use tracing::info;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_summary(report: &PruneReport, format: OutputFormat) -> CliResult<()> {
    let counters = report.counters;
    info!(
        scanned = counters.scanned,
        kept = counters.kept,
        deleted = counters.deleted,
        flagged = counters.flagged,
        not_found = counters.not_found,
        failed = counters.failed,
        skipped = counters.skipped,
        "run complete"
    );

    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(report)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        OutputFormat::Table => print!("{}", format_summary(&counters)),
    }
    Ok(())
}

pub(crate) fn format_summary(counters: &RunCounters) -> String {
    let rows = [
        ("Total File Count", counters.scanned),
        ("Kept Show Files", counters.kept),
        ("Deleted Files", counters.deleted),
        ("Flagged Files", counters.flagged),
        ("Not Found", counters.not_found),
        ("Delete Errors", counters.failed),
    ];
    rows.iter()
        .map(|(label, value)| format!("{label:<17}: {value}\n"))
        .collect()
}
