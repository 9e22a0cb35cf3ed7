//! Run every documentation check

use std::path::Path;

use doccheck::Workspace;
use doccheck::output::{CheckSummary, CoverageReport, MarkupReport, OutputMode};

use super::ChecksFailed;

/// Run coverage for every pairing, then the markup scan
///
/// Both checks always run so one report shows every problem.
pub fn check(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = Workspace::open(root)?;
    log::debug!("config: {}", workspace.source());

    let outcomes = workspace.coverage(&[])?;
    let coverage = CoverageReport::from_outcomes(&outcomes);

    let marker = workspace.config().marker()?;
    let hits = workspace.markup()?;
    let markup = MarkupReport::new(marker.as_str(), &hits, Vec::new());

    let summary = CheckSummary::new(coverage, markup);
    summary.render(mode);

    if !summary.passed {
        return Err(ChecksFailed(format!(
            "{} coverage issue(s), {} markup occurrence(s)",
            summary.coverage.issue_count(),
            summary.markup.hit_count
        ))
        .into());
    }
    Ok(())
}
