//! Documentation coverage for one or more pairings

use std::path::Path;

use doccheck::Workspace;
use doccheck::output::{CoverageReport, OutputMode};

use super::ChecksFailed;

/// Check the named pairings (all when `names` is empty)
pub fn coverage(root: &Path, names: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let workspace = Workspace::open(root)?;
    log::debug!("config: {}", workspace.source());

    let outcomes = workspace.coverage(names)?;
    let report = CoverageReport::from_outcomes(&outcomes);
    report.render(mode);

    if !report.passed {
        return Err(ChecksFailed(format!("{} coverage issue(s)", report.issue_count())).into());
    }
    Ok(())
}
