//! List configured pairings

use std::path::Path;

use doccheck::Workspace;
use doccheck::output::{OutputMode, PairingInfo, PairingListResult};

/// Show every pairing as resolved under the project root
pub fn pairings(root: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = Workspace::open(root)?;
    let pairings = workspace.config().pairings()?;

    PairingListResult {
        source: workspace.source().to_string(),
        pairings: pairings.iter().map(|p| PairingInfo::new(p, workspace.root())).collect(),
    }
    .render(mode);

    Ok(())
}
