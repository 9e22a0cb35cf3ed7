//! Initialize doccheck in a project

use std::path::Path;

use doccheck::adapters::toml::write_config;
use doccheck::config::DocCheckConfig;
use doccheck::output::{OperationResult, OutputMode};
use doccheck::paths;

/// Write `.doccheck.toml` with the default pairings and markup rules
pub fn init(root: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::config_file(root);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                paths::CONFIG_FILE
            ),
        }
        .render(mode);
        return Ok(());
    }

    let config = DocCheckConfig::default();
    write_config(&path, &config, force)?;
    log::debug!("wrote {}", path.display());

    OperationResult {
        success: true,
        message: format!(
            "Created {} with {} pairing(s).\n\nNext steps:\n  doccheck pairings   # review the layout\n  doccheck check      # run every check",
            paths::CONFIG_FILE,
            config.pairings.len()
        ),
    }
    .render(mode);

    Ok(())
}
