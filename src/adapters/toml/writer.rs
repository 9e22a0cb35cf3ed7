//! TOML writer for .doccheck.toml files

use std::fs;
use std::path::Path;

use crate::config::DocCheckConfig;

const HEADER: &str = "\
# doccheck configuration
#
# Each [[pairing]] names a module directory and the documentation directory
# that must hold exactly one page per module. Page names are compared after
# stripping doc_prefix (default: module_dir joined with '.', plus '.').
#
# [markup] forbids a marker anywhere under root, except in excluded paths.

";

/// Render a config as TOML, with an explanatory header
///
/// # Errors
///
/// Returns an error if the config cannot be serialized.
pub fn format_config(config: &DocCheckConfig) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(config)?;
    Ok(format!("{HEADER}{body}"))
}

/// Write `config` to `path`
///
/// Refuses to replace an existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if the file exists (without `force`) or cannot be written.
pub fn write_config(path: &Path, config: &DocCheckConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    fs::write(path, format_config(config)?)?;
    Ok(())
}
