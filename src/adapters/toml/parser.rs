//! TOML parser for .doccheck.toml files

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DocCheckConfig;
use crate::core::CheckError;
use crate::paths;

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file found; built-in defaults
    Defaults,
    /// Supplied directly by the caller
    Provided,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
            Self::Provided => write!(f, "provided config"),
        }
    }
}

/// Load a config file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<DocCheckConfig, CheckError> {
    let content = fs::read_to_string(path)?;
    let config: DocCheckConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load `.doccheck.toml` from `root`, falling back to defaults when it is absent
///
/// # Errors
///
/// A file that exists but cannot be read or parsed is an error; it is never
/// silently replaced by defaults.
pub fn load_or_default(root: &Path) -> Result<(DocCheckConfig, ConfigSource), CheckError> {
    let path = paths::config_file(root);
    if path.is_file() {
        log::debug!("loading config from {}", path.display());
        let config = load_file(&path)?;
        Ok((config, ConfigSource::File(path)))
    } else {
        log::info!("no {} in {}, using built-in defaults", paths::CONFIG_FILE, root.display());
        Ok((DocCheckConfig::default(), ConfigSource::Defaults))
    }
}
