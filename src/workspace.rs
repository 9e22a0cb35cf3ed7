//! A project root with its configuration
//!
//! Wires the real filesystem adapters to the core services. Commands and
//! library users go through here rather than assembling ports themselves.

use std::path::{Path, PathBuf};

use crate::adapters::toml::{ConfigSource, load_or_default};
use crate::adapters::{FsDirectoryListing, WalkdirSearch};
use crate::config::DocCheckConfig;
use crate::core::CheckError;
use crate::core::models::MarkupHit;
use crate::core::ports::TreeSearch;
use crate::core::services::{CoverageOutcome, GrepParse, check_pairing, parse_grep_output};

/// A project root and the configuration that applies to it
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: DocCheckConfig,
    source: ConfigSource,
}

impl Workspace {
    /// Open `root`, reading `.doccheck.toml` if present
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is missing or the config file is malformed.
    pub fn open(root: &Path) -> Result<Self, CheckError> {
        if !root.exists() {
            return Err(CheckError::DirectoryNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(CheckError::NotADirectory(root.to_path_buf()));
        }
        let (config, source) = load_or_default(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
            source,
        })
    }

    /// Use an explicit configuration instead of reading one from disk
    #[must_use]
    pub fn with_config(root: &Path, config: DocCheckConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            source: ConfigSource::Provided,
        }
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DocCheckConfig {
        &self.config
    }

    /// Where the configuration came from
    #[must_use]
    pub const fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Run the coverage check for the named pairings (all when `names` is empty)
    ///
    /// # Errors
    ///
    /// Stops at the first pairing that cannot be checked (unknown name,
    /// missing directory). Mismatches are returned in the outcomes.
    pub fn coverage(&self, names: &[String]) -> Result<Vec<CoverageOutcome>, CheckError> {
        let listing = FsDirectoryListing::new();
        self.config
            .select(names)?
            .iter()
            .map(|pairing| check_pairing(&listing, &self.root, pairing))
            .collect()
    }

    /// Walk the scan root and return every non-excluded marker hit
    ///
    /// # Errors
    ///
    /// Returns an error if the marker is invalid or the tree cannot be walked.
    pub fn markup(&self) -> Result<Vec<MarkupHit>, CheckError> {
        let marker = self.config.marker()?;
        let scan_root = self.config.scan_root(&self.root);
        let hits = WalkdirSearch::new().search(&self.root, &scan_root, &marker)?;
        Ok(self.config.markup_rules().filter(hits))
    }

    /// Apply the exclusion rules to pre-computed `grep -r` output
    #[must_use]
    pub fn markup_from_grep(&self, output: &str) -> GrepParse {
        parse_grep_output(output, &self.config.markup_rules())
    }
}
