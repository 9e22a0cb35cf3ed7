//! Pairing model
//!
//! A pairing says: "every module in this directory has a page in that one,
//! and every page there has a module here."

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::CheckError;

/// Default extension of implementation files
pub const DEFAULT_SOURCE_EXT: &str = "py";

/// Default extension of documentation files
pub const DEFAULT_DOC_EXT: &str = "rst";

/// A module directory paired with its documentation directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Short name used on the command line (e.g., "states")
    pub name: String,

    /// Path segments of the module directory, relative to the project root
    pub module_dir: Vec<String>,

    /// Path segments of the documentation directory, relative to the project root
    pub doc_dir: Vec<String>,

    /// Module names exempt from needing a page
    pub module_skip: BTreeSet<String>,

    /// Page names exempt from needing a module (compared after prefix stripping)
    pub doc_skip: BTreeSet<String>,

    /// Explicit dotted prefix; derived from `module_dir` when `None`
    pub doc_prefix: Option<String>,

    /// Extension marking implementation files, without the dot
    pub source_ext: String,

    /// Extension marking documentation files, without the dot
    pub doc_ext: String,
}

impl Pairing {
    /// Create a pairing with empty skip-lists and default extensions
    pub fn new<S: AsRef<str>>(name: &str, module_dir: &[S], doc_dir: &[S]) -> Self {
        Self {
            name: name.to_string(),
            module_dir: module_dir.iter().map(|s| s.as_ref().to_string()).collect(),
            doc_dir: doc_dir.iter().map(|s| s.as_ref().to_string()).collect(),
            module_skip: BTreeSet::new(),
            doc_skip: BTreeSet::new(),
            doc_prefix: None,
            source_ext: DEFAULT_SOURCE_EXT.to_string(),
            doc_ext: DEFAULT_DOC_EXT.to_string(),
        }
    }

    /// Replace the module skip-list
    #[must_use]
    pub fn with_module_skip<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.module_skip = names.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Replace the doc skip-list
    #[must_use]
    pub fn with_doc_skip<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.doc_skip = names.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Set an explicit doc prefix
    #[must_use]
    pub fn with_doc_prefix(mut self, prefix: &str) -> Self {
        self.doc_prefix = Some(prefix.to_string());
        self
    }

    /// Set the source and doc extensions (leading dots are dropped)
    #[must_use]
    pub fn with_extensions(mut self, source_ext: &str, doc_ext: &str) -> Self {
        self.source_ext = source_ext.trim_start_matches('.').to_string();
        self.doc_ext = doc_ext.trim_start_matches('.').to_string();
        self
    }

    /// The prefix stripped from page names before comparison
    ///
    /// `["salt", "states"]` yields `"salt.states."`.
    #[must_use]
    pub fn effective_doc_prefix(&self) -> String {
        self.doc_prefix.clone().unwrap_or_else(|| format!("{}.", self.module_dir.join(".")))
    }

    /// Absolute module directory under `root`
    #[must_use]
    pub fn module_path(&self, root: &Path) -> PathBuf {
        self.module_dir.iter().fold(root.to_path_buf(), |p, s| p.join(s))
    }

    /// Absolute documentation directory under `root`
    #[must_use]
    pub fn doc_path(&self, root: &Path) -> PathBuf {
        self.doc_dir.iter().fold(root.to_path_buf(), |p, s| p.join(s))
    }

    /// Reject pairings that cannot name a directory or a file type
    pub fn validate(&self) -> Result<(), CheckError> {
        let invalid = |reason: &str| CheckError::InvalidPairing {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.module_dir.is_empty() || self.module_dir.iter().any(String::is_empty) {
            return Err(invalid("module_dir needs at least one non-empty segment"));
        }
        if self.doc_dir.is_empty() || self.doc_dir.iter().any(String::is_empty) {
            return Err(invalid("doc_dir needs at least one non-empty segment"));
        }
        if self.source_ext.is_empty() || self.doc_ext.is_empty() {
            return Err(invalid("extensions must not be empty"));
        }
        Ok(())
    }
}
