//! Project configuration
//!
//! Describes which directories pair with which documentation trees and what
//! the markup scan forbids. Stored at `.doccheck.toml` in the project root;
//! when the file is absent the built-in defaults below are used.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::CheckError;
use crate::core::models::{DEFAULT_DOC_EXT, DEFAULT_MARKER, DEFAULT_SOURCE_EXT, Marker, Pairing};
use crate::core::services::MarkupRules;

/// Complete doccheck configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocCheckConfig {
    /// Project-wide defaults
    #[serde(default)]
    pub project: ProjectConfig,

    /// Coverage pairings
    #[serde(default, rename = "pairing")]
    pub pairings: Vec<PairingEntry>,

    /// Markup scan settings
    #[serde(default)]
    pub markup: MarkupConfig,
}

/// Project-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Extension of implementation files
    pub source_ext: String,

    /// Extension of documentation files
    pub doc_ext: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_ext: DEFAULT_SOURCE_EXT.to_string(),
            doc_ext: DEFAULT_DOC_EXT.to_string(),
        }
    }
}

/// A `[[pairing]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingEntry {
    /// Short name (e.g., "states")
    pub name: String,

    /// Module directory segments
    pub module_dir: Vec<String>,

    /// Documentation directory segments
    pub doc_dir: Vec<String>,

    /// Module names exempt from needing a page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub module_skip: Vec<String>,

    /// Page names exempt from needing a module
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_skip: Vec<String>,

    /// Dotted prefix to strip from page names (derived from `module_dir` if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_prefix: Option<String>,

    /// Per-pairing override of `project.source_ext`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ext: Option<String>,

    /// Per-pairing override of `project.doc_ext`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_ext: Option<String>,
}

/// `[markup]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Forbidden text
    pub marker: String,

    /// Treat `marker` as a regular expression
    pub regex: bool,

    /// Segments of the directory to scan, relative to the project root (empty = root)
    pub root: Vec<String>,

    /// Hits in paths containing any of these are ignored
    pub exclude_contains: Vec<String>,

    /// Hits in paths ending with any of these are ignored
    pub exclude_suffix: Vec<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            regex: false,
            root: Vec::new(),
            exclude_contains: strings(&["man", ".tox/", ".nox/", "artifacts/"]),
            exclude_suffix: strings(&[
                "test_doc.py",
                "doc/conf.py",
                "conventions/documentation.rst",
                "doc/topics/releases/2016.11.2.rst",
                "doc/topics/releases/2016.11.3.rst",
                "doc/topics/releases/2016.3.5.rst",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl PairingEntry {
    fn standard(name: &str, module_dir: &[&str], doc_kind: &str) -> Self {
        Self {
            name: name.to_string(),
            module_dir: strings(module_dir),
            doc_dir: strings(&["doc", "ref", doc_kind, "all"]),
            module_skip: strings(&["__init__"]),
            doc_skip: strings(&["index", "all"]),
            doc_prefix: None,
            source_ext: None,
            doc_ext: None,
        }
    }

    /// Resolve into a domain pairing, filling extensions from the project section
    #[must_use]
    pub fn to_pairing(&self, project: &ProjectConfig) -> Pairing {
        let mut pairing =
            Pairing::new(&self.name, self.module_dir.as_slice(), self.doc_dir.as_slice())
                .with_module_skip(self.module_skip.as_slice())
                .with_doc_skip(self.doc_skip.as_slice())
                .with_extensions(
                    self.source_ext.as_deref().unwrap_or(&project.source_ext),
                    self.doc_ext.as_deref().unwrap_or(&project.doc_ext),
                );
        if let Some(prefix) = &self.doc_prefix {
            pairing = pairing.with_doc_prefix(prefix);
        }
        pairing
    }
}

/// The seven reference-documentation trees of a Salt checkout
fn default_pairings() -> Vec<PairingEntry> {
    let mut modules = PairingEntry::standard("modules", &["salt", "modules"], "modules");
    modules.doc_skip = strings(&[
        "index",
        "group",
        "inspectlib",
        "inspectlib.collector",
        "inspectlib.dbhandle",
        "inspectlib.entities",
        "inspectlib.exceptions",
        "inspectlib.fsdb",
        "inspectlib.kiwiproc",
        "inspectlib.query",
        "kernelpkg",
        "pkg",
        "user",
    ]);

    vec![
        modules,
        PairingEntry::standard("states", &["salt", "states"], "states"),
        PairingEntry::standard("auth", &["salt", "auth"], "auth"),
        PairingEntry::standard("beacons", &["salt", "beacons"], "beacons"),
        PairingEntry::standard("cache", &["salt", "cache"], "cache"),
        PairingEntry::standard("clouds", &["salt", "cloud", "clouds"], "clouds"),
        PairingEntry::standard("engines", &["salt", "engines"], "engines"),
    ]
}

impl Default for DocCheckConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            pairings: default_pairings(),
            markup: MarkupConfig::default(),
        }
    }
}

impl DocCheckConfig {
    /// All pairings, resolved and validated
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidPairing`] for an unusable entry or a
    /// duplicated name.
    pub fn pairings(&self) -> Result<Vec<Pairing>, CheckError> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(self.pairings.len());

        for entry in &self.pairings {
            let pairing = entry.to_pairing(&self.project);
            pairing.validate()?;
            if !seen.insert(pairing.name.clone()) {
                return Err(CheckError::InvalidPairing {
                    name: pairing.name,
                    reason: "name is used more than once".to_string(),
                });
            }
            resolved.push(pairing);
        }

        Ok(resolved)
    }

    /// The named pairings in the order requested, or all of them when `names` is empty
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnknownPairing`] for a name that is not configured.
    pub fn select(&self, names: &[String]) -> Result<Vec<Pairing>, CheckError> {
        let all = self.pairings()?;
        if names.is_empty() {
            return Ok(all);
        }

        names
            .iter()
            .map(|name| {
                all.iter()
                    .find(|p| &p.name == name)
                    .cloned()
                    .ok_or_else(|| CheckError::UnknownPairing(name.clone()))
            })
            .collect()
    }

    /// Exclusion rules for the markup scan
    #[must_use]
    pub fn markup_rules(&self) -> MarkupRules {
        MarkupRules {
            exclude_contains: self.markup.exclude_contains.clone(),
            exclude_suffix: self.markup.exclude_suffix.clone(),
        }
    }

    /// The compiled marker
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidMarker`] when `regex = true` and the
    /// pattern does not compile.
    pub fn marker(&self) -> Result<Marker, CheckError> {
        Marker::new(&self.markup.marker, self.markup.regex)
    }

    /// Directory the markup scan starts from
    #[must_use]
    pub fn scan_root(&self, project_root: &Path) -> PathBuf {
        self.markup.root.iter().fold(project_root.to_path_buf(), |p, s| p.join(s))
    }
}
