//! Output formatting for human and JSON modes
//!
//! This module provides structured results that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{IssueKind, MarkupHit, Pairing};
use crate::core::services::{CoverageOutcome, group_hits};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn status_tag(passed: bool) -> String {
    if passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    }
}

// =============================================================================
// Coverage
// =============================================================================

/// Result of checking one pairing
#[derive(Debug, Clone, Serialize)]
pub struct PairingReport {
    /// Pairing name
    pub name: String,
    /// Whether both sides matched
    pub passed: bool,
    /// Modules compared
    pub modules_checked: usize,
    /// Pages compared
    pub docs_checked: usize,
    /// Modules with no page
    pub missing_docs: Vec<String>,
    /// Pages with no module
    pub orphan_docs: Vec<String>,
    /// Labeled failure messages, one per issue
    pub messages: Vec<String>,
    /// Bare names produced by more than one page file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collisions: Vec<String>,
}

impl From<&CoverageOutcome> for PairingReport {
    fn from(outcome: &CoverageOutcome) -> Self {
        let names = |kind: IssueKind| -> Vec<String> {
            outcome.issues_of(kind).map(|i| i.name.clone()).collect()
        };
        Self {
            name: outcome.pairing.clone(),
            passed: outcome.passed(),
            modules_checked: outcome.modules_checked,
            docs_checked: outcome.docs_checked,
            missing_docs: names(IssueKind::MissingDoc),
            orphan_docs: names(IssueKind::OrphanDoc),
            messages: outcome.issues.iter().map(|i| i.message()).collect(),
            collisions: outcome
                .collisions
                .iter()
                .map(|c| format!("{} <- {}", c.name, c.files.join(", ")))
                .collect(),
        }
    }
}

/// Result of a coverage run over one or more pairings
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Whether every pairing passed
    pub passed: bool,
    /// Per-pairing results, in run order
    pub pairings: Vec<PairingReport>,
}

impl CoverageReport {
    /// Build a report from service outcomes
    #[must_use]
    pub fn from_outcomes(outcomes: &[CoverageOutcome]) -> Self {
        let pairings: Vec<PairingReport> = outcomes.iter().map(PairingReport::from).collect();
        Self {
            passed: pairings.iter().all(|p| p.passed),
            pairings,
        }
    }

    /// Total issues across all pairings
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.pairings.iter().map(|p| p.messages.len()).sum()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Documentation coverage:\n");
        for p in &self.pairings {
            println!(
                "  [{}] {} ({} module(s), {} page(s))",
                status_tag(p.passed),
                p.name,
                p.modules_checked,
                p.docs_checked
            );
            for message in &p.messages {
                println!("          {message}");
            }
            for collision in &p.collisions {
                println!("          note: {collision}");
            }
        }
        println!();

        if self.passed {
            println!("All {} pairing(s) covered.", self.pairings.len());
        } else {
            println!("FAILED: {} coverage issue(s)", self.issue_count());
        }
    }
}

// =============================================================================
// Markup
// =============================================================================

/// One hit inside a file
#[derive(Debug, Clone, Serialize)]
pub struct HitInfo {
    /// 1-indexed line, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The offending line, trimmed
    pub fragment: String,
}

impl From<MarkupHit> for HitInfo {
    fn from(hit: MarkupHit) -> Self {
        Self {
            line: hit.line,
            fragment: hit.fragment,
        }
    }
}

/// Result of a markup scan
#[derive(Debug, Clone, Serialize)]
pub struct MarkupReport {
    /// Whether no hits remained after exclusion
    pub passed: bool,
    /// The forbidden marker
    pub marker: String,
    /// Total hits
    pub hit_count: usize,
    /// Hits grouped by file, every fragment kept
    pub files: BTreeMap<String, Vec<HitInfo>>,
    /// Grep lines that could not be split
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unparsed: Vec<String>,
}

impl MarkupReport {
    /// Build a report from the surviving hits
    #[must_use]
    pub fn new(marker: &str, hits: &[MarkupHit], unparsed: Vec<String>) -> Self {
        let files = group_hits(hits)
            .into_iter()
            .map(|(path, hits)| (path, hits.into_iter().map(HitInfo::from).collect()))
            .collect();
        Self {
            passed: hits.is_empty(),
            marker: marker.to_string(),
            hit_count: hits.len(),
            files,
            unparsed,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Markup scan for '{}':\n", self.marker);
        for (path, hits) in &self.files {
            println!("  [{}] {path}", status_tag(false));
            for hit in hits {
                match hit.line {
                    Some(line) => println!("          {line}: {}", hit.fragment),
                    None => println!("          {}", hit.fragment),
                }
            }
        }
        for line in &self.unparsed {
            println!("  could not parse: {line}");
        }

        if self.passed {
            println!("  [{}] no occurrences\n", status_tag(true));
        } else {
            println!();
            println!(
                "FAILED: {} occurrence(s) of '{}' in {} file(s)",
                self.hit_count,
                self.marker,
                self.files.len()
            );
        }
    }
}

// =============================================================================
// Combined
// =============================================================================

/// Result of `doccheck check`: every pairing plus the markup scan
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    /// Whether both checks passed
    pub passed: bool,
    /// Coverage results
    pub coverage: CoverageReport,
    /// Markup results
    pub markup: MarkupReport,
}

impl CheckSummary {
    /// Combine the two reports
    #[must_use]
    pub fn new(coverage: CoverageReport, markup: MarkupReport) -> Self {
        Self {
            passed: coverage.passed && markup.passed,
            coverage,
            markup,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                self.coverage.render_human();
                println!();
                self.markup.render_human();
                println!();
                if self.passed {
                    println!("{} all documentation checks passed.", status_tag(true));
                } else {
                    println!("{} documentation checks failed.", status_tag(false));
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

// =============================================================================
// Listing and simple operations
// =============================================================================

/// Information about a configured pairing
#[derive(Debug, Clone, Serialize)]
pub struct PairingInfo {
    /// Pairing name
    pub name: String,
    /// Resolved module directory
    pub module_dir: String,
    /// Resolved documentation directory
    pub doc_dir: String,
    /// Prefix stripped from page names
    pub doc_prefix: String,
    /// Source extension
    pub source_ext: String,
    /// Documentation extension
    pub doc_ext: String,
    /// Module skip-list
    pub module_skip: Vec<String>,
    /// Doc skip-list
    pub doc_skip: Vec<String>,
}

impl PairingInfo {
    /// Describe `pairing` as resolved under `root`
    #[must_use]
    pub fn new(pairing: &Pairing, root: &Path) -> Self {
        Self {
            name: pairing.name.clone(),
            module_dir: pairing.module_path(root).display().to_string(),
            doc_dir: pairing.doc_path(root).display().to_string(),
            doc_prefix: pairing.effective_doc_prefix(),
            source_ext: pairing.source_ext.clone(),
            doc_ext: pairing.doc_ext.clone(),
            module_skip: pairing.module_skip.iter().cloned().collect(),
            doc_skip: pairing.doc_skip.iter().cloned().collect(),
        }
    }
}

/// Result of listing pairings
#[derive(Debug, Clone, Serialize)]
pub struct PairingListResult {
    /// Where the configuration came from
    pub source: String,
    /// Configured pairings
    pub pairings: Vec<PairingInfo>,
}

impl PairingListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Pairings ({}):\n", self.source);
        if self.pairings.is_empty() {
            println!("  No pairings configured.");
            return;
        }
        for p in &self.pairings {
            println!("  {}", p.name.bold());
            println!("    modules: {}/*.{}", p.module_dir, p.source_ext);
            println!("    docs:    {}/{}*.{}", p.doc_dir, p.doc_prefix, p.doc_ext);
            if !p.module_skip.is_empty() {
                println!("    skip modules: {}", p.module_skip.join(", "));
            }
            if !p.doc_skip.is_empty() {
                println!("    skip docs:    {}", p.doc_skip.join(", "));
            }
            println!();
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
