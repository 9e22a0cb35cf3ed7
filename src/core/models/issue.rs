//! Coverage issue model

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Which side of a pairing is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A module has no page
    MissingDoc,
    /// A page has no module
    OrphanDoc,
}

/// One name present on only one side of a pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageIssue {
    /// Name of the pairing that produced the issue
    pub pairing: String,

    /// Which side is missing
    pub kind: IssueKind,

    /// Bare module name (prefix and extension stripped)
    pub name: String,

    /// Directory where the missing counterpart was expected
    pub expected_dir: PathBuf,
}

impl CoverageIssue {
    /// The labeled failure message for this issue
    #[must_use]
    pub fn message(&self) -> String {
        match self.kind {
            IssueKind::MissingDoc => format!(
                "module file {} is missing documentation in {}",
                self.name,
                self.expected_dir.display()
            ),
            IssueKind::OrphanDoc => format!(
                "Doc file {} is missing associated module in {}",
                self.name,
                self.expected_dir.display()
            ),
        }
    }
}

impl fmt::Display for CoverageIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
