//! Markup hit model

use serde::Serialize;

/// One occurrence of the forbidden marker
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MarkupHit {
    /// File path, `/`-separated, relative to the project root when known
    pub path: String,

    /// 1-indexed line number (absent for hits read from grep output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// The offending line, trimmed
    pub fragment: String,
}

impl MarkupHit {
    /// Create a hit, normalizing separators and trimming the fragment
    pub fn new(path: impl AsRef<str>, line: Option<usize>, fragment: impl AsRef<str>) -> Self {
        Self {
            path: path.as_ref().replace('\\', "/"),
            line,
            fragment: fragment.as_ref().trim().to_string(),
        }
    }
}
