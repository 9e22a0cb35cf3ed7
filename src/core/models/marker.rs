//! Forbidden marker
//!
//! The marker is a plain substring by default (`:doc:`); it can also be a
//! regular expression for projects that need to forbid a family of roles.

use regex::Regex;

use crate::core::CheckError;

/// Default deprecated cross-reference markup
pub const DEFAULT_MARKER: &str = ":doc:";

/// Text whose presence in a line counts as a hit
#[derive(Debug, Clone)]
pub enum Marker {
    /// Plain substring
    Literal(String),
    /// Compiled regular expression
    Pattern(Regex),
}

impl Marker {
    /// Build a marker, compiling it when `is_regex` is set
    pub fn new(text: &str, is_regex: bool) -> Result<Self, CheckError> {
        if is_regex {
            Ok(Self::Pattern(Regex::new(text)?))
        } else {
            Ok(Self::Literal(text.to_string()))
        }
    }

    /// Whether `line` contains the marker
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Literal(s) => line.contains(s.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }

    /// The marker as written in config
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Pattern(re) => re.as_str(),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::Literal(DEFAULT_MARKER.to_string())
    }
}
