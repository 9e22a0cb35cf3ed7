//! Markup service - decides which marker hits count
//!
//! Hits come either from a native tree walk or from `grep -r` output. Both
//! paths run through the same exclusion rules before grouping by file.

use std::collections::BTreeMap;

use crate::core::models::MarkupHit;

/// Paths exempt from the markup scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupRules {
    /// A hit is dropped if its path contains any of these
    pub exclude_contains: Vec<String>,
    /// A hit is dropped if its path ends with any of these
    pub exclude_suffix: Vec<String>,
}

impl MarkupRules {
    /// Whether hits in `path` are grandfathered
    ///
    /// Paths and rules are compared with `/` separators on every platform.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        let path = path.replace('\\', "/");
        self.exclude_contains.iter().any(|frag| path.contains(&frag.replace('\\', "/")))
            || self.exclude_suffix.iter().any(|sfx| path.ends_with(&sfx.replace('\\', "/")))
    }

    /// Drop every excluded hit
    #[must_use]
    pub fn filter(&self, hits: Vec<MarkupHit>) -> Vec<MarkupHit> {
        hits.into_iter()
            .filter(|h| {
                let excluded = self.is_excluded(&h.path);
                if excluded {
                    log::debug!("excluded: {}", h.path);
                }
                !excluded
            })
            .collect()
    }
}

/// Split one `grep -r` record into `(path, text)`
///
/// The split happens at the first `:` that is not followed by `\`, so a
/// Windows drive letter (`C:\salt\x.py:...`) stays part of the path.
#[must_use]
pub fn split_grep_line(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    bytes
        .iter()
        .enumerate()
        .find(|&(i, &b)| b == b':' && bytes.get(i + 1) != Some(&b'\\'))
        .map(|(i, _)| (&line[..i], &line[i + 1..]))
}

/// Hits recovered from grep output, plus the lines that could not be used
#[derive(Debug, Clone, Default)]
pub struct GrepParse {
    /// Hits that survived exclusion
    pub hits: Vec<MarkupHit>,
    /// Lines without a usable separator
    pub unparsed: Vec<String>,
    /// `Binary file ... matches` lines
    pub binary: usize,
}

/// Turn `grep -r` output into hits
///
/// `Binary ...` lines and blank lines are skipped. Lines that cannot be split
/// are logged and collected, never fatal.
#[must_use]
pub fn parse_grep_output(output: &str, rules: &MarkupRules) -> GrepParse {
    let mut parsed = GrepParse::default();
    let mut hits = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("Binary") {
            parsed.binary += 1;
            continue;
        }
        match split_grep_line(line) {
            Some((path, text)) => hits.push(MarkupHit::new(path, None, text)),
            None => {
                log::error!("Could not split line: {line}");
                parsed.unparsed.push(line.to_string());
            },
        }
    }

    parsed.hits = rules.filter(hits);
    parsed
}

/// Group hits by file, keeping every fragment in order
#[must_use]
pub fn group_hits(hits: &[MarkupHit]) -> BTreeMap<String, Vec<MarkupHit>> {
    let mut grouped: BTreeMap<String, Vec<MarkupHit>> = BTreeMap::new();
    for hit in hits {
        grouped.entry(hit.path.clone()).or_default().push(hit.clone());
    }
    grouped
}
