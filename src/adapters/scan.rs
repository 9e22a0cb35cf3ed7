//! Recursive tree search for the markup scan
//!
//! Walks the tree natively instead of shelling out to `grep`/`findstr`, so the
//! scan behaves the same on every platform.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::core::CheckError;
use crate::core::models::{Marker, MarkupHit};
use crate::core::ports::TreeSearch;
use crate::paths;

/// How many leading bytes are inspected for a NUL when sniffing binaries
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Directory names never descended into
const SKIP_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Tree search backed by `walkdir`
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkdirSearch;

impl WalkdirSearch {
    /// Create a new searcher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn is_vcs_dir(entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry.file_name().to_str().is_some_and(|name| SKIP_DIRS.contains(&name))
    }

    /// The config file spells out the marker it forbids
    fn is_config_file(entry: &walkdir::DirEntry) -> bool {
        entry.file_name().to_str() == Some(paths::CONFIG_FILE)
    }

    /// Read a file as text, or `None` if it looks binary
    fn read_text(path: &Path) -> Result<Option<String>, CheckError> {
        let bytes = fs::read(path)?;
        let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
        if sniff.contains(&0) {
            return Ok(None);
        }
        Ok(String::from_utf8(bytes).ok())
    }

    fn display_path(base: &Path, path: &Path) -> String {
        path.strip_prefix(base)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

impl TreeSearch for WalkdirSearch {
    fn search(
        &self,
        base: &Path,
        scan_root: &Path,
        marker: &Marker,
    ) -> Result<Vec<MarkupHit>, CheckError> {
        if !scan_root.exists() {
            return Err(CheckError::DirectoryNotFound(scan_root.to_path_buf()));
        }

        let mut hits = Vec::new();
        let mut files = 0usize;
        let mut binary = 0usize;
        let mut unreadable = 0usize;

        let walker = WalkDir::new(scan_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !Self::is_vcs_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {err}");
                    unreadable += 1;
                    continue;
                },
            };
            if !entry.file_type().is_file() || Self::is_config_file(&entry) {
                continue;
            }
            files += 1;

            let text = match Self::read_text(entry.path()) {
                Ok(Some(text)) => text,
                Ok(None) => {
                    binary += 1;
                    continue;
                },
                Err(err) => {
                    log::warn!("skipping {}: {err}", entry.path().display());
                    unreadable += 1;
                    continue;
                },
            };

            let shown = Self::display_path(base, entry.path());
            for (idx, line) in text.lines().enumerate() {
                if marker.is_match(line) {
                    hits.push(MarkupHit::new(&shown, Some(idx + 1), line));
                }
            }
        }

        log::debug!(
            "scanned {files} file(s) under {} ({binary} binary, {unreadable} unreadable skipped), {} hit(s)",
            scan_root.display(),
            hits.len()
        );
        Ok(hits)
    }
}
