//! Filesystem directory listing

use std::fs;
use std::path::Path;

use crate::core::CheckError;
use crate::core::ports::DirectoryListing;

/// Lists directories with `std::fs::read_dir`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryListing;

impl FsDirectoryListing {
    /// Create a new lister
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DirectoryListing for FsDirectoryListing {
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, CheckError> {
        if !dir.exists() {
            return Err(CheckError::DirectoryNotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(CheckError::NotADirectory(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks, so a linked module still counts as a file
            if !entry.path().is_file() {
                continue;
            }
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
        files.sort();

        log::trace!("{}: {} file(s)", dir.display(), files.len());
        Ok(files)
    }
}
