//! Directory listing port

use std::path::Path;

use crate::core::CheckError;

/// Lists the files directly inside a directory
pub trait DirectoryListing {
    /// Return the file names (not paths) of regular files in `dir`
    ///
    /// Subdirectories are not included. A missing `dir` is
    /// [`CheckError::DirectoryNotFound`], never an empty list.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, CheckError>;
}
