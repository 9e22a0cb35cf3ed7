//! Tree search port

use std::path::Path;

use crate::core::CheckError;
use crate::core::models::{Marker, MarkupHit};

/// Searches a directory tree for lines containing a marker
pub trait TreeSearch {
    /// Find every line under `scan_root` that matches `marker`
    ///
    /// Hit paths are reported relative to `base` so exclusion rules written
    /// against the project layout keep working when `scan_root` is a subdirectory.
    fn search(
        &self,
        base: &Path,
        scan_root: &Path,
        marker: &Marker,
    ) -> Result<Vec<MarkupHit>, CheckError>;
}
