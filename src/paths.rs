//! Centralized path definitions for doccheck
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── .doccheck.toml          # Pairings and markup rules (optional)
//! ├── salt/states/*.py        # A module directory
//! └── doc/ref/states/all/     # Its documentation directory
//!     └── salt.states.*.rst
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".doccheck.toml";

/// Get path to `.doccheck.toml` under `root`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
