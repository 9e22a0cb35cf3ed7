//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that touch the disk:
//!
//! - `fs` - Directory listing for the coverage check
//! - `scan` - Recursive tree search for the markup scan
//! - `toml` - `.doccheck.toml` loading and writing

pub mod fs;
pub mod scan;
pub mod toml;

pub use fs::FsDirectoryListing;
pub use scan::WalkdirSearch;
