//! doccheck - A CLI tool that keeps module trees and their reference
//! documentation in lockstep
//!
//! This library provides the two checks behind the CLI: documentation
//! coverage (every module has exactly one page and vice versa) and the
//! markup scan (a deprecated cross-reference role appears nowhere).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod workspace;

pub use crate::core::CheckError;
pub use workspace::Workspace;
