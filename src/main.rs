//! doccheck - A CLI tool that keeps module trees and their reference
//! documentation in lockstep
//!
//! Exit codes: 0 when every check passes, 1 when a check finds coverage
//! issues or forbidden markup, 2 when a check cannot run at all.

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

mod cli;
mod commands;

use std::process::ExitCode;

use commands::ChecksFailed;

/// Main entry point for the doccheck CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.downcast_ref::<ChecksFailed>().is_some() => {
            log::debug!("{err}");
            ExitCode::from(1)
        },
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        },
    }
}
