//! Command implementations

mod check;
mod coverage;
mod init;
mod markup;
mod pairings;

pub use check::check;
pub use coverage::coverage;
pub use init::init;
pub use markup::markup;
pub use pairings::pairings;

use thiserror::Error;

/// A check ran to completion and found problems
///
/// The report has already been printed; `main` turns this into exit code 1.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ChecksFailed(pub String);
