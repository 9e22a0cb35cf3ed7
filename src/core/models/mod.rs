//! Domain models for doccheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Pairing`] - A module directory and the doc directory that must mirror it
//! - [`CoverageIssue`] - One name present on one side of a pairing only
//! - [`MarkupHit`] - One occurrence of the forbidden marker
//! - [`Marker`] - The forbidden text, literal or regex

mod hit;
mod issue;
mod marker;
mod pairing;

pub use hit::MarkupHit;
pub use issue::{CoverageIssue, IssueKind};
pub use marker::{DEFAULT_MARKER, Marker};
pub use pairing::{DEFAULT_DOC_EXT, DEFAULT_SOURCE_EXT, Pairing};
