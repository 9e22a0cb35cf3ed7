//! Business logic services
//!
//! Pure orchestration over the port traits. Nothing here touches the
//! filesystem directly.
//!
//! - [`coverage`] - Compare a module directory against its doc directory
//! - [`markup`] - Filter and group forbidden-marker hits

pub mod coverage;
pub mod markup;

pub use coverage::{Collision, CoverageOutcome, check_pairing, compare, doc_names, module_names};
pub use markup::{GrepParse, MarkupRules, group_hits, parse_grep_output, split_grep_line};
