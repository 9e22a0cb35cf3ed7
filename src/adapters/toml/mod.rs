//! TOML-backed configuration
//!
//! - [`parser`] - Read and deserialize `.doccheck.toml`
//! - [`writer`] - Render and write `.doccheck.toml`

pub mod parser;
pub mod writer;

pub use parser::{ConfigSource, load_file, load_or_default};
pub use writer::{format_config, write_config};
