//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::{resolve_inputs, Input};

/// Pattern meaning "read from standard input"
pub const STDIN_MARKER: &str = "-";
