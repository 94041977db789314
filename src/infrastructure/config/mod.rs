//! Positional input file handling
//!
//! - Line sanitizing
//! - Schema-ordered loading into a `ConfigRecord`
//! - Template and record rendering

pub mod loader;
pub mod sanitizer;
pub mod template;

pub use loader::{ConfigError, ConfigLoader, IntegerPolicy, LoaderOptions, COMMENT_MARKER};
pub use sanitizer::{LineSanitizer, WhitespaceStripper};
pub use template::{render_record, render_template};
