use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument, trace, warn};

use super::sanitizer::{LineSanitizer, WhitespaceStripper};
use crate::domain::models::schema::{self, FieldAccess, FieldSpec};
use crate::domain::models::{ConfigRecord, LoaderSettings, DEFAULT_MAX_FIELD_LEN, SCHEMA_LEN};

/// Marks a comment line, or the start of a trailing comment.
pub const COMMENT_MARKER: char = '#';

/// Input file loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open input file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input file {path} at line {line}: {source}")]
    FileRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("Error reading input file {path}: records read={actual} != expected={expected}")]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("Value for {field} (slot {slot}) in {path} is {len} bytes, longer than the {max} byte limit")]
    FieldTooLong {
        path: PathBuf,
        slot: usize,
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Invalid integer for {field} (slot {slot}) in {path}: {value:?}")]
    FieldParse {
        path: PathBuf,
        slot: usize,
        field: &'static str,
        value: String,
    },
}

impl ConfigError {
    /// Process exit status for this error; `0` is reserved for success.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::FileOpen { .. } | Self::FileRead { .. } => 1,
            Self::SchemaMismatch { .. } => 2,
            Self::FieldTooLong { .. } | Self::FieldParse { .. } => 3,
        }
    }

    /// The input file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileOpen { path, .. }
            | Self::FileRead { path, .. }
            | Self::SchemaMismatch { path, .. }
            | Self::FieldTooLong { path, .. }
            | Self::FieldParse { path, .. } => path,
        }
    }
}

/// What to do with an integer slot whose text is not a clean integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegerPolicy {
    /// Keep the leading digits (`"2005a"` is 2005, `"abc"` is 0) and warn
    #[default]
    Lenient,
    /// Fail the load with [`ConfigError::FieldParse`]
    Strict,
}

/// Loader tuning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Longest accepted value, in bytes
    pub max_field_len: usize,
    /// Integer slot handling
    pub integer_policy: IntegerPolicy,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            integer_policy: IntegerPolicy::default(),
        }
    }
}

impl From<&LoaderSettings> for LoaderOptions {
    fn from(settings: &LoaderSettings) -> Self {
        Self {
            max_field_len: settings.max_field_len,
            integer_policy: if settings.strict_integers {
                IntegerPolicy::Strict
            } else {
                IntegerPolicy::Lenient
            },
        }
    }
}

/// Positional input file loader
///
/// Each non-blank, non-comment line fills the next slot of
/// [`schema::SCHEMA`]. A record is returned only when exactly
/// [`SCHEMA_LEN`] value lines were read.
pub struct ConfigLoader {
    options: LoaderOptions,
    sanitizer: Box<dyn LineSanitizer>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Load an input file with default options
    pub fn load(path: impl AsRef<Path>) -> Result<ConfigRecord, ConfigError> {
        Self::new().load_file(path)
    }

    /// Create a loader with default options and the whitespace stripper
    pub fn new() -> Self {
        Self::with_options(LoaderOptions::default())
    }

    /// Create a loader with the given options
    pub fn with_options(options: LoaderOptions) -> Self {
        Self {
            options,
            sanitizer: Box::new(WhitespaceStripper),
        }
    }

    /// Replace the line sanitizer
    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: impl LineSanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// The options this loader runs with
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load the input file at `path`
    ///
    /// The file handle is closed when this returns, on success and on
    /// every error path.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ConfigRecord, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_reader(BufReader::new(file), path)
    }

    /// Scan already-open input; `origin` names it in errors
    pub fn load_reader<R: BufRead>(
        &self,
        reader: R,
        origin: &Path,
    ) -> Result<ConfigRecord, ConfigError> {
        let mut record = ConfigRecord::default();
        let mut count = 0;

        for (index, line) in reader.lines().enumerate() {
            let raw = line.map_err(|source| ConfigError::FileRead {
                path: origin.to_path_buf(),
                line: index + 1,
                source,
            })?;

            let clean: &str = &self.sanitizer.sanitize(&raw);
            if clean.is_empty() || clean.starts_with(COMMENT_MARKER) {
                continue;
            }

            let value = clean.find(COMMENT_MARKER).map_or(clean, |end| &clean[..end]);

            count += 1;
            match schema::slot(count) {
                Some(spec) => self.assign(&mut record, spec, value, origin)?,
                None => trace!(slot = count, line = index + 1, "discarding value past the last slot"),
            }
        }

        if count != SCHEMA_LEN {
            return Err(ConfigError::SchemaMismatch {
                path: origin.to_path_buf(),
                expected: SCHEMA_LEN,
                actual: count,
            });
        }

        info!(
            path = %origin.display(),
            records = count,
            diagnostics = record.diagnostics_enabled(),
            "Loaded input arguments"
        );
        Ok(record)
    }

    fn assign(
        &self,
        record: &mut ConfigRecord,
        spec: &FieldSpec,
        value: &str,
        origin: &Path,
    ) -> Result<(), ConfigError> {
        if value.len() > self.options.max_field_len {
            return Err(ConfigError::FieldTooLong {
                path: origin.to_path_buf(),
                slot: spec.slot,
                field: spec.name,
                len: value.len(),
                max: self.options.max_field_len,
            });
        }

        debug!(slot = spec.slot, field = spec.name, value, "Assigning input argument");

        match spec.access {
            FieldAccess::Integer { set, .. } => set(record, self.parse_integer(spec, value, origin)?),
            FieldAccess::Text { set, .. } => set(record, value.to_owned()),
        }
        Ok(())
    }

    fn parse_integer(&self, spec: &FieldSpec, value: &str, origin: &Path) -> Result<i32, ConfigError> {
        if let Ok(parsed) = value.parse::<i32>() {
            return Ok(parsed);
        }

        match self.options.integer_policy {
            IntegerPolicy::Strict => Err(ConfigError::FieldParse {
                path: origin.to_path_buf(),
                slot: spec.slot,
                field: spec.name,
                value: value.to_owned(),
            }),
            IntegerPolicy::Lenient => {
                let parsed = leading_integer(value);
                warn!(
                    path = %origin.display(),
                    slot = spec.slot,
                    field = spec.name,
                    value,
                    parsed,
                    "Input value is not a clean integer, keeping its leading digits"
                );
                Ok(parsed)
            }
        }
    }
}

/// Optional sign then leading decimal digits; no digits gives 0, overflow saturates.
fn leading_integer(text: &str) -> i32 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i32, |acc, byte| {
            let digit = i32::from(byte - b'0');
            let acc = acc.saturating_mul(10);
            if negative {
                acc.saturating_sub(digit)
            } else {
                acc.saturating_add(digit)
            }
        })
}
