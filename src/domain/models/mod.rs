pub mod record;
pub mod schema;
pub mod settings;

pub use record::ConfigRecord;
pub use schema::{FieldAccess, FieldKind, FieldSpec, FieldValue, DEFAULT_MAX_FIELD_LEN, SCHEMA, SCHEMA_LEN};
pub use settings::{LoaderSettings, LoggingSettings, Settings};
