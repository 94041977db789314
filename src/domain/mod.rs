//! Domain layer for the land data system input arguments
//!
//! This module contains the positional schema and the typed models it
//! populates. It performs no I/O.

pub mod models;

pub use models::{
    ConfigRecord, FieldAccess, FieldKind, FieldSpec, FieldValue, LoaderSettings, LoggingSettings,
    Settings, DEFAULT_MAX_FIELD_LEN, SCHEMA, SCHEMA_LEN,
};
