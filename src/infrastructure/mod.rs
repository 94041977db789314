//! Infrastructure layer module
//!
//! This module contains everything that touches the outside world:
//! - Positional input file loading and rendering
//! - Settings management
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod settings;
