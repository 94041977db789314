//! CLI command implementations.

pub mod check;
pub mod schema;
pub mod show;
pub mod template;

use crate::domain::models::Settings;
use crate::infrastructure::config::{ConfigLoader, IntegerPolicy, LoaderOptions};

/// A loader configured from settings; `strict` forces strict integers.
fn build_loader(settings: &Settings, strict: bool) -> ConfigLoader {
    let mut options = LoaderOptions::from(&settings.loader);
    if strict {
        options.integer_policy = IntegerPolicy::Strict;
    }
    ConfigLoader::with_options(options)
}
