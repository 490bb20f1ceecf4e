//! Configuration support for hac.
//!
//! This module provides:
//! - The built-in defaults layer
//! - Loading machine-wide and per-user `hac.toml` files as layers
//! - Merging layers with an explicit "unset" value
//! - Resolving the merged map into typed settings
//! - Template generation with `--init`

mod defaults;
mod file;
mod init;
mod merge;
mod resolve;
mod toml_schema;

pub use defaults::{default_layer, keys, DEFAULT_COMMAND};
pub use file::{
    load_config, load_layer, ConfigError, ConfigPaths, CONFIG_FILENAME, SYSTEM_CONFIG_ENV,
    USER_CONFIG_ENV,
};
pub use init::{generate_init_file, HAC_TOML_TEMPLATE};
pub use merge::{merge, merge_layers, ConfigMap, ConfigValue};
pub use resolve::{resolve_settings, Command, Resolution, ResolveError, Settings, Unsatisfied};
pub use toml_schema::HacToml;
