//! Built-in defaults: the lowest configuration layer.

use super::merge::{ConfigMap, ConfigValue};

/// Recognized configuration keys.
pub mod keys {
    pub const COMMAND: &str = "command";
    pub const LANG: &str = "lang";
    pub const RUNNER: &str = "runner";
    pub const LOCATION: &str = "location";
    pub const DIR: &str = "dir";
    pub const FORCE: &str = "force";

    pub const ALL: [&str; 6] = [COMMAND, LANG, RUNNER, LOCATION, DIR, FORCE];
}

pub const DEFAULT_COMMAND: &str = "show";
pub const DEFAULT_LANG: &str = "cpp";
pub const DEFAULT_RUNNER: &str = "sh";
pub const DEFAULT_DIR: &str = ".";

fn scalar(value: &str) -> ConfigValue {
    ConfigValue::Scalar(value.to_string())
}

fn list(values: &[&str]) -> ConfigValue {
    ConfigValue::List(values.iter().map(|v| v.to_string()).collect())
}

/// Defaults layer; defines a value for every recognized key.
pub fn default_layer() -> ConfigMap {
    ConfigMap::from([
        (keys::COMMAND.to_string(), scalar(DEFAULT_COMMAND)),
        (keys::LANG.to_string(), list(&[DEFAULT_LANG])),
        (keys::RUNNER.to_string(), list(&[DEFAULT_RUNNER])),
        (keys::LOCATION.to_string(), list(&[])),
        (keys::DIR.to_string(), scalar(DEFAULT_DIR)),
        (keys::FORCE.to_string(), scalar("false")),
    ])
}
