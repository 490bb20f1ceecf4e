//! TOML schema definitions for hac.toml

use serde::{Deserialize, Serialize};

use super::defaults::keys;
use super::merge::{ConfigMap, ConfigValue};

/// Root structure for hac.toml (machine-wide and per-user files share it)
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HacToml {
    /// Command used when none is given on the command line
    pub command: Option<String>,

    /// Languages to prepare, e.g. `["no", "cpp", "py.1"]`
    pub lang: Option<Vec<String>>,

    /// Runners to prepare
    pub runner: Option<Vec<String>>,

    /// Working directory for `prep`
    pub dir: Option<String>,

    /// Replace existing files and directories
    pub force: Option<bool>,
}

impl HacToml {
    /// Convert into a configuration layer; absent settings become `Unset`.
    pub fn to_layer(&self) -> ConfigMap {
        ConfigMap::from([
            (keys::COMMAND.to_string(), self.command.clone().into()),
            (keys::LANG.to_string(), self.lang.clone().into()),
            (keys::RUNNER.to_string(), self.runner.clone().into()),
            (keys::LOCATION.to_string(), ConfigValue::Unset),
            (keys::DIR.to_string(), self.dir.clone().into()),
            (keys::FORCE.to_string(), self.force.into()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_unset() {
        let layer = HacToml::default().to_layer();
        assert!(layer.values().all(ConfigValue::is_unset));
        assert_eq!(layer.len(), keys::ALL.len());
    }

    #[test]
    fn test_layer_values() {
        let parsed: HacToml = toml::from_str(
            r#"
command = "prep"
lang = ["no", "py.1"]
force = true
"#,
        )
        .unwrap();
        let layer = parsed.to_layer();

        assert_eq!(layer[keys::COMMAND], ConfigValue::Scalar("prep".into()));
        assert_eq!(
            layer[keys::LANG],
            ConfigValue::List(vec!["no".into(), "py.1".into()])
        );
        assert_eq!(layer[keys::FORCE], ConfigValue::Scalar("true".into()));
        assert!(layer[keys::RUNNER].is_unset());
        assert!(layer[keys::DIR].is_unset());
    }
}
