//! Config file discovery and loading

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::merge::ConfigMap;
use super::toml_schema::HacToml;

pub const CONFIG_FILENAME: &str = "hac.toml";

/// Overrides the machine-wide config file location.
pub const SYSTEM_CONFIG_ENV: &str = "HAC_SYSTEM_CONFIG";

/// Overrides the per-user config file location.
pub const USER_CONFIG_ENV: &str = "HAC_CONFIG";

const SYSTEM_CONFIG_DIR: &str = "/etc/hac";

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// TOML parsing error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Locations of the machine-wide and per-user config files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub system: PathBuf,
    /// `None` when the platform has no config directory.
    pub user: Option<PathBuf>,
}

impl ConfigPaths {
    /// Resolve both paths from the environment.
    ///
    /// An explicit user path (from `--config`) beats `HAC_CONFIG`, which beats
    /// the platform config directory.
    pub fn discover(explicit_user: Option<PathBuf>) -> Self {
        let system = env::var_os(SYSTEM_CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(SYSTEM_CONFIG_DIR).join(CONFIG_FILENAME));

        let user = explicit_user
            .or_else(|| env::var_os(USER_CONFIG_ENV).map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|d| d.join("hac").join(CONFIG_FILENAME)));

        Self { system, user }
    }
}

/// Load and parse hac.toml from the given path.
pub fn load_config(path: &Path) -> Result<HacToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: HacToml = toml::from_str(&content)?;
    Ok(config)
}

/// Load a config file as a layer; a missing file yields an all-unset layer.
pub fn load_layer(path: &Path) -> Result<ConfigMap, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found");
        return Ok(HacToml::default().to_layer());
    }

    tracing::debug!(path = %path.display(), "loading config file");
    Ok(load_config(path)?.to_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::keys;
    use crate::config::merge::ConfigValue;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
command = "prep"
lang = ["cpp", "py.1"]
runner = ["no", "make"]
dir = "~/contests"
force = false
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.command.as_deref(), Some("prep"));
        assert_eq!(
            config.lang,
            Some(vec!["cpp".to_string(), "py.1".to_string()])
        );
        assert_eq!(
            config.runner,
            Some(vec!["no".to_string(), "make".to_string()])
        );
        assert_eq!(config.dir.as_deref(), Some("~/contests"));
        assert_eq!(config.force, Some(false));
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config, HacToml::default());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_wrong_type() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "lang = \"cpp\"\n").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_layer_missing_file() {
        let dir = TempDir::new().unwrap();
        let layer = load_layer(&dir.path().join("absent.toml")).unwrap();
        assert!(layer.values().all(ConfigValue::is_unset));
    }

    #[test]
    fn test_load_layer_partial() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "runner = [\"make.1\"]\n").unwrap();

        let layer = load_layer(&config_path).unwrap();
        assert_eq!(
            layer[keys::RUNNER],
            ConfigValue::List(vec!["make.1".to_string()])
        );
        assert!(layer[keys::COMMAND].is_unset());
    }

    #[test]
    fn test_explicit_user_path_wins() {
        let explicit = PathBuf::from("/tmp/custom/hac.toml");
        let paths = ConfigPaths::discover(Some(explicit.clone()));
        assert_eq!(paths.user, Some(explicit));
    }
}
