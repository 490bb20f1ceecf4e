//! Typed settings resolved from the fully merged configuration map.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::defaults::keys;
use super::merge::{ConfigMap, ConfigValue};
use crate::choice::{parse_tokens, reduce_list, Catalogue, Token, TokenError};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("missing configuration value for '{0}'")]
    Missing(&'static str),
    #[error("invalid value for '{key}': {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown command '{0}' (expected prep or show)")]
    UnknownCommand(String),
    #[error("invalid choice in '{key}': {source}")]
    Choice {
        key: &'static str,
        #[source]
        source: TokenError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Prep,
    Show,
}

impl FromStr for Command {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prep" => Ok(Command::Prep),
            "show" => Ok(Command::Show),
            other => Err(ResolveError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Prep => f.write_str("prep"),
            Command::Show => f.write_str("show"),
        }
    }
}

/// Final settings handed to the commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub command: Command,
    pub lang: Vec<Token>,
    pub runner: Vec<Token>,
    pub location: Vec<String>,
    pub dir: PathBuf,
    pub force: bool,
}

/// A requested choice that no catalogue entry satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsatisfied {
    pub key: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub settings: Settings,
    pub unsatisfied: Vec<Unsatisfied>,
}

fn value<'a>(config: &'a ConfigMap, key: &'static str) -> Result<&'a ConfigValue, ResolveError> {
    match config.get(key) {
        None | Some(ConfigValue::Unset) => Err(ResolveError::Missing(key)),
        Some(value) => Ok(value),
    }
}

fn scalar<'a>(config: &'a ConfigMap, key: &'static str) -> Result<&'a str, ResolveError> {
    match value(config, key)? {
        ConfigValue::Scalar(s) => Ok(s),
        ConfigValue::List(items) => Err(ResolveError::InvalidValue {
            key,
            value: items.join(","),
        }),
        ConfigValue::Unset => Err(ResolveError::Missing(key)),
    }
}

/// A scalar is accepted where a list is expected, as a single element.
fn list(config: &ConfigMap, key: &'static str) -> Result<Vec<String>, ResolveError> {
    match value(config, key)? {
        ConfigValue::List(items) => Ok(items.clone()),
        ConfigValue::Scalar(s) => Ok(vec![s.clone()]),
        ConfigValue::Unset => Err(ResolveError::Missing(key)),
    }
}

fn flag(config: &ConfigMap, key: &'static str) -> Result<bool, ResolveError> {
    let raw = scalar(config, key)?;
    raw.parse().map_err(|_| ResolveError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn choices(
    config: &ConfigMap,
    key: &'static str,
    catalogue: &Catalogue,
    unsatisfied: &mut Vec<Unsatisfied>,
) -> Result<Vec<Token>, ResolveError> {
    let tokens = parse_tokens(list(config, key)?)
        .map_err(|source| ResolveError::Choice { key, source })?;
    let requested = reduce_list(&tokens);

    unsatisfied.extend(
        catalogue
            .missing(&requested)
            .into_iter()
            .map(|name| Unsatisfied { key, name }),
    );

    let selected = catalogue.resolve(&requested);
    tracing::debug!(
        key,
        requested = ?requested.iter().map(Token::to_string).collect::<Vec<_>>(),
        selected = ?selected.iter().map(Token::to_string).collect::<Vec<_>>(),
        "resolved choices"
    );
    Ok(selected)
}

/// Resolve the merged configuration into typed settings.
pub fn resolve_settings(
    config: &ConfigMap,
    langs: &Catalogue,
    runners: &Catalogue,
) -> Result<Resolution, ResolveError> {
    let mut unsatisfied = Vec::new();

    let settings = Settings {
        command: scalar(config, keys::COMMAND)?.parse()?,
        lang: choices(config, keys::LANG, langs, &mut unsatisfied)?,
        runner: choices(config, keys::RUNNER, runners, &mut unsatisfied)?,
        location: list(config, keys::LOCATION)?,
        dir: PathBuf::from(scalar(config, keys::DIR)?),
        force: flag(config, keys::FORCE)?,
    };

    Ok(Resolution {
        settings,
        unsatisfied,
    })
}
