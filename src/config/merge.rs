//! Layered configuration merging
//!
//! Priority: CLI args > user file > machine file > defaults

use std::collections::BTreeMap;

/// A single configuration value of one layer.
///
/// `Unset` means "defer to the previous layer"; it is distinct from an empty
/// string and from an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Unset,
    Scalar(String),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, ConfigValue::Unset)
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ConfigValue::Unset, ConfigValue::Scalar)
    }
}

impl From<Option<Vec<String>>> for ConfigValue {
    fn from(value: Option<Vec<String>>) -> Self {
        value.map_or(ConfigValue::Unset, ConfigValue::List)
    }
}

impl From<Option<bool>> for ConfigValue {
    fn from(value: Option<bool>) -> Self {
        value.map(|b| b.to_string()).into()
    }
}

/// Flat mapping from configuration key to value.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Merge two layers; `overlay` wins unless its value is `Unset`.
///
/// A key that only `overlay` has, with an `Unset` value, is left out.
pub fn merge(base: ConfigMap, overlay: ConfigMap) -> ConfigMap {
    let mut merged = base;
    for (key, value) in overlay {
        if !value.is_unset() {
            merged.insert(key, value);
        }
    }
    merged
}

/// Merge layers in order (first is base, last has highest precedence).
pub fn merge_layers<I>(layers: I) -> ConfigMap
where
    I: IntoIterator<Item = ConfigMap>,
{
    layers.into_iter().fold(ConfigMap::new(), merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> ConfigValue {
        ConfigValue::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> ConfigValue {
        ConfigValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn map(entries: &[(&str, ConfigValue)]) -> ConfigMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_overlay_wins_except_unset() {
        let base = map(&[("a", scalar("1")), ("b", scalar("2"))]);
        let overlay = map(&[("a", scalar("3")), ("b", ConfigValue::Unset)]);

        let merged = merge(base, overlay);
        assert_eq!(merged, map(&[("a", scalar("3")), ("b", scalar("2"))]));
    }

    #[test]
    fn test_unset_base_is_filled() {
        let base = map(&[("a", scalar("3")), ("b", ConfigValue::Unset)]);
        let overlay = map(&[("a", scalar("1")), ("b", scalar("2"))]);

        let merged = merge(base, overlay);
        assert_eq!(merged, map(&[("a", scalar("1")), ("b", scalar("2"))]));
    }

    #[test]
    fn test_all_unset_overlay_is_identity() {
        let base = map(&[("lang", list(&["cpp"])), ("dir", scalar("."))]);
        let overlay = base
            .keys()
            .map(|k| (k.clone(), ConfigValue::Unset))
            .collect();

        assert_eq!(merge(base.clone(), overlay), base);
    }

    #[test]
    fn test_empty_values_are_not_unset() {
        let base = map(&[("lang", list(&["cpp"])), ("dir", scalar("."))]);
        let overlay = map(&[("lang", list(&[])), ("dir", scalar(""))]);

        let merged = merge(base, overlay);
        assert_eq!(merged["lang"], list(&[]));
        assert_eq!(merged["dir"], scalar(""));
    }

    #[test]
    fn test_disjoint_keys_union() {
        let base = map(&[("a", scalar("1"))]);
        let overlay = map(&[("b", scalar("2")), ("c", ConfigValue::Unset)]);

        let merged = merge(base, overlay);
        assert_eq!(merged, map(&[("a", scalar("1")), ("b", scalar("2"))]));
        assert!(!merged.contains_key("c"));
    }

    #[test]
    fn test_merge_layers_in_order() {
        let defaults = map(&[("command", scalar("show")), ("lang", list(&["cpp"]))]);
        let machine = map(&[("command", scalar("prep")), ("lang", ConfigValue::Unset)]);
        let user = map(&[("command", ConfigValue::Unset), ("lang", list(&["no", "py"]))]);
        let cli = map(&[("command", scalar("show"))]);

        let merged = merge_layers([defaults, machine, user]);
        assert_eq!(merged["command"], scalar("prep"));
        assert_eq!(merged["lang"], list(&["no", "py"]));

        let merged = merge_layers([merged, cli]);
        assert_eq!(merged["command"], scalar("show"));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(ConfigValue::from(None::<String>), ConfigValue::Unset);
        assert_eq!(ConfigValue::from(Some(true)), scalar("true"));
        assert_eq!(
            ConfigValue::from(Some(vec!["py".to_string()])),
            list(&["py"])
        );
    }
}
