//! Host and genesis configuration with TOML file support.

use std::path::Path;

use mintgate_types::{Address, Coin, Denom};
use mintgate_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::HostError;

/// Limits and logging for a host.
///
/// Can be loaded from a TOML file via [`HostConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Actions (bank primitives and nested calls) one request may perform.
    #[serde(default = "default_max_actions")]
    pub max_actions: usize,

    /// Nesting depth of contract-to-contract calls. The top-level call is depth 0.
    #[serde(default = "default_max_call_depth")]
    pub max_call_depth: usize,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_actions() -> usize {
    64
}

fn default_max_call_depth() -> usize {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_actions: default_max_actions(),
            max_call_depth: default_max_call_depth(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl HostConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, HostError> {
        from_toml_file(path.as_ref())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, HostError> {
        toml::from_str(s).map_err(|e| HostError::Config(e.to_string()))
    }
}

/// A genesis balance line: `{ address = "...", coins = ["100ujuno"] }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBalance {
    pub address: Address,
    #[serde(with = "coin_strings")]
    pub coins: Vec<Coin>,
}

/// A factory denom created at genesis, administered by `creator`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisDenom {
    pub creator: Address,
    pub subdenom: String,
}

/// Initial ledger contents.
///
/// ```toml
/// native_denoms = ["ujuno"]
///
/// [[balances]]
/// address = "juno1alice"
/// coins = ["1000ujuno"]
///
/// [[factory_denoms]]
/// creator = "juno1manager"
/// subdenom = "new"
///
/// [host]
/// max_actions = 32
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    #[serde(default)]
    pub native_denoms: Vec<Denom>,

    #[serde(default)]
    pub balances: Vec<GenesisBalance>,

    #[serde(default)]
    pub factory_denoms: Vec<GenesisDenom>,

    #[serde(default)]
    pub host: Option<HostConfig>,
}

impl GenesisConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, HostError> {
        from_toml_file(path.as_ref())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, HostError> {
        toml::from_str(s).map_err(|e| HostError::Config(e.to_string()))
    }

    /// The host settings carried by this genesis, or the defaults.
    pub fn host_config(&self) -> HostConfig {
        self.host.clone().unwrap_or_default()
    }
}

fn from_toml_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, HostError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| HostError::Config(format!("{}: {e}", path.display())))?;
    toml::from_str(&content).map_err(|e| HostError::Config(e.to_string()))
}

/// Coins as their `"{amount}{denom}"` text form.
mod coin_strings {
    use mintgate_types::Coin;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(coins: &[Coin], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(coins.iter().map(|c| c.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Coin>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| s.parse::<Coin>().map_err(D::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = HostConfig::from_toml_str("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.max_actions, 64);
        assert_eq!(config.max_call_depth, 8);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn test_partial_host_config() {
        let config = HostConfig::from_toml_str("max_actions = 3\nlog_format = \"json\"").unwrap();
        assert_eq!(config.max_actions, 3);
        assert_eq!(config.max_call_depth, 8);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_genesis_parses() {
        let genesis = GenesisConfig::from_toml_str(
            r#"
native_denoms = ["ujuno"]

[[balances]]
address = "juno1alice"
coins = ["1000ujuno", "5uatom"]

[[factory_denoms]]
creator = "juno1manager"
subdenom = "new"

[host]
max_call_depth = 4
"#,
        )
        .unwrap();
        assert_eq!(genesis.native_denoms, vec![Denom::new("ujuno")]);
        assert_eq!(genesis.balances[0].coins.len(), 2);
        assert_eq!(genesis.balances[0].coins[1].amount.raw(), 5);
        assert_eq!(genesis.factory_denoms[0].subdenom, "new");
        let host = genesis.host_config();
        assert_eq!(host.max_call_depth, 4);
        assert_eq!(host.max_actions, 64);
    }

    #[test]
    fn test_bad_coin_is_a_config_error() {
        let err = GenesisConfig::from_toml_str(
            r#"
[[balances]]
address = "juno1alice"
coins = ["ujuno"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, HostError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = GenesisConfig::from_toml_file("/nonexistent/genesis.toml").unwrap_err();
        assert!(matches!(err, HostError::Config(_)));
    }
}
