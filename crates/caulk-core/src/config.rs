//! Configuration file loading for caulk.
//!
//! Reads `.caulk/caulk.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level caulk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaulkConfig {
    pub version: String,
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub enforce: EnforceConfig,
}

/// Names of the actor framework contracts the detectors look for.
///
/// Defaults match the Dapr actor SDK; hosts targeting a different actor
/// framework override them here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Marker interface every actor-callable contract must transitively implement.
    #[serde(default = "default_actor_interface")]
    pub actor_interface: String,
    #[serde(default = "default_actor_interface_qualified")]
    pub actor_interface_qualified: String,
    /// Base class an actor implementation must extend.
    #[serde(default = "default_actor_base")]
    pub actor_base: String,
    #[serde(default = "default_actor_base_qualified")]
    pub actor_base_qualified: String,
    /// Naming suffix identifying actor contract interfaces.
    #[serde(default = "default_actor_suffix")]
    pub actor_suffix: String,
    /// Type-level explicit serialization contract marker.
    #[serde(default = "default_contract_marker")]
    pub contract_marker: String,
    /// Alternative type-level markers accepted in place of the contract marker.
    #[serde(default = "default_contract_alternatives")]
    pub contract_alternatives: Vec<String>,
    /// Member-level marker that must co-occur with the contract marker.
    #[serde(default = "default_member_marker")]
    pub member_marker: String,
    /// Marker giving an enum value a stable serialized name.
    #[serde(default = "default_enum_marker")]
    pub enum_marker: String,
    /// Advisory property-naming marker.
    #[serde(default = "default_naming_marker")]
    pub naming_marker: String,
    /// Imports introduced by fixes, keyed by the marker they define.
    #[serde(default = "default_actor_import")]
    pub actor_import: String,
    #[serde(default = "default_serialization_import")]
    pub serialization_import: String,
    #[serde(default = "default_naming_import")]
    pub naming_import: String,
}

/// Per-category rule toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnforceConfig {
    #[serde(default = "default_true")]
    pub interfaces: bool,
    #[serde(default = "default_true")]
    pub serialization: bool,
    #[serde(default = "default_true")]
    pub naming: bool,
}

fn default_true() -> bool {
    true
}
fn default_actor_interface() -> String {
    "IActor".to_string()
}
fn default_actor_interface_qualified() -> String {
    "Dapr.Actors.IActor".to_string()
}
fn default_actor_base() -> String {
    "Actor".to_string()
}
fn default_actor_base_qualified() -> String {
    "Dapr.Actors.Runtime.Actor".to_string()
}
fn default_actor_suffix() -> String {
    "Actor".to_string()
}
fn default_contract_marker() -> String {
    "DataContract".to_string()
}
fn default_contract_alternatives() -> Vec<String> {
    vec!["Serializable".to_string(), "JsonObject".to_string()]
}
fn default_member_marker() -> String {
    "DataMember".to_string()
}
fn default_enum_marker() -> String {
    "EnumMember".to_string()
}
fn default_naming_marker() -> String {
    "JsonPropertyName".to_string()
}
fn default_actor_import() -> String {
    "Dapr.Actors".to_string()
}
fn default_serialization_import() -> String {
    "System.Runtime.Serialization".to_string()
}
fn default_naming_import() -> String {
    "System.Text.Json.Serialization".to_string()
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            actor_interface: default_actor_interface(),
            actor_interface_qualified: default_actor_interface_qualified(),
            actor_base: default_actor_base(),
            actor_base_qualified: default_actor_base_qualified(),
            actor_suffix: default_actor_suffix(),
            contract_marker: default_contract_marker(),
            contract_alternatives: default_contract_alternatives(),
            member_marker: default_member_marker(),
            enum_marker: default_enum_marker(),
            naming_marker: default_naming_marker(),
            actor_import: default_actor_import(),
            serialization_import: default_serialization_import(),
            naming_import: default_naming_import(),
        }
    }
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            interfaces: true,
            serialization: true,
            naming: true,
        }
    }
}

impl Default for CaulkConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            contract: ContractConfig::default(),
            enforce: EnforceConfig::default(),
        }
    }
}

impl CaulkConfig {
    /// Load configuration from `caulk.json` inside the given caulk directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(caulk_dir: &Path) -> Self {
        let config_path = caulk_dir.join("caulk.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "caulk: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
