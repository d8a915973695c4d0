//! YAML document layout: the settings record, the on-disk document and the
//! persisted subset written back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::defaults;
use super::error::ConfigError;
use super::host::RawHost;
use super::scalar;

/// Installer-wide settings.
///
/// Known keys are typed fields. Anything else found in the document is kept
/// in `extra` so callers can still read ad hoc options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// User ansible connects as
    #[serde(
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ansible_ssh_user: Option<String>,

    /// Where ansible writes its log
    #[serde(
        default,
        deserialize_with = "scalar::opt_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub ansible_log_path: Option<PathBuf>,

    /// Directory for generated inventory files
    #[serde(
        default,
        deserialize_with = "scalar::opt_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub ansible_inventory_directory: Option<PathBuf>,

    /// Generated inventory file, always `<inventory directory>/hosts`
    #[serde(
        default,
        deserialize_with = "scalar::opt_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub ansible_inventory_path: Option<PathBuf>,

    /// Facts file written by the ansible callback plugin
    #[serde(
        default,
        deserialize_with = "scalar::opt_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub ansible_callback_facts_yaml: Option<PathBuf>,

    /// Unknown keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Settings {
    /// Removes empty values: empty strings and paths, nulls, `false`, and
    /// empty sequences or mappings. Numeric zero is kept.
    pub fn prune(&mut self) {
        prune_str(&mut self.ansible_ssh_user);
        prune_path(&mut self.ansible_log_path);
        prune_path(&mut self.ansible_inventory_directory);
        prune_path(&mut self.ansible_inventory_path);
        prune_path(&mut self.ansible_callback_facts_yaml);
        self.extra.retain(|_, value| is_truthy(value));
    }
}

fn prune_str(value: &mut Option<String>) {
    if value.as_deref().is_some_and(str::is_empty) {
        *value = None;
    }
}

fn prune_path(value: &mut Option<PathBuf>) {
    if value.as_deref().is_some_and(|p| p.as_os_str().is_empty()) {
        *value = None;
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
        Value::Bool(true) | Value::Number(_) => true,
    }
}

/// The document as read from disk.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    hosts: Option<Vec<RawHost>>,

    #[serde(flatten)]
    settings: Settings,
}

/// Parses the config document.
///
/// Returns `Ok(None)` for an empty document (blank file, `~`, or `{}`).
/// Keys derived from the host list are dropped from the settings.
pub(crate) fn parse_document(
    content: &str,
    path: &Path,
) -> Result<Option<(Settings, Vec<RawHost>)>, ConfigError> {
    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if !is_truthy(&value) {
        return Ok(None);
    }

    let Document {
        hosts,
        mut settings,
    } = serde_yaml::from_value(value).map_err(|source| ConfigError::Schema {
        path: path.to_path_buf(),
        source,
    })?;

    for key in defaults::DERIVED_KEYS {
        settings.extra.remove(key);
    }

    Ok(Some((settings, hosts.unwrap_or_default())))
}

/// The normalized subset of the configuration written back to disk.
///
/// Derived settings are never part of this record; they are recomputed on
/// every load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistedConfig {
    /// User ansible connects as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_ssh_user: Option<String>,

    /// Where ansible writes its log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_log_path: Option<PathBuf>,

    /// Minimal host records, in host order
    pub hosts: Vec<RawHost>,

    /// Inventory directory, only when it differs from the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_inventory_directory: Option<PathBuf>,
}

impl PersistedConfig {
    /// Renders the record as block-style YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::Serialize)
    }
}
