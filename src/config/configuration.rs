//! The installer configuration: settings, hosts and their persisted form.

use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::defaults;
use super::error::ConfigError;
use super::facts::{Aggregates, Fact, derive_aggregates, missing_facts};
use super::host::Host;
use super::paths::{ConfigEnv, default_config_path, default_inventory_dir, normalize_path};
use super::settings::{PersistedConfig, Settings, parse_document};

/// Installer configuration backed by a YAML file.
///
/// # Construction
///
/// Use [`Configuration::load`] (or [`Configuration::load_with_env`] for an
/// explicit environment). Construction reads the document and applies
/// defaults, so a caller never sees a configuration that skipped either step.
///
/// Nothing is written back automatically; call
/// [`Configuration::save_to_disk`] to persist.
#[derive(Debug, Clone)]
pub struct Configuration {
    config_path: PathBuf,
    /// Installer-wide settings, read and written by callers
    pub settings: Settings,
    /// Hosts in document order, read and written by callers
    pub hosts: Vec<Host>,
    new_config: bool,
}

impl Configuration {
    /// Loads the configuration at `path`, or at the default location derived
    /// from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Configuration::load_with_env`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, &ConfigEnv::from_process())
    }

    /// Loads the configuration at `path`, or at the default location derived
    /// from `env`.
    ///
    /// An explicit path is normalized lexically. A missing file yields an
    /// empty, defaulted configuration flagged as new.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No path is given and `env` has no config home or home directory
    /// - The file exists but cannot be read or parsed
    /// - A host entry is invalid
    /// - The inventory directory cannot be created
    pub fn load_with_env(path: Option<&Path>, env: &ConfigEnv) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => normalize_path(path),
            None => default_config_path(env)?,
        };

        let mut config = Self {
            config_path,
            settings: Settings::default(),
            hosts: Vec::new(),
            new_config: true,
        };
        config.read_config(false)?;
        config.set_defaults()?;

        Ok(config)
    }

    /// Reads the document at the config path into `settings` and `hosts`.
    ///
    /// A missing file leaves the current state untouched and marks the
    /// configuration as new. An empty document also leaves the state
    /// untouched. Otherwise `new_config` is set to `is_new`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`], [`ConfigError::Parse`] or
    /// [`ConfigError::Schema`] if the file cannot be used, and [`ConfigError::InvalidHost`] for the first invalid
    /// host entry. On error the current state is left untouched.
    pub fn read_config(&mut self, is_new: bool) -> Result<(), ConfigError> {
        let content = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "Config file not found, starting new config");
                self.new_config = true;
                return Ok(());
            }
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        if let Some((settings, raw_hosts)) = parse_document(&content, &self.config_path)? {
            let hosts = raw_hosts
                .into_iter()
                .enumerate()
                .map(|(index, raw)| {
                    Host::from_raw(raw).map_err(|source| ConfigError::InvalidHost { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?;

            debug!(
                path = %self.config_path.display(),
                hosts = hosts.len(),
                "Loaded config file"
            );
            self.settings = settings;
            self.hosts = hosts;
        } else {
            debug!(path = %self.config_path.display(), "Config file is empty");
        }

        self.new_config = is_new;
        Ok(())
    }

    /// Fills in missing settings and makes sure the inventory directory
    /// exists. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CreateDir`] if the inventory directory cannot be
    /// created.
    pub fn set_defaults(&mut self) -> Result<(), ConfigError> {
        self.settings.prune();

        let default_dir = self.default_inventory_dir();
        let inventory_dir = self
            .settings
            .ansible_inventory_directory
            .get_or_insert(default_dir)
            .clone();

        if !inventory_dir.is_dir() {
            std::fs::create_dir_all(&inventory_dir).map_err(|source| ConfigError::CreateDir {
                path: inventory_dir.clone(),
                source,
            })?;
            info!(path = %inventory_dir.display(), "Created ansible inventory directory");
        }

        if self.settings.ansible_callback_facts_yaml.is_none() {
            self.settings.ansible_callback_facts_yaml =
                Some(inventory_dir.join(defaults::CALLBACK_FACTS_FILE));
        }

        if self.settings.ansible_ssh_user.is_none() {
            self.settings.ansible_ssh_user = Some(defaults::SSH_USER.to_string());
        }

        self.settings.ansible_inventory_path = Some(inventory_dir.join(defaults::INVENTORY_FILE));

        Ok(())
    }

    /// Returns the normalized path of the config file.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns true if no config file existed when this configuration was
    /// loaded.
    #[must_use]
    pub const fn is_new_config(&self) -> bool {
        self.new_config
    }

    /// Returns the required facts missing on each host.
    ///
    /// Hosts with every fact present are omitted.
    #[must_use]
    pub fn calc_missing_facts(&self) -> BTreeMap<String, Vec<Fact>> {
        missing_facts(&self.hosts)
    }

    /// Returns the master/node lists and per-host facts for the current hosts.
    #[must_use]
    pub fn aggregates(&self) -> Aggregates {
        derive_aggregates(&self.hosts)
    }

    /// Builds the record that [`Configuration::save_to_disk`] writes.
    ///
    /// The inventory directory is only included when it differs from the
    /// default derived from the config path.
    #[must_use]
    pub fn persist_settings(&self) -> PersistedConfig {
        let ansible_inventory_directory = self
            .settings
            .ansible_inventory_directory
            .as_deref()
            .filter(|dir| normalize_path(dir) != self.default_inventory_dir())
            .map(Path::to_path_buf);

        PersistedConfig {
            ansible_ssh_user: self.settings.ansible_ssh_user.clone().filter(|s| !s.is_empty()),
            ansible_log_path: self
                .settings
                .ansible_log_path
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
            hosts: self.hosts.iter().map(Host::to_raw).collect(),
            ansible_inventory_directory,
        }
    }

    /// Renders the persisted settings as YAML without touching disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        self.persist_settings().to_yaml()
    }

    /// Overwrites the config file with the persisted settings.
    ///
    /// The write is not atomic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileWrite`] if the file cannot be written.
    pub fn save_to_disk(&self) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(&self.config_path, yaml).map_err(|source| ConfigError::FileWrite {
            path: self.config_path.clone(),
            source,
        })?;

        info!(path = %self.config_path.display(), hosts = self.hosts.len(), "Saved config file");
        Ok(())
    }

    fn default_inventory_dir(&self) -> PathBuf {
        default_inventory_dir(&self.config_path)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_yaml() {
            Ok(yaml) => f.write_str(&yaml),
            Err(e) => {
                // fmt::Error carries no payload; keep the cause in the log.
                error!(path = %self.config_path.display(), "Cannot render config: {e}");
                Err(fmt::Error)
            }
        }
    }
}
