//! Config file location and lexical path normalization.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use super::defaults;
use super::error::ConfigError;

/// Snapshot of the environment the default config path depends on.
///
/// Captured once and passed explicitly so path resolution stays a pure
/// function. Tests build this directly instead of touching the process
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
    /// Value of `XDG_CONFIG_HOME`, if set and non-empty
    pub config_home: Option<PathBuf>,

    /// The user's home directory
    pub home: Option<PathBuf>,
}

impl ConfigEnv {
    /// Captures the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_vars(std::env::var_os(defaults::CONFIG_HOME_VAR), dirs::home_dir())
    }

    /// Builds a snapshot from raw variable values.
    ///
    /// An empty `XDG_CONFIG_HOME` counts as unset.
    #[must_use]
    pub fn from_vars(config_home: Option<OsString>, home: Option<PathBuf>) -> Self {
        Self {
            config_home: config_home.filter(|v| !v.is_empty()).map(PathBuf::from),
            home,
        }
    }

    /// Returns the base config directory: `XDG_CONFIG_HOME`, else `~/.config`.
    #[must_use]
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.config_home
            .clone()
            .or_else(|| self.home.as_ref().map(|h| h.join(defaults::HOME_CONFIG_DIR)))
    }
}

/// Returns `<config-home>/openshift/installer.cfg.yml`.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigHome`] if the environment provides neither
/// a config home nor a home directory.
pub fn default_config_path(env: &ConfigEnv) -> Result<PathBuf, ConfigError> {
    let base = env.config_dir().ok_or(ConfigError::NoConfigHome)?;
    Ok(normalize_path(
        &base.join(defaults::CONFIG_SUBDIR).join(defaults::CONFIG_FILE),
    ))
}

/// Returns `<directory of config_path>/.ansible`.
#[must_use]
pub fn default_inventory_dir(config_path: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&parent.join(defaults::INVENTORY_DIR))
}

/// Lexically normalizes a path.
///
/// Drops `.` components and redundant separators and folds `..` into the
/// preceding component. Does not touch the filesystem, so symlinks are not
/// resolved. `..` at the root is dropped; leading `..` of a relative path is
/// kept. An empty result becomes `.`.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}
