//! Default values and well-known names for the installer configuration.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Environment variable selecting the base config directory.
pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Config directory under the home directory when `XDG_CONFIG_HOME` is unset.
pub const HOME_CONFIG_DIR: &str = ".config";

/// Subdirectory of the config home holding the installer config.
pub const CONFIG_SUBDIR: &str = "openshift";

/// File name of the installer config.
pub const CONFIG_FILE: &str = "installer.cfg.yml";

/// Inventory directory name, relative to the config file's directory.
pub const INVENTORY_DIR: &str = ".ansible";

/// Inventory file name inside the inventory directory.
pub const INVENTORY_FILE: &str = "hosts";

/// Callback facts file name inside the inventory directory.
pub const CALLBACK_FACTS_FILE: &str = "callback_facts.yaml";

/// Default SSH user for ansible.
pub const SSH_USER: &str = "root";

/// Keys derived from the host list. Dropped when a document is loaded.
pub const DERIVED_KEYS: [&str; 3] = ["masters", "nodes", "validated_facts"];
