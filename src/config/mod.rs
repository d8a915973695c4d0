//! Configuration layer for the installer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Validated hosts ([`Host`], [`RawHost`], [`HostError`])
//! - The configuration model ([`Configuration`]) with its settings record
//!   ([`Settings`]) and persisted form ([`PersistedConfig`])
//! - Host fact queries ([`Fact`], [`Aggregates`])
//! - Config path resolution ([`ConfigEnv`], [`default_config_path`])
//! - Default values ([`defaults`])
//!
//! # Lifecycle
//!
//! 1. **Locate** - an explicit path, or `<config-home>/openshift/installer.cfg.yml`
//! 2. **Read** - parse the YAML document and validate each host entry
//! 3. **Default** - fill missing settings and create the inventory directory
//! 4. **Query / mutate** - callers inspect facts and edit hosts or settings
//! 5. **Persist** - on explicit request only, write the normalized subset
//!
//! # Derived Settings
//!
//! `ansible_inventory_path` and `ansible_callback_facts_yaml` are derived from
//! the inventory directory and never written back. The master/node lists and
//! per-host facts are computed on demand from the hosts
//! ([`Configuration::aggregates`]); values found on disk under those keys are
//! ignored.

mod cli;
mod configuration;
pub mod defaults;
mod error;
mod facts;
mod host;
mod paths;
mod scalar;
mod settings;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod facts_tests;
#[cfg(test)]
mod paths_tests;

pub use cli::{Cli, Command};
pub use configuration::Configuration;
pub use error::ConfigError;
pub use facts::{Aggregates, Fact, HostFacts, derive_aggregates, missing_facts};
pub use host::{Host, HostError, RawHost};
pub use paths::{ConfigEnv, default_config_path, default_inventory_dir, normalize_path};
pub use settings::{PersistedConfig, Settings};
