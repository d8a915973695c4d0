//! CLI argument parsing using clap.
//!
//! Defines the command-line interface for inspecting and normalizing the
//! installer config.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ooinstall: inspect the `OpenShift` installer configuration
///
/// Loads the installer config, applies defaults and reports what the
/// installer still needs to know about each host.
#[derive(Debug, Parser)]
#[command(name = "ooinstall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: show)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    /// (default: $XDG_CONFIG_HOME/openshift/installer.cfg.yml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for ooinstall
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the normalized configuration as YAML
    Show,

    /// List the facts still missing for each host
    MissingFacts {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print master/node lists and per-host facts as JSON
    Inventory,

    /// Write the normalized configuration back to the config file
    Save,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the subcommand to run, defaulting to [`Command::Show`].
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}
