//! ooinstall: `OpenShift` installer configuration
//!
//! Entry point for the ooinstall application.

use std::collections::BTreeMap;
use std::process::ExitCode;

use ooinstall::config::{Cli, Command, ConfigError, Configuration, Fact};

mod app;

use app::{exit_code, print_config_hint, render_json, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    // Load, validate and default the configuration
    let config = match Configuration::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::for_error(&e);
        }
    };

    if config.is_new_config() {
        tracing::info!(path = %config.config_path().display(), "No config file found, using defaults");
    }

    match run_command(&cli.command(), &config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::for_error(&e)
        }
    }
}

/// Runs a subcommand against a loaded configuration.
fn run_command(command: &Command, config: &Configuration) -> Result<(), ConfigError> {
    match command {
        Command::Show => print!("{}", config.to_yaml()?),
        Command::MissingFacts { json } => print_missing_facts(&config.calc_missing_facts(), *json)?,
        Command::Inventory => println!("{}", render_json(&config.aggregates())?),
        Command::Save => {
            config.save_to_disk()?;
            println!("Configuration written to: {}", config.config_path().display());
        }
    }
    Ok(())
}

fn print_missing_facts(
    missing: &BTreeMap<String, Vec<Fact>>,
    json: bool,
) -> Result<(), ConfigError> {
    if json {
        println!("{}", render_json(missing)?);
        return Ok(());
    }

    if missing.is_empty() {
        println!("All host facts are known.");
        return Ok(());
    }

    for (host, facts) in missing {
        let names: Vec<&str> = facts.iter().map(|f| f.as_str()).collect();
        println!("{host}: {}", names.join(", "));
    }
    Ok(())
}
