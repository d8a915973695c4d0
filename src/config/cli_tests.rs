//! Tests for CLI argument parsing.

use std::path::Path;

use clap::Parser;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn no_args_defaults_to_show() {
        let cli = Cli::parse_from_iter(["ooinstall"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.command(), Command::Show);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn config_path_short_and_long() {
        let short = Cli::parse_from_iter(["ooinstall", "-c", "/tmp/a.yml"]);
        assert_eq!(short.config.as_deref(), Some(Path::new("/tmp/a.yml")));

        let long = Cli::parse_from_iter(["ooinstall", "--config", "/tmp/b.yml"]);
        assert_eq!(long.config.as_deref(), Some(Path::new("/tmp/b.yml")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from_iter(["ooinstall", "save", "--config", "cfg.yml", "-v"]);

        assert_eq!(cli.command(), Command::Save);
        assert_eq!(cli.config.as_deref(), Some(Path::new("cfg.yml")));
        assert!(cli.verbose);
    }
}

mod subcommands {
    use super::*;

    #[test]
    fn missing_facts_plain_and_json() {
        let plain = Cli::parse_from_iter(["ooinstall", "missing-facts"]);
        assert_eq!(plain.command(), Command::MissingFacts { json: false });

        let json = Cli::parse_from_iter(["ooinstall", "missing-facts", "--json"]);
        assert_eq!(json.command(), Command::MissingFacts { json: true });
    }

    #[test]
    fn inventory_and_show() {
        let inventory = Cli::parse_from_iter(["ooinstall", "inventory"]);
        assert_eq!(inventory.command(), Command::Inventory);

        let show = Cli::parse_from_iter(["ooinstall", "show"]);
        assert_eq!(show.command(), Command::Show);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let result = Cli::try_parse_from(["ooinstall", "install"]);
        assert!(result.is_err());
    }
}
