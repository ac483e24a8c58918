//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for clarity-consent-auto
#[derive(Parser, Debug)]
#[command(name = "clarity-consent-auto")]
#[command(author, version, about = "Detect the Microsoft Clarity project ID and propagate consent")]
#[command(long_about = r#"
Clarity Consent Auto finds the Microsoft Clarity project ID already configured
on a site and forwards the site's consent choices to Clarity.

Detection checks, in order:
1. A project ID saved by an earlier version
2. The official Microsoft Clarity plugin (stops detection, no ID)
3. Options written by other analytics and SEO plugins

Site options are read from a JSON snapshot (--store or [store] path).

Configuration files are loaded from (in priority order):
1. --config <path>                Explicit config file
2. ./clarity-consent.toml         Project-level config
3. ~/.config/clarity-consent-auto/config.toml   Global config

Example:
  clarity-consent-auto --store options.json detect
  clarity-consent-auto --store options.json settings --ad-storage denied
  clarity-consent-auto --store options.json simulate --appear-after 5
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file holding the site options (overrides [store] path)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run project ID detection once
    Detect,

    /// Show the settings page status
    Status,

    /// Render the consent script tags for a page
    Render,

    /// Show or update the consent settings
    Settings {
        /// Ad storage consent ("granted" or "denied")
        #[arg(long, value_name = "STATUS")]
        ad_storage: Option<String>,

        /// Analytics storage consent ("granted" or "denied")
        #[arg(long, value_name = "STATUS")]
        analytics_storage: Option<String>,
    },

    /// Remove every option and transient owned by the plugin
    Uninstall,

    /// Run the consent client against a simulated page
    Simulate {
        /// Availability check on which Clarity appears (0 = never)
        #[arg(long, default_value_t = 1, value_name = "N")]
        appear_after: u32,

        /// Simulate an administrative page
        #[arg(long)]
        admin: bool,

        /// Make the Clarity call throw with this message
        #[arg(long, value_name = "MESSAGE")]
        fail: Option<String>,

        /// Poll interval in milliseconds (overrides [client])
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Maximum number of polls (overrides [client])
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
    },
}

impl Command {
    /// Whether the command writes to the option store
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::Settings {
                ad_storage,
                analytics_storage,
            } => ad_storage.is_some() || analytics_storage.is_some(),
            Command::Uninstall => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_update() {
        let cli = Cli::parse_from([
            "clarity-consent-auto",
            "--store",
            "options.json",
            "settings",
            "--ad-storage",
            "denied",
        ]);
        assert_eq!(cli.store, Some(PathBuf::from("options.json")));
        let command = cli.command.unwrap();
        assert!(command.is_mutating());
        assert_eq!(
            command,
            Command::Settings {
                ad_storage: Some("denied".into()),
                analytics_storage: None,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["clarity-consent-auto", "detect", "--json", "-vv"]);
        assert_eq!(cli.command, Some(Command::Detect));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::parse_from(["clarity-consent-auto", "simulate"]);
        let Some(Command::Simulate {
            appear_after,
            admin,
            fail,
            interval_ms,
            max_attempts,
        }) = cli.command
        else {
            panic!("expected simulate");
        };
        assert_eq!(appear_after, 1);
        assert!(!admin);
        assert!(fail.is_none() && interval_ms.is_none() && max_attempts.is_none());
    }

    #[test]
    fn test_settings_without_values_is_read_only() {
        let command = Command::Settings {
            ad_storage: None,
            analytics_storage: None,
        };
        assert!(!command.is_mutating());
        assert!(!Command::Detect.is_mutating());
        assert!(Command::Uninstall.is_mutating());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
