//! Command-line interface definition and dispatch for merge-icons.
//!
//! Uses [`clap`] for argument parsing with derive macros. Running without a
//! subcommand performs a merge driven by config files and the environment,
//! which is how build recipes invoke the tool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::config::{ConfigLayer, MergeConfig, Overrides};
use crate::constants::INDEX_FILENAME;
use crate::merge::{self, IconResolution};
use crate::output;
use crate::theme::ThemeDescriptor;

/// Top-level CLI structure for merge-icons.
#[derive(Parser)]
#[command(
    name = "merge-icons",
    version,
    about = "Merge layered icon themes into one symlinked theme"
)]
pub struct Cli {
    /// Read settings from this TOML file instead of the global and project files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the merge-icons CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Merge the configured themes (the default)
    Merge(MergeArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show what one theme's index.theme declares
    Inspect {
        /// Theme root directory containing index.theme
        theme: PathBuf,
    },
}

/// Command-line overrides for a merge run.
#[derive(Args, Default)]
pub struct MergeArgs {
    /// Output prefix; the theme is written to <OUT>/share/icons/<THEME_NAME>
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Directory name of the merged theme
    #[arg(long)]
    pub theme_name: Option<String>,
    /// Prefix containing share/icons/hicolor
    #[arg(long)]
    pub hicolor: Option<PathBuf>,
    /// Replace every `legacy` directory with a link to an empty location
    #[arg(long)]
    pub remove_legacy_icons: bool,
    /// How icons with the same context and name combine across themes
    #[arg(long, value_enum)]
    pub icon_resolution: Option<IconResolution>,
    /// Theme roots to merge, lowest priority first
    pub themes: Vec<PathBuf>,
}

impl MergeArgs {
    fn overrides(self) -> Overrides {
        Overrides {
            out: self.out,
            theme_name: self.theme_name,
            icon_themes: self.themes,
            hicolor: self.hicolor,
            remove_legacy_icons: self.remove_legacy_icons,
            icon_resolution: self.icon_resolution,
        }
    }
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show settings gathered from config files and the environment
    Show,
    /// Print the global config file location
    Path,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Merge(MergeArgs::default())) {
        Commands::Merge(args) => {
            let config = MergeConfig::load(explicit, &args.overrides())
                .context("Failed to load configuration")?;
            let summary = merge::run(&config).with_context(|| {
                format!("Failed to merge icons into {}", config.merged_theme_root().display())
            })?;
            output::render_summary(&summary);
            Ok(())
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (layer, sources) = ConfigLayer::load(explicit)?;
                    if sources.is_empty() {
                        println!("{}", "No config files found.".dimmed());
                    }
                    for source in &sources {
                        println!("{} {}", "Config file:".bold(), source.display());
                    }
                    println!();
                    println!("{}", toml::to_string_pretty(&layer)?);
                }
                ConfigAction::Path => match ConfigLayer::config_path() {
                    Some(path) => println!("{}", path.display()),
                    None => anyhow::bail!("Could not determine config directory"),
                },
            }
            Ok(())
        }
        Commands::Inspect { theme } => {
            merge::validate_theme_roots(std::slice::from_ref(&theme))?;
            let descriptor = ThemeDescriptor::read(&theme.join(INDEX_FILENAME))?;
            let icons = merge::known_icons(&descriptor)
                .with_context(|| format!("Failed to scan {}", theme.display()))?;
            output::render_theme(&descriptor, icons.len());
            Ok(())
        }
    }
}
