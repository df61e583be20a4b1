//! Command-line interface
//!
//! Without a subcommand the title screen window opens. Subcommands expose
//! the same data sources without a window.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::{OutputFormat, print_error};

use crate::config::Config;

/// Titlescreen - native title screen for a roguelike monster-battling game
#[derive(Parser, Debug)]
#[command(name = "titlescreen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    /// Override the UI language (e.g. "de", "zh-CN")
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Override the game API base URL
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref locale) = self.locale {
            config.launcher.locale = locale.clone();
        }
        if let Some(ref api_base) = self.api_base {
            config.title.api_base = api_base.clone();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the player and battle counts once
    Stats,

    /// List the social links for the resolved language
    Links,

    /// Print a random splash message
    Splash {
        /// Print every message instead of one
        #[arg(long)]
        all: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a subcommand with the effective configuration
pub async fn run(command: Commands, config: Config, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Stats => commands::title::stats(&config, format).await,
        Commands::Links => commands::title::links(&config, format),
        Commands::Splash { all } => commands::title::splash(all, format),
        Commands::Config { command } => commands::config::run(command, &config, format, quiet),
    }
}
