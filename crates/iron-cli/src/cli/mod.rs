use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use iron_config::IroncladConfig;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `iron` binary.
#[derive(Debug, Parser)]
#[command(name = "iron", version, about = "Ironclad - deterministic degree audits")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file layered above project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Resolve global flags against loaded configuration.
    #[must_use]
    pub fn global_flags(&self, config: &IroncladConfig) -> GlobalFlags {
        let format = self
            .format
            .or_else(|| OutputFormat::from_config(&config.general.default_format))
            .unwrap_or(OutputFormat::Json);

        let color = match self.color {
            ColorMode::Always => format == OutputFormat::Table,
            ColorMode::Never => false,
            ColorMode::Auto => {
                format == OutputFormat::Table
                    && std::io::stdout().is_terminal()
                    && std::env::var_os("NO_COLOR").is_none()
            }
        };

        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        GlobalFlags {
            format,
            quiet: self.quiet,
            color,
            term_width,
        }
    }
}
