use clap::ValueEnum;

use crate::output::table::TableOptions;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse the `general.default_format` config value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}

/// When to color table output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Global flags resolved against configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub color: bool,
    pub term_width: Option<usize>,
}

impl GlobalFlags {
    /// Table rendering options derived from these flags.
    #[must_use]
    pub const fn table_options(&self) -> TableOptions {
        TableOptions {
            max_width: self.term_width,
            color: self.color,
        }
    }
}
