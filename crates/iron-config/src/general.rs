//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default output format for reports.
fn default_format() -> String {
    "json".to_string()
}

/// Output formats the CLI knows how to render.
pub const KNOWN_FORMATS: [&str; 3] = ["json", "table", "raw"];

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// Whether `default_format` names a known renderer.
    #[must_use]
    pub fn has_known_format(&self) -> bool {
        KNOWN_FORMATS.contains(&self.default_format.as_str())
    }
}
