use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit a student snapshot and print the report.
    Audit(AuditArgs),
    /// List registered JSON Schemas, or print one.
    Schema(SchemaArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Path to an audit snapshot JSON file (`-` reads stdin).
    pub snapshot: PathBuf,

    /// Override `audit.at_risk_threshold_percent` for this run.
    #[arg(long)]
    pub at_risk_threshold: Option<f64>,

    /// Also mark students at risk when a core or major requirement has no credit.
    #[arg(long)]
    pub flag_stalled_required: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `audit_input`). Lists all names when omitted.
    pub type_name: Option<String>,
}
