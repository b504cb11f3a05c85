use std::io::Read;
use std::path::Path;

use anyhow::Context;
use iron_config::IroncladConfig;
use iron_core::input::AuditInput;
use iron_core::policy::AuditPolicy;
use iron_engine::AuditEngine;
use iron_schema::{AUDIT_INPUT, SchemaRegistry};

use crate::cli::root_commands::AuditArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `iron audit`.
pub fn handle(args: &AuditArgs, config: &IroncladConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = load_snapshot(&args.snapshot)?;
    let policy = resolve_policy(config.audit, args);

    let report = AuditEngine::new(policy)
        .run(&input)
        .with_context(|| format!("failed to audit student {}", input.student.student_code))?;

    if !flags.quiet && !report.warnings.is_empty() && flags.format != OutputFormat::Table {
        eprintln!(
            "iron: {} record(s) excluded from the audit; see `warnings` in the report",
            report.warnings.len()
        );
    }

    match flags.format {
        OutputFormat::Table => {
            println!("{}", output::report::render_report(&report, &flags.table_options()));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output::output(&report, flags),
    }
}

fn resolve_policy(configured: AuditPolicy, args: &AuditArgs) -> AuditPolicy {
    let mut policy = configured;
    if let Some(threshold) = args.at_risk_threshold {
        policy = policy.with_threshold(threshold);
    }
    if args.flag_stalled_required {
        policy.flag_stalled_required = true;
    }
    policy
}

/// Read, schema-check, and deserialize an audit snapshot.
pub fn load_snapshot(path: &Path) -> anyhow::Result<AuditInput> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read snapshot from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).context("snapshot is not valid JSON")?;

    SchemaRegistry::new()
        .validate(AUDIT_INPUT, &value)
        .context("snapshot does not match the audit_input schema")?;

    let input: AuditInput =
        serde_json::from_value(value).context("failed to decode audit snapshot")?;
    tracing::debug!(
        student = %input.student.id,
        enrollments = input.enrollments.len(),
        substitutions = input.substitutions.len(),
        catalog = input.catalog.len(),
        "loaded audit snapshot"
    );
    Ok(input)
}
