//! Human-readable rendering of an [`AuditReport`].

use std::fmt::Write as _;

use iron_core::report::{AuditReport, RequirementProgress};

use super::table::{TableOptions, render_table};

/// Render a report as a header block, a requirement table, and any warnings.
#[must_use]
pub fn render_report(report: &AuditReport, options: &TableOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Student:  {} ({})",
        report.student.name, report.student.student_code
    );
    let _ = writeln!(
        out,
        "Program:  {} [{}]",
        report.program.name, report.program.code
    );
    let _ = writeln!(
        out,
        "Credits:  {} / {} ({}%)",
        credits(report.total_credits_completed),
        credits(report.total_credits_required),
        report.overall_percentage
    );
    let _ = writeln!(out, "Status:   {}", report.status);
    let _ = writeln!(
        out,
        "Eligible: {}",
        if report.graduation_eligible { "yes" } else { "no" }
    );
    out.push('\n');

    let headers = ["requirement", "type", "credits", "percent", "status", "missing"];
    let rows: Vec<Vec<String>> = report.requirements.iter().map(requirement_row).collect();
    if rows.is_empty() {
        out.push_str("(no requirements)");
    } else {
        out.push_str(&render_table(&headers, &rows, *options));
    }

    if !report.warnings.is_empty() {
        out.push_str("\n\nWarnings:\n");
        for warning in &report.warnings {
            let _ = writeln!(out, "  - [{}] {}", warning.kind, warning.message);
        }
        out.truncate(out.trim_end().len());
    }

    out
}

fn requirement_row(progress: &RequirementProgress) -> Vec<String> {
    let missing = if progress.missing_courses.is_empty() {
        String::from("-")
    } else {
        progress
            .missing_courses
            .iter()
            .map(|c| c.course_code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        progress.requirement_name.clone(),
        progress.requirement_type.to_string(),
        format!(
            "{}/{}",
            credits(progress.credits_completed),
            credits(progress.credits_required)
        ),
        format!("{}%", progress.percentage),
        String::from(if progress.is_met { "met" } else { "unmet" }),
        missing,
    ]
}

/// Whole credits print without a trailing `.0`.
fn credits(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
