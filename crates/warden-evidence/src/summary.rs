//! Executive summary rendering.
//!
//! The summary is the human-facing deliverable: a short markdown report a
//! stakeholder can read without opening the JSON artifacts. The policy's
//! escalation directive is reproduced verbatim — it is descriptive text for
//! the reporting layer, never enforced programmatically.

use warden_contracts::{
    policy::AgentPolicy,
    run::{RunReport, TaskState},
};

/// Render the executive summary for a finished run.
pub fn render_summary(report: &RunReport, policy: &AgentPolicy) -> String {
    let total = report.task_outcomes.len();
    let complete = report.count_in_state(TaskState::Complete);
    let approval_required = report.count_in_state(TaskState::ApprovalRequired);
    let violated = report.count_in_state(TaskState::Violation);

    let mut out = String::new();
    out.push_str("# Executive Summary\n\n");
    out.push_str(&format!("Run ID: `{}`\n\n", report.run_id));
    out.push_str(&format!("Finalized: {}\n\n", report.finalized_at.to_rfc3339()));

    out.push_str("## Results\n\n");
    out.push_str(&format!("- Tasks run: {}\n", total));
    out.push_str(&format!("- Clean completions: {}\n", complete));
    out.push_str(&format!("- Approval required: {}\n", approval_required));
    out.push_str(&format!("- Denied / violated: {}\n", violated));
    out.push_str(&format!("- Violations recorded: {}\n", report.violations.len()));
    out.push_str(&format!(
        "- Configuration warnings: {}\n\n",
        report.warnings.len()
    ));

    if !report.warnings.is_empty() {
        out.push_str("## Configuration Warnings\n\n");
        for warning in &report.warnings {
            out.push_str(&format!("- {}\n", warning.detail));
        }
        out.push('\n');
    }

    out.push_str("## Task Outcomes\n\n");
    for outcome in &report.task_outcomes {
        out.push_str(&format!(
            "- `{}`: {:?} (steps {}, budget spent {}, expected: {})\n",
            outcome.task_id,
            outcome.final_state,
            outcome.steps_used,
            outcome.budget_spent,
            outcome.expected_outcome
        ));
    }
    out.push('\n');

    if !report.violations.is_empty() {
        out.push_str("## Violations\n\n");
        for violation in &report.violations {
            out.push_str(&format!(
                "- `{}` step {}: {:?} — {}\n",
                violation.task_id, violation.step, violation.kind, violation.detail
            ));
        }
        out.push('\n');
    }

    out.push_str("## Escalation Rule\n\n");
    out.push_str(&policy.escalation_rule);
    out.push('\n');

    out
}
