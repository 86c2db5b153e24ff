//! Run-start configuration lint.
//!
//! Configuration problems are tolerated, not fatal: the run proceeds under
//! the effective (possibly no-op) policy, and every problem is surfaced as a
//! `ConfigWarning` on the run report. Contrast this with policy violations,
//! which are first-class runtime outcomes, not configuration defects.

use tracing::warn;

use warden_contracts::{
    policy::AgentPolicy, run::ConfigWarning, task::TaskDefinition, tool::ToolRegistry,
};

/// Inspect the read-only run inputs and report non-fatal problems.
///
/// Checks, in order:
/// - allowed-tool names absent from the registry (unreachable entries)
/// - a zero step ceiling (no action can ever be approved)
/// - a negative budget ceiling (likewise unusable)
/// - negative declared costs in any task's action sequence
pub fn lint_configuration(
    registry: &ToolRegistry,
    policy: &AgentPolicy,
    tasks: &[TaskDefinition],
) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for allowed in &policy.allowed_tools {
        if !registry.contains(allowed) {
            warnings.push(ConfigWarning {
                detail: format!(
                    "allowed tool '{}' is not in the registry and is unreachable",
                    allowed
                ),
            });
        }
    }

    if policy.max_steps_per_run == 0 {
        warnings.push(ConfigWarning {
            detail: "max_steps_per_run is 0; every proposal will be denied".to_string(),
        });
    }

    if policy.budget_limit < 0.0 {
        warnings.push(ConfigWarning {
            detail: format!(
                "budget_limit {} is negative; every costed proposal will be denied",
                policy.budget_limit
            ),
        });
    }

    for task in tasks {
        for (idx, action) in task.expected_actions.iter().enumerate() {
            if action.cost < 0.0 {
                warnings.push(ConfigWarning {
                    detail: format!(
                        "task '{}' action {} ('{}') declares negative cost {}",
                        task.task_id,
                        idx + 1,
                        action.tool_name,
                        action.cost
                    ),
                });
            }
        }
    }

    for warning in &warnings {
        warn!(detail = %warning.detail, "configuration lint");
    }

    warnings
}
