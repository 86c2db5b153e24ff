//! Scenario 2: Approval Gate
//!
//! Two distinct halts. The portfolio update is a permitted tool whose
//! critical risk class matches an approval trigger, so its task suspends in
//! APPROVAL_REQUIRED with nothing charged. The configuration change is not
//! on the allowed list at all, so its task halts in VIOLATION before any
//! behavior runs.

use serde_json::json;
use tracing::info;

use warden_contracts::{
    error::WardenResult,
    run::RunReport,
    task::{ActionSpec, TaskDefinition},
};

use super::run_with_sample_policy;

/// The task set: a critical write and an unpermitted execute.
pub fn tasks() -> Vec<TaskDefinition> {
    vec![
        TaskDefinition {
            task_id: "task_2".to_string(),
            task_description: "Update portfolio (should require approval)".to_string(),
            expected_actions: vec![ActionSpec {
                tool_name: "Portfolio_Update".to_string(),
                params: json!({ "symbol": "ABC", "quantity": 100 }),
                cost: 50.0,
            }],
            expected_outcome: "Approval Required".to_string(),
        },
        TaskDefinition {
            task_id: "task_config".to_string(),
            task_description: "Change system configuration (not permitted)".to_string(),
            expected_actions: vec![ActionSpec {
                tool_name: "System_Config_Change".to_string(),
                params: json!({ "setting": "risk_threshold", "value": "off" }),
                cost: 20.0,
            }],
            expected_outcome: "Violation".to_string(),
        },
    ]
}

/// Run the approval gate scenario and return the finished report.
pub fn run_scenario() -> WardenResult<RunReport> {
    info!("scenario: approval gate (suspension and denial)");
    run_with_sample_policy(tasks())
}

// ── Tests ────────────────────────────────────────────────────────────────────
