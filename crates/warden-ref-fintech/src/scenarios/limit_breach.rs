//! Scenario 3: Limit Breach
//!
//! Resource ceilings deny mid-task. One task proposes six cheap reads
//! against a five-step ceiling: the first five are approved and executed,
//! the sixth is denied on the step limit. A second task burns the budget in
//! three large reads: the first two fit, the third would overdraw and is
//! denied with nothing further charged.

use serde_json::json;
use tracing::info;

use warden_contracts::{
    error::WardenResult,
    run::RunReport,
    task::{ActionSpec, TaskDefinition},
};

use super::run_with_sample_policy;

fn read(query: &str, cost: f64) -> ActionSpec {
    ActionSpec {
        tool_name: "MarketDataAPI_Read".to_string(),
        params: json!({ "query": query }),
        cost,
    }
}

/// The task set: a step-limit breach and a budget breach.
pub fn tasks() -> Vec<TaskDefinition> {
    vec![
        TaskDefinition {
            task_id: "task_steps".to_string(),
            task_description: "Poll market data past the step ceiling".to_string(),
            expected_actions: (1..=6)
                .map(|i| read(&format!("poll #{i}"), 2.0))
                .collect(),
            expected_outcome: "Violation".to_string(),
        },
        TaskDefinition {
            task_id: "task_budget".to_string(),
            task_description: "Deep scans that overdraw the budget".to_string(),
            expected_actions: vec![
                read("sector scan: technology", 40.0),
                read("sector scan: energy", 40.0),
                read("sector scan: healthcare", 40.0),
            ],
            expected_outcome: "Violation".to_string(),
        },
    ]
}

/// Run the limit breach scenario and return the finished report.
pub fn run_scenario() -> WardenResult<RunReport> {
    info!("scenario: limit breach (step and budget ceilings)");
    run_with_sample_policy(tasks())
}

// ── Tests ────────────────────────────────────────────────────────────────────
