//! Scenario 1: Market Analysis
//!
//! The happy path. The agent reads market data and renders an analyst
//! report, both through permitted read-only tools that stay comfortably
//! inside the step and budget ceilings. Every proposal is approved, every
//! behavior runs, and both tasks finish COMPLETE with zero violations.

use serde_json::json;
use tracing::info;

use warden_contracts::{
    error::WardenResult,
    run::RunReport,
    task::{ActionSpec, TaskDefinition},
};

use super::run_with_sample_policy;

/// The task set: a data read followed by a report over the findings.
pub fn tasks() -> Vec<TaskDefinition> {
    vec![
        TaskDefinition {
            task_id: "task_1".to_string(),
            task_description: "Read market data".to_string(),
            expected_actions: vec![ActionSpec {
                tool_name: "MarketDataAPI_Read".to_string(),
                params: json!({ "query": "tech stock trends" }),
                cost: 10.0,
            }],
            expected_outcome: "Success".to_string(),
        },
        TaskDefinition {
            task_id: "task_report".to_string(),
            task_description: "Summarize the morning's market movements".to_string(),
            expected_actions: vec![
                ActionSpec {
                    tool_name: "MarketDataAPI_Read".to_string(),
                    params: json!({ "query": "overnight movers" }),
                    cost: 10.0,
                },
                ActionSpec {
                    tool_name: "ReportGenerator".to_string(),
                    params: json!({ "topic": "overnight movers" }),
                    cost: 5.0,
                },
            ],
            expected_outcome: "Success".to_string(),
        },
    ]
}

/// Run the market analysis scenario and return the finished report.
pub fn run_scenario() -> WardenResult<RunReport> {
    info!("scenario: market analysis (clean completion)");
    run_with_sample_policy(tasks())
}

// ── Tests ────────────────────────────────────────────────────────────────────
