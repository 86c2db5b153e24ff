//! Task definition types.
//!
//! Tasks are the test scenarios an agent is stepped through: an ordered
//! sequence of expected actions plus an outcome label used only for
//! reporting, never for control flow.

use serde::{Deserialize, Serialize};

/// One entry in a task's action sequence: the (tool, params, cost) triple
/// the agent proposes at that step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// The tool the agent wants to invoke.
    pub tool_name: String,
    /// Parameters passed to the tool's mock behavior.
    pub params: serde_json::Value,
    /// Declared cost charged against the budget if the action is approved.
    pub cost: f64,
}

/// A single task the simulator drives through the state machine.
///
/// Serializes to the persisted `task_definitions.json` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Unique id within one run.
    pub task_id: String,
    /// Human description of what the task exercises.
    pub task_description: String,
    /// Ordered actions consumed one per step.
    pub expected_actions: Vec<ActionSpec>,
    /// Label compared against the actual result in reports only.
    pub expected_outcome: String,
}
