//! Policy configuration, evaluation context, and outcome types.
//!
//! The policy engine consumes an `ActionContext` and produces a
//! `PolicyOutcome`. Any outcome other than `Approved` halts the affected
//! task — a denied action is never executed, and a gated action is never
//! auto-approved.

use serde::{Deserialize, Serialize};

use crate::{
    task::ActionSpec,
    tool::{AccessLevel, RiskClass},
};

/// Access levels and risk classes whose match forces human approval.
///
/// Matching either set is sufficient; both sets may be empty, in which case
/// no action is approval-gated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalTriggers {
    /// Access levels requiring sign-off (e.g. `write`).
    pub access_levels: Vec<AccessLevel>,
    /// Risk classes requiring sign-off (e.g. `critical`).
    pub risk_classes: Vec<RiskClass>,
}

impl ApprovalTriggers {
    /// Return true if a tool with the given attributes is approval-gated.
    pub fn matches(&self, access_level: AccessLevel, risk_class: RiskClass) -> bool {
        self.access_levels.contains(&access_level) || self.risk_classes.contains(&risk_class)
    }
}

/// The declared runtime policy bounding one agent run.
///
/// Read-only for the lifetime of a run. Serializes to the persisted
/// `agent_policy.json` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPolicy {
    /// Tool names the agent may invoke. Entries absent from the registry are
    /// unreachable and are surfaced as configuration warnings, never as
    /// runtime faults.
    pub allowed_tools: Vec<String>,
    /// Ceiling on approved actions per task.
    pub max_steps_per_run: u32,
    /// Ceiling on cumulative action cost per task (tokens / compute proxy).
    pub budget_limit: f64,
    /// Conditions that force human approval regardless of budget and steps.
    pub approval_required_for: ApprovalTriggers,
    /// Free-text escalation directive. Reported verbatim in the executive
    /// summary; never enforced programmatically.
    pub escalation_rule: String,
}

/// The decision emitted by the policy engine for a single proposed action.
///
/// Evaluation is first-match-wins and total: a denial always takes precedence
/// over an approval requirement, so a forbidden action is never merely
/// "pending approval".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolicyOutcome {
    /// The action is permitted. The simulator charges its cost and executes
    /// the bound mock behavior.
    Approved,

    /// The action is suspended pending human approval.
    ///
    /// No auto-approval is simulated; the task halts in `APPROVAL_REQUIRED`
    /// and the requirement is surfaced as a violation record.
    RequiresApproval {
        /// Which gate fired (access level or risk class).
        reason: String,
    },

    /// The action is denied outright. The task halts in `VIOLATION`.
    Denied {
        /// The first failing condition in evaluation order.
        reason: String,
    },
}

/// Everything the policy engine needs to decide on one proposed action.
///
/// Built by the simulator from the live per-task counters. All fields are
/// plain values so the engine stays pure and trivially reusable for what-if
/// queries that must not mutate run state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionContext {
    /// The task proposing the action.
    pub task_id: String,
    /// 1-based index of this proposal within the task's action sequence.
    pub step: u32,
    /// Approved actions so far in this task.
    pub steps_used: u32,
    /// Budget charged so far in this task.
    pub budget_spent: f64,
    /// The proposed (tool, params, cost) triple.
    pub action: ActionSpec,
}
