//! Run state, trace, and violation types.
//!
//! The Run is the sole mutable entity in the system: the simulator appends
//! trace events and violations while stepping tasks, and the moment the last
//! task finishes the run becomes read-only. The evidence layer only ever
//! reads a finished run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::policy::PolicyOutcome;

/// Unique identifier for one simulation run.
///
/// Appears in every exported artifact path and in the executive summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub uuid::Uuid);

impl RunId {
    /// Create a new, unique run ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-task lifecycle states of the execution state machine.
///
/// `Init` is the entry state; `Complete` and `Violation` are terminal.
/// `ApprovalRequired` is terminal too — no auto-approval or resumption is
/// simulated; the requirement is surfaced, not resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Init,
    Plan,
    Act,
    Review,
    ApprovalRequired,
    Complete,
    Violation,
}

/// What a trace event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The agent proposed an action.
    Proposal,
    /// The policy engine returned an outcome.
    Decision,
    /// An approved action's mock behavior ran.
    Execution,
    /// The task finished its action sequence.
    Completion,
}

/// One immutable entry in the execution trace.
///
/// Once appended, never edited — the trace is the system of record.
/// Deliberately timestamp-free so identical inputs always yield
/// byte-identical traces; wall-clock metadata lives on [`RunReport`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// The task this event belongs to.
    pub task_id: String,
    /// 1-based step index within the task (0 for action-less completion).
    pub step: u32,
    /// What happened.
    pub kind: EventKind,
    /// The tool involved, when the event concerns an action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// The policy outcome, present on decision events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PolicyOutcome>,
    /// The task state resulting from this event.
    pub state: TaskState,
    /// Budget charged by this event (non-zero only on executions).
    pub cost_charged: f64,
    /// The mock behavior's result, present on execution events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

/// The class of a recorded violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A Denied outcome (unknown tool, tool not permitted, step or budget limit).
    Denied,
    /// A RequiresApproval outcome.
    ApprovalRequired,
}

/// An immutable record of a denied or approval-gated action.
///
/// Produced only by non-`Approved` policy outcomes — exactly one violation
/// per such outcome, paired with exactly one decision trace event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The task the violation occurred in.
    pub task_id: String,
    /// 1-based step index of the offending proposal.
    pub step: u32,
    /// Denied or approval-required.
    pub kind: ViolationKind,
    /// Human-readable detail, including the policy engine's reason.
    pub detail: String,
}

/// A non-fatal configuration problem detected at run start.
///
/// Execution proceeds with the effective (possibly no-op) policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigWarning {
    /// What is wrong and where.
    pub detail: String,
}

/// The final disposition of one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// The task this outcome summarizes.
    pub task_id: String,
    /// Terminal state the task ended in.
    pub final_state: TaskState,
    /// Approved actions executed.
    pub steps_used: u32,
    /// Budget actually charged (cost is never charged on non-approved actions).
    pub budget_spent: f64,
    /// The task's declared expectation, echoed for report comparison.
    pub expected_outcome: String,
}

/// The read-only result of a finished run.
///
/// Everything the excluded presentation/export layers need: the trace, the
/// violations, the run identifier, and per-task outcomes. `finalized_at` is
/// metadata only and is excluded from any correctness or determinism check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Generated identifier for this run.
    pub run_id: RunId,
    /// The ordered, immutable log of all proposal/decision/execution events.
    pub trace: Vec<TraceEvent>,
    /// All denied and approval-gated actions.
    pub violations: Vec<Violation>,
    /// Configuration warnings gathered at run start.
    pub warnings: Vec<ConfigWarning>,
    /// One outcome per task, in task order.
    pub task_outcomes: Vec<TaskOutcome>,
    /// Wall-clock time (UTC) the run finished. Metadata only.
    pub finalized_at: DateTime<Utc>,
}

impl RunReport {
    /// Count tasks that ended in the given terminal state.
    pub fn count_in_state(&self, state: TaskState) -> usize {
        self.task_outcomes
            .iter()
            .filter(|o| o.final_state == state)
            .count()
    }
}
