//! Core trait definitions for the WARDEN execution pipeline.
//!
//! Two seams define the trust boundary:
//!
//! - `PolicyGate`    — trusted decision function (evaluated before every action)
//! - `ToolBehavior`  — deterministic mock stand-in for a real tool call
//!
//! The simulator wires them together: a behavior is never invoked unless the
//! gate first returns `Approved` for the proposing action.

use std::collections::HashMap;

use warden_contracts::{
    policy::{ActionContext, PolicyOutcome},
    run::ConfigWarning,
    task::TaskDefinition,
};

/// A deterministic stand-in for a tool's real side-effecting call.
///
/// Implementations MUST be pure functions of `params`: same parameters, same
/// result, no I/O. The simulator relies on this for byte-identical traces
/// across re-runs of identical inputs.
pub trait ToolBehavior: Send + Sync {
    /// Produce the mock result for one invocation.
    fn invoke(&self, params: &serde_json::Value) -> serde_json::Value;
}

/// Any `Fn(&Value) -> Value` closure is a usable behavior.
impl<F> ToolBehavior for F
where
    F: Fn(&serde_json::Value) -> serde_json::Value + Send + Sync,
{
    fn invoke(&self, params: &serde_json::Value) -> serde_json::Value {
        self(params)
    }
}

/// The typed capability table: tool name → bound behavior.
///
/// Resolved once at run start and immutable thereafter — there is no
/// name-based dynamic dispatch at execution time. The simulator's constructor
/// verifies every registry tool has an entry before any task runs.
#[derive(Default)]
pub struct BehaviorTable {
    inner: HashMap<String, Box<dyn ToolBehavior>>,
}

impl BehaviorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a behavior to a tool name, replacing any previous binding.
    pub fn bind(&mut self, tool_name: impl Into<String>, behavior: Box<dyn ToolBehavior>) {
        self.inner.insert(tool_name.into(), behavior);
    }

    /// Look up the behavior bound to a tool name.
    pub fn get(&self, tool_name: &str) -> Option<&dyn ToolBehavior> {
        self.inner.get(tool_name).map(|b| b.as_ref())
    }

    /// Return true if a behavior is bound for the given tool name.
    pub fn contains(&self, tool_name: &str) -> bool {
        self.inner.contains_key(tool_name)
    }

    /// Number of bound behaviors.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no behaviors are bound.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// The policy gate: the decision function consulted before every action.
///
/// Implementations are **trusted** and must be deterministic and total —
/// every `ActionContext` maps to exactly one outcome, with no I/O and no
/// mutation. Statelessness makes the gate safe for what-if queries that must
/// not touch live run counters.
pub trait PolicyGate: Send + Sync {
    /// Decide whether the proposed action may proceed.
    ///
    /// Called by the simulator with the live per-task counters. A non-
    /// `Approved` outcome halts the proposing task; the simulator never
    /// invokes the tool's behavior for it.
    fn evaluate(&self, ctx: &ActionContext) -> PolicyOutcome;

    /// Inspect the configuration at run start and report non-fatal problems.
    ///
    /// Warnings are attached to the run report; execution proceeds with the
    /// effective (possibly no-op) policy. The default implementation reports
    /// nothing.
    fn lint(&self, tasks: &[TaskDefinition]) -> Vec<ConfigWarning> {
        let _ = tasks;
        Vec::new()
    }
}
