//! The constraint policy engine.
//!
//! `ConstraintPolicyEngine` implements the `PolicyGate` trait from
//! warden-core. Evaluation is a fixed, first-match-wins sequence of checks:
//!
//! 1. Tool existence   — unknown tool → Denied
//! 2. Tool permission  — not in `allowed_tools` → Denied
//! 3. Step limit       — `steps_used + 1 > max_steps_per_run` → Denied
//! 4. Cost sanity      — negative declared cost → Denied
//! 5. Budget limit     — `budget_spent + cost > budget_limit` → Denied
//! 6. Approval gate    — access level or risk class trigger → RequiresApproval
//! 7. Otherwise        — Approved
//!
//! The ordering is load-bearing: it determines which violation kind gets
//! reported when an action fails several checks at once, and a denial always
//! precedes the approval gate — a forbidden action is never merely "pending
//! approval".

use tracing::debug;

use warden_contracts::{
    policy::{ActionContext, AgentPolicy, PolicyOutcome},
    run::ConfigWarning,
    task::TaskDefinition,
    tool::ToolRegistry,
};
use warden_core::traits::PolicyGate;

use crate::lint::lint_configuration;

/// A `PolicyGate` built from a registry and policy snapshot.
///
/// The constructor clones both inputs, so edits a caller makes to its own
/// copies after run start are never visible mid-run. The engine holds no
/// mutable state: counters arrive in each `ActionContext`, which keeps
/// evaluation pure and safe for what-if queries.
#[derive(Debug, Clone)]
pub struct ConstraintPolicyEngine {
    registry: ToolRegistry,
    policy: AgentPolicy,
}

impl ConstraintPolicyEngine {
    /// Snapshot the registry and policy for the lifetime of a run.
    pub fn new(registry: &ToolRegistry, policy: &AgentPolicy) -> Self {
        Self {
            registry: registry.clone(),
            policy: policy.clone(),
        }
    }

    /// The policy snapshot this engine enforces.
    pub fn policy(&self) -> &AgentPolicy {
        &self.policy
    }

    /// The registry snapshot this engine consults.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl PolicyGate for ConstraintPolicyEngine {
    /// Evaluate one proposed action against the snapshots and live counters.
    ///
    /// Total and deterministic: every context maps to exactly one outcome,
    /// and the first failing check in declaration order decides it.
    fn evaluate(&self, ctx: &ActionContext) -> PolicyOutcome {
        let action = &ctx.action;

        debug!(
            task_id = %ctx.task_id,
            step = ctx.step,
            tool = %action.tool_name,
            cost = action.cost,
            steps_used = ctx.steps_used,
            budget_spent = ctx.budget_spent,
            "evaluating proposed action"
        );

        // 1. Tool existence — checked before any policy condition.
        let tool = match self.registry.get(&action.tool_name) {
            Some(tool) => tool,
            None => {
                return PolicyOutcome::Denied {
                    reason: format!("unknown tool '{}'", action.tool_name),
                };
            }
        };

        // 2. Tool permission.
        if !self.policy.allowed_tools.contains(&action.tool_name) {
            return PolicyOutcome::Denied {
                reason: format!("tool '{}' not permitted", action.tool_name),
            };
        }

        // 3. Step limit.
        if ctx.steps_used + 1 > self.policy.max_steps_per_run {
            return PolicyOutcome::Denied {
                reason: format!(
                    "step limit exceeded (max {} steps per run)",
                    self.policy.max_steps_per_run
                ),
            };
        }

        // 4. Cost sanity. A negative cost is a configuration error; it is
        //    signaled here rather than silently shrinking the spent budget.
        if action.cost < 0.0 {
            return PolicyOutcome::Denied {
                reason: format!("negative action cost {}", action.cost),
            };
        }

        // 5. Budget limit.
        if ctx.budget_spent + action.cost > self.policy.budget_limit {
            return PolicyOutcome::Denied {
                reason: format!(
                    "budget exceeded ({} spent + {} cost > {} limit)",
                    ctx.budget_spent, action.cost, self.policy.budget_limit
                ),
            };
        }

        // 6. Approval gate — reached only after every denial check passed.
        if self
            .policy
            .approval_required_for
            .matches(tool.access_level, tool.risk_class)
        {
            return PolicyOutcome::RequiresApproval {
                reason: format!(
                    "tool '{}' (access level '{}', risk class '{}') matches an approval trigger",
                    action.tool_name, tool.access_level, tool.risk_class
                ),
            };
        }

        // 7. All checks passed.
        PolicyOutcome::Approved
    }

    /// Run-start configuration lint over the held snapshots and the tasks.
    fn lint(&self, tasks: &[TaskDefinition]) -> Vec<ConfigWarning> {
        lint_configuration(&self.registry, &self.policy, tasks)
    }
}
