//! The WARDEN agent simulator: the deterministic execution state machine.
//!
//! The simulator steps each task through the per-task lifecycle
//!
//!   INIT → PLAN → (gate) → ACT → REVIEW → PLAN … → COMPLETE
//!                        ↘ APPROVAL_REQUIRED
//!                        ↘ VIOLATION
//!
//! The enforcement invariant is absolute: a tool's behavior is NEVER invoked
//! unless `PolicyGate::evaluate()` returns `Approved` for that exact proposal.
//! Cost is charged and the step counter advances only on approval; a denied
//! or approval-gated proposal leaves the counters untouched and halts the
//! affected task (never the run).
//!
//! Counters are scoped per task and reset at task start — each task models an
//! independent agent session. Trace events carry no timestamps, so identical
//! (registry, policy, tasks) inputs always produce byte-identical traces.

use chrono::Utc;
use tracing::{debug, info, warn};

use warden_contracts::{
    error::{WardenError, WardenResult},
    policy::{ActionContext, PolicyOutcome},
    run::{
        EventKind, RunId, RunReport, TaskOutcome, TaskState, TraceEvent, Violation, ViolationKind,
    },
    task::TaskDefinition,
    tool::ToolRegistry,
};

use crate::traits::{BehaviorTable, PolicyGate};

/// Drives one run: all tasks, strictly in order, single-threaded.
///
/// The simulator is the sole writer of run state. Construct it with the
/// read-only inputs, call [`run_all_tasks`](Self::run_all_tasks), and receive
/// a [`RunReport`] — the run is consumed in the process, so the report is
/// read-only by construction.
pub struct AgentSimulator {
    tasks: Vec<TaskDefinition>,
    behaviors: BehaviorTable,
    gate: Box<dyn PolicyGate>,
    run_id: RunId,
    trace: Vec<TraceEvent>,
    violations: Vec<Violation>,
}

impl AgentSimulator {
    /// Create a simulator for one run.
    ///
    /// Resolves the typed capability table up front: every registry tool must
    /// have a bound behavior, otherwise `WardenError::BehaviorMissing` is
    /// returned before anything executes. The registry itself is only needed
    /// for this resolution — the policy gate holds its own snapshot.
    pub fn new(
        registry: &ToolRegistry,
        tasks: Vec<TaskDefinition>,
        behaviors: BehaviorTable,
        gate: Box<dyn PolicyGate>,
    ) -> WardenResult<Self> {
        for tool in registry.iter() {
            if !behaviors.contains(&tool.tool_name) {
                return Err(WardenError::BehaviorMissing {
                    tool_name: tool.tool_name.clone(),
                    mock_function_name: tool.mock_function_name.clone(),
                });
            }
        }

        Ok(Self {
            tasks,
            behaviors,
            gate,
            run_id: RunId::new(),
            trace: Vec::new(),
            violations: Vec::new(),
        })
    }

    /// The generated identifier for this run.
    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    /// Execute every task in order and seal the run.
    ///
    /// Configuration lint runs first; its warnings are attached to the report
    /// and execution proceeds regardless. Consumes the simulator so the
    /// returned report can never be mutated by further stepping.
    pub fn run_all_tasks(mut self) -> RunReport {
        let warnings = self.gate.lint(&self.tasks);
        for warning in &warnings {
            warn!(run_id = %self.run_id, detail = %warning.detail, "configuration warning");
        }

        info!(
            run_id = %self.run_id,
            task_count = self.tasks.len(),
            "simulation starting"
        );

        let tasks = std::mem::take(&mut self.tasks);
        let mut task_outcomes = Vec::with_capacity(tasks.len());
        for task in &tasks {
            task_outcomes.push(self.run_task(task));
        }

        info!(
            run_id = %self.run_id,
            events = self.trace.len(),
            violations = self.violations.len(),
            "simulation finished"
        );

        RunReport {
            run_id: self.run_id,
            trace: self.trace,
            violations: self.violations,
            warnings,
            task_outcomes,
            finalized_at: Utc::now(),
        }
    }

    /// Step one task from INIT to a terminal state.
    ///
    /// Counters start at zero for every task. Actions are consumed strictly
    /// in order; the first non-`Approved` outcome halts the task.
    fn run_task(&mut self, task: &TaskDefinition) -> TaskOutcome {
        let mut steps_used: u32 = 0;
        let mut budget_spent: f64 = 0.0;

        debug!(run_id = %self.run_id, task_id = %task.task_id, "task entering INIT");

        let mut final_state = TaskState::Init;

        for (idx, action) in task.expected_actions.iter().enumerate() {
            let step = idx as u32 + 1;

            // ── PLAN: load the next unconsumed action and propose it ─────────
            self.trace.push(TraceEvent {
                task_id: task.task_id.clone(),
                step,
                kind: EventKind::Proposal,
                tool_name: Some(action.tool_name.clone()),
                outcome: None,
                state: TaskState::Plan,
                cost_charged: 0.0,
                result: None,
            });

            let ctx = ActionContext {
                task_id: task.task_id.clone(),
                step,
                steps_used,
                budget_spent,
                action: action.clone(),
            };

            // ── Gate: the decision is made on the live counters ──────────────
            let outcome = self.gate.evaluate(&ctx);

            match outcome {
                PolicyOutcome::Approved => {
                    budget_spent += action.cost;
                    steps_used += 1;

                    debug!(
                        task_id = %task.task_id,
                        step,
                        tool = %action.tool_name,
                        cost = action.cost,
                        "action approved"
                    );

                    self.trace.push(TraceEvent {
                        task_id: task.task_id.clone(),
                        step,
                        kind: EventKind::Decision,
                        tool_name: Some(action.tool_name.clone()),
                        outcome: Some(PolicyOutcome::Approved),
                        state: TaskState::Act,
                        cost_charged: 0.0,
                        result: None,
                    });

                    // ── ACT: invoke the bound mock behavior ──────────────────
                    //
                    // Only reachable on Approved. The constructor guarantees a
                    // binding for every registry tool; a gate that approves a
                    // tool outside the registry gets a null result.
                    let result = match self.behaviors.get(&action.tool_name) {
                        Some(behavior) => behavior.invoke(&action.params),
                        None => {
                            warn!(
                                task_id = %task.task_id,
                                tool = %action.tool_name,
                                "approved tool has no bound behavior"
                            );
                            serde_json::Value::Null
                        }
                    };

                    // ── REVIEW: record the execution, loop back to PLAN ──────
                    self.trace.push(TraceEvent {
                        task_id: task.task_id.clone(),
                        step,
                        kind: EventKind::Execution,
                        tool_name: Some(action.tool_name.clone()),
                        outcome: None,
                        state: TaskState::Review,
                        cost_charged: action.cost,
                        result: Some(result),
                    });

                    final_state = TaskState::Review;
                }

                PolicyOutcome::RequiresApproval { reason } => {
                    info!(
                        task_id = %task.task_id,
                        step,
                        tool = %action.tool_name,
                        reason = %reason,
                        "task suspended awaiting approval"
                    );

                    self.trace.push(TraceEvent {
                        task_id: task.task_id.clone(),
                        step,
                        kind: EventKind::Decision,
                        tool_name: Some(action.tool_name.clone()),
                        outcome: Some(PolicyOutcome::RequiresApproval {
                            reason: reason.clone(),
                        }),
                        state: TaskState::ApprovalRequired,
                        cost_charged: 0.0,
                        result: None,
                    });

                    self.violations.push(Violation {
                        task_id: task.task_id.clone(),
                        step,
                        kind: ViolationKind::ApprovalRequired,
                        detail: format!(
                            "action '{}' requires approval: {}",
                            action.tool_name, reason
                        ),
                    });

                    final_state = TaskState::ApprovalRequired;
                    break;
                }

                PolicyOutcome::Denied { reason } => {
                    warn!(
                        task_id = %task.task_id,
                        step,
                        tool = %action.tool_name,
                        reason = %reason,
                        "action denied"
                    );

                    self.trace.push(TraceEvent {
                        task_id: task.task_id.clone(),
                        step,
                        kind: EventKind::Decision,
                        tool_name: Some(action.tool_name.clone()),
                        outcome: Some(PolicyOutcome::Denied {
                            reason: reason.clone(),
                        }),
                        state: TaskState::Violation,
                        cost_charged: 0.0,
                        result: None,
                    });

                    self.violations.push(Violation {
                        task_id: task.task_id.clone(),
                        step,
                        kind: ViolationKind::Denied,
                        detail: format!("action '{}' denied: {}", action.tool_name, reason),
                    });

                    final_state = TaskState::Violation;
                    break;
                }
            }
        }

        // No actions remain and the task was not halted: COMPLETE.
        // An empty action sequence completes straight from INIT.
        if matches!(final_state, TaskState::Init | TaskState::Review) {
            let step = task.expected_actions.len() as u32;
            self.trace.push(TraceEvent {
                task_id: task.task_id.clone(),
                step,
                kind: EventKind::Completion,
                tool_name: None,
                outcome: None,
                state: TaskState::Complete,
                cost_charged: 0.0,
                result: None,
            });
            final_state = TaskState::Complete;

            debug!(
                task_id = %task.task_id,
                steps_used,
                budget_spent,
                "task complete"
            );
        }

        TaskOutcome {
            task_id: task.task_id.clone(),
            final_state,
            steps_used,
            budget_spent,
            expected_outcome: task.expected_outcome.clone(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use warden_contracts::{
        error::WardenError,
        policy::{ActionContext, PolicyOutcome},
        run::{ConfigWarning, EventKind, TaskState, ViolationKind},
        task::{ActionSpec, TaskDefinition},
        tool::{AccessLevel, RiskClass, ToolRegistry, ToolSpec},
    };

    use crate::traits::{BehaviorTable, PolicyGate};

    use super::AgentSimulator;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    fn registry() -> ToolRegistry {
        ToolRegistry::new(vec![ToolSpec {
            tool_name: "MarketDataAPI_Read".to_string(),
            description: "Read market data".to_string(),
            access_level: AccessLevel::ReadOnly,
            risk_class: RiskClass::Low,
            mock_function_name: "mock_read_market_data".to_string(),
        }])
    }

    fn task(task_id: &str, actions: Vec<ActionSpec>) -> TaskDefinition {
        TaskDefinition {
            task_id: task_id.to_string(),
            task_description: "test task".to_string(),
            expected_actions: actions,
            expected_outcome: "Success".to_string(),
        }
    }

    fn read_action(cost: f64) -> ActionSpec {
        ActionSpec {
            tool_name: "MarketDataAPI_Read".to_string(),
            params: json!({ "query": "tech stock trends" }),
            cost,
        }
    }

    /// Counts invocations so tests can assert a behavior never ran.
    fn counting_behaviors(counter: Arc<Mutex<u32>>) -> BehaviorTable {
        let mut behaviors = BehaviorTable::new();
        behaviors.bind(
            "MarketDataAPI_Read",
            Box::new(move |params: &serde_json::Value| {
                *counter.lock().unwrap() += 1;
                json!({ "rows": 3, "echo": params })
            }),
        );
        behaviors
    }

    /// A gate that always returns a pre-configured outcome.
    struct FixedGate {
        outcome: PolicyOutcome,
    }

    impl PolicyGate for FixedGate {
        fn evaluate(&self, _ctx: &ActionContext) -> PolicyOutcome {
            self.outcome.clone()
        }
    }

    /// A gate that returns scripted outcomes in sequence.
    struct ScriptedGate {
        outcomes: Mutex<Vec<PolicyOutcome>>,
    }

    impl ScriptedGate {
        fn new(mut outcomes: Vec<PolicyOutcome>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
            }
        }
    }

    impl PolicyGate for ScriptedGate {
        fn evaluate(&self, _ctx: &ActionContext) -> PolicyOutcome {
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .expect("gate consulted more times than scripted")
        }
    }

    fn approve_all() -> Box<dyn PolicyGate> {
        Box::new(FixedGate {
            outcome: PolicyOutcome::Approved,
        })
    }

    // ── Test cases ───────────────────────────────────────────────────────────

    /// A task whose every action is approved ends COMPLETE with zero
    /// violations, charged cost, and advanced step counter.
    #[test]
    fn approved_task_completes_with_counters() {
        let invocations = Arc::new(Mutex::new(0));
        let sim = AgentSimulator::new(
            &registry(),
            vec![task("task_1", vec![read_action(10.0), read_action(15.0)])],
            counting_behaviors(invocations.clone()),
            approve_all(),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(*invocations.lock().unwrap(), 2);
        assert!(report.violations.is_empty());

        let outcome = &report.task_outcomes[0];
        assert_eq!(outcome.final_state, TaskState::Complete);
        assert_eq!(outcome.steps_used, 2);
        assert_eq!(outcome.budget_spent, 25.0);

        // proposal + decision + execution per action, then one completion.
        assert_eq!(report.trace.len(), 7);
        assert_eq!(report.trace.last().unwrap().kind, EventKind::Completion);
        assert_eq!(report.trace.last().unwrap().state, TaskState::Complete);
    }

    /// The behavior is never invoked on a denied proposal, the task halts in
    /// VIOLATION, and exactly one violation pairs with the decision event.
    #[test]
    fn denied_action_halts_task_without_invoking_behavior() {
        let invocations = Arc::new(Mutex::new(0));
        let sim = AgentSimulator::new(
            &registry(),
            vec![task("task_1", vec![read_action(10.0), read_action(10.0)])],
            counting_behaviors(invocations.clone()),
            Box::new(FixedGate {
                outcome: PolicyOutcome::Denied {
                    reason: "tool not permitted".to_string(),
                },
            }),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(*invocations.lock().unwrap(), 0, "behavior must not run on Denied");

        let outcome = &report.task_outcomes[0];
        assert_eq!(outcome.final_state, TaskState::Violation);
        assert_eq!(outcome.steps_used, 0);
        assert_eq!(outcome.budget_spent, 0.0);

        // Only the first action was proposed: proposal + decision, no more.
        assert_eq!(report.trace.len(), 2);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].kind, ViolationKind::Denied);
        assert!(report.violations[0].detail.contains("tool not permitted"));
    }

    /// A first-action approval requirement ends the task in APPROVAL_REQUIRED
    /// with exactly one violation and no further trace events for the task.
    #[test]
    fn approval_required_suspends_task() {
        let invocations = Arc::new(Mutex::new(0));
        let sim = AgentSimulator::new(
            &registry(),
            vec![task("task_2", vec![read_action(50.0), read_action(10.0)])],
            counting_behaviors(invocations.clone()),
            Box::new(FixedGate {
                outcome: PolicyOutcome::RequiresApproval {
                    reason: "risk class 'critical' is approval-gated".to_string(),
                },
            }),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(*invocations.lock().unwrap(), 0);

        let outcome = &report.task_outcomes[0];
        assert_eq!(outcome.final_state, TaskState::ApprovalRequired);
        // Cost is not charged on non-approved actions.
        assert_eq!(outcome.budget_spent, 0.0);
        assert_eq!(outcome.steps_used, 0);

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].kind, ViolationKind::ApprovalRequired);
        assert_eq!(report.violations[0].step, 1);

        // No events beyond the first proposal/decision pair.
        assert_eq!(report.trace.len(), 2);
        assert_eq!(report.trace[1].state, TaskState::ApprovalRequired);
    }

    /// A halted task stops, but the run proceeds to the next task.
    #[test]
    fn halted_task_does_not_halt_run() {
        let sim = AgentSimulator::new(
            &registry(),
            vec![
                task("task_1", vec![read_action(10.0)]),
                task("task_2", vec![read_action(10.0)]),
            ],
            counting_behaviors(Arc::new(Mutex::new(0))),
            Box::new(ScriptedGate::new(vec![
                PolicyOutcome::Denied {
                    reason: "budget exceeded".to_string(),
                },
                PolicyOutcome::Approved,
            ])),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(report.task_outcomes[0].final_state, TaskState::Violation);
        assert_eq!(report.task_outcomes[1].final_state, TaskState::Complete);
    }

    /// Counters are per task: the second task starts from zero even though
    /// the first charged budget.
    #[test]
    fn counters_reset_between_tasks() {
        let sim = AgentSimulator::new(
            &registry(),
            vec![
                task("task_1", vec![read_action(60.0)]),
                task("task_2", vec![read_action(10.0)]),
            ],
            counting_behaviors(Arc::new(Mutex::new(0))),
            approve_all(),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(report.task_outcomes[0].budget_spent, 60.0);
        assert_eq!(report.task_outcomes[1].budget_spent, 10.0);
        assert_eq!(report.task_outcomes[1].steps_used, 1);
    }

    /// A task with no actions completes straight from INIT.
    #[test]
    fn empty_task_completes_immediately() {
        let sim = AgentSimulator::new(
            &registry(),
            vec![task("task_empty", vec![])],
            counting_behaviors(Arc::new(Mutex::new(0))),
            approve_all(),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(report.task_outcomes[0].final_state, TaskState::Complete);
        assert_eq!(report.trace.len(), 1);
        assert_eq!(report.trace[0].kind, EventKind::Completion);
        assert_eq!(report.trace[0].step, 0);
    }

    /// Identical inputs produce byte-identical traces and violations.
    #[test]
    fn rerun_is_deterministic() {
        let run = || {
            let sim = AgentSimulator::new(
                &registry(),
                vec![
                    task("task_1", vec![read_action(10.0), read_action(20.0)]),
                    task("task_2", vec![read_action(5.0)]),
                ],
                counting_behaviors(Arc::new(Mutex::new(0))),
                Box::new(ScriptedGate::new(vec![
                    PolicyOutcome::Approved,
                    PolicyOutcome::Denied {
                        reason: "step limit exceeded".to_string(),
                    },
                    PolicyOutcome::Approved,
                ])),
            )
            .unwrap();
            let report = sim.run_all_tasks();
            (
                serde_json::to_vec(&report.trace).unwrap(),
                serde_json::to_vec(&report.violations).unwrap(),
            )
        };

        let (trace_a, violations_a) = run();
        let (trace_b, violations_b) = run();
        assert_eq!(trace_a, trace_b);
        assert_eq!(violations_a, violations_b);
    }

    /// Lint warnings from the gate are attached to the report; execution
    /// still proceeds.
    #[test]
    fn lint_warnings_attached_to_report() {
        struct WarningGate;

        impl PolicyGate for WarningGate {
            fn evaluate(&self, _ctx: &ActionContext) -> PolicyOutcome {
                PolicyOutcome::Approved
            }

            fn lint(&self, _tasks: &[TaskDefinition]) -> Vec<ConfigWarning> {
                vec![ConfigWarning {
                    detail: "allowed tool 'Ghost_Tool' is not in the registry".to_string(),
                }]
            }
        }

        let sim = AgentSimulator::new(
            &registry(),
            vec![task("task_1", vec![read_action(10.0)])],
            counting_behaviors(Arc::new(Mutex::new(0))),
            Box::new(WarningGate),
        )
        .unwrap();

        let report = sim.run_all_tasks();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].detail.contains("Ghost_Tool"));
        assert_eq!(report.task_outcomes[0].final_state, TaskState::Complete);
    }

    /// A registry tool with no bound behavior fails construction up front.
    #[test]
    fn unbound_behavior_is_rejected_at_construction() {
        let result = AgentSimulator::new(
            &registry(),
            vec![],
            BehaviorTable::new(),
            approve_all(),
        );

        match result {
            Err(WardenError::BehaviorMissing { tool_name, .. }) => {
                assert_eq!(tool_name, "MarketDataAPI_Read");
            }
            other => panic!("expected BehaviorMissing, got {:?}", other.map(|_| ())),
        }
    }
}
