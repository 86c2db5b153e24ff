//! Fintech reference runtime scenarios.
//!
//! Each scenario is a self-contained module that wires real WARDEN components
//! (constraint policy engine, behavior table, simulator) with mock fintech
//! data and demonstrates a distinct enforcement pattern. Every scenario
//! returns the finished [`RunReport`](warden_contracts::run::RunReport) so
//! callers can inspect the trace or hand it to the evidence layer.

pub mod approval_gate;
pub mod limit_breach;
pub mod market_analysis;

use warden_contracts::{error::WardenResult, run::RunReport, task::TaskDefinition};
use warden_core::AgentSimulator;
use warden_policy::ConstraintPolicyEngine;

use crate::mock_data::{sample_behaviors, sample_policy, sample_registry};

/// Run a task set against the standard QuantAlgo registry and policy.
fn run_with_sample_policy(tasks: Vec<TaskDefinition>) -> WardenResult<RunReport> {
    let registry = sample_registry();
    let policy = sample_policy();
    let gate = ConstraintPolicyEngine::new(&registry, &policy);

    let simulator = AgentSimulator::new(&registry, tasks, sample_behaviors(), Box::new(gate))?;
    Ok(simulator.run_all_tasks())
}
