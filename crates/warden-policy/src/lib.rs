//! # warden-policy
//!
//! The constraint policy engine for the WARDEN simulator.
//!
//! ## Overview
//!
//! This crate provides [`ConstraintPolicyEngine`], which implements the
//! [`PolicyGate`](warden_core::traits::PolicyGate) trait. The engine holds
//! read-only snapshots of the tool registry and agent policy and evaluates
//! each proposed action through a fixed first-match sequence: tool existence,
//! tool permission, step limit, cost sanity, budget limit, approval gate.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use warden_policy::ConstraintPolicyEngine;
//!
//! let engine = ConstraintPolicyEngine::new(&registry, &policy);
//! // Pass `Box::new(engine)` to `warden_core::AgentSimulator::new(...)`.
//! ```
//!
//! [`lint_configuration`] performs the run-start configuration checks; the
//! engine exposes it through `PolicyGate::lint` so the simulator can attach
//! warnings to the run report.

pub mod engine;
pub mod lint;

pub use engine::ConstraintPolicyEngine;
pub use lint::lint_configuration;

// ── Tests ─────────────────────────────────────────────────────────────────────
