//! # warden-core
//!
//! The deterministic, policy-gated execution state machine for WARDEN.
//!
//! This crate provides:
//! - The trust-boundary traits (`PolicyGate`, `ToolBehavior`) and the typed
//!   capability table (`BehaviorTable`)
//! - The `AgentSimulator` that steps tasks through the per-task lifecycle,
//!   consulting the gate before every action
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warden_core::{AgentSimulator, traits::{BehaviorTable, PolicyGate}};
//! ```

pub mod simulator;
pub mod traits;

pub use simulator::AgentSimulator;
