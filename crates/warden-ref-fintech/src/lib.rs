//! # warden-ref-fintech
//!
//! Fintech reference runtime for the WARDEN agent constraint simulator.
//!
//! Models the Market Data Analyst Agent at QuantAlgo Solutions, an autonomous
//! agent that reads market data, generates reports, and proposes portfolio
//! changes — all under an explicit runtime policy. Three scenarios exercise
//! distinct enforcement patterns:
//!
//! 1. **Market Analysis** — permitted read-only tools, clean completion.
//! 2. **Approval Gate** — a critical write suspends the task for human
//!    approval; an unregistered tool halts another task in violation.
//! 3. **Limit Breach** — step and budget ceilings deny mid-task.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod mock_data;
pub mod scenarios;
