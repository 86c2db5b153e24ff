//! # warden-evidence
//!
//! Tamper-evident evidence generation for finished WARDEN runs.
//!
//! ## Overview
//!
//! Given a finished run's report plus the registry/policy/task snapshots it
//! executed under, this crate serializes the seven persisted artifacts,
//! computes a SHA-256 digest per artifact and a chained digest over the
//! trace, renders the executive summary, and exports everything to a
//! run-scoped directory.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warden_evidence::EvidenceBundle;
//!
//! let bundle = EvidenceBundle::assemble(&report, &registry, &policy, &tasks)?;
//! let output_dir = bundle.write_to(Path::new("reports"))?;
//! ```

pub mod bundle;
pub mod hash;
pub mod manifest;
pub mod summary;

pub use bundle::EvidenceBundle;
pub use hash::{hash_bytes, hash_str, trace_digest, GENESIS_HASH};
pub use manifest::EvidenceManifest;
pub use summary::render_summary;

// ── Tests ─────────────────────────────────────────────────────────────────────
