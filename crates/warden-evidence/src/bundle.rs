//! Evidence bundle assembly and export.
//!
//! The bundle is assembled entirely in memory first: every artifact is
//! serialized, digested, and indexed before a single byte touches disk. A
//! failed write is therefore fatal to the export step only — the finished
//! run's trace and violations remain valid and inspectable in memory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use warden_contracts::{
    error::{WardenError, WardenResult},
    policy::AgentPolicy,
    run::{RunId, RunReport},
    task::TaskDefinition,
    tool::ToolRegistry,
};

use crate::{hash::trace_digest, manifest::EvidenceManifest, summary::render_summary};

// Artifact filenames, one per persisted concern.
pub const TOOL_REGISTRY_FILE: &str = "tool_registry.json";
pub const AGENT_POLICY_FILE: &str = "agent_policy.json";
pub const TASK_DEFINITIONS_FILE: &str = "task_definitions.json";
pub const EXECUTION_TRACE_FILE: &str = "execution_trace.json";
pub const VIOLATIONS_SUMMARY_FILE: &str = "violations_summary.json";
pub const EXECUTIVE_SUMMARY_FILE: &str = "executive_summary.md";
pub const EVIDENCE_MANIFEST_FILE: &str = "evidence_manifest.json";

/// A fully assembled, in-memory evidence bundle for one finished run.
///
/// Construction performs all serialization and hashing;
/// [`write_to`](Self::write_to) only copies bytes to disk.
pub struct EvidenceBundle {
    run_id: RunId,
    artifacts: Vec<(String, Vec<u8>)>,
    manifest: EvidenceManifest,
}

impl EvidenceBundle {
    /// Serialize all artifacts for a finished run and index them.
    ///
    /// The registry, policy, and task snapshots are the exact read-only
    /// inputs the run executed under, persisted alongside the trace so the
    /// evidence is self-contained.
    pub fn assemble(
        report: &RunReport,
        registry: &ToolRegistry,
        policy: &AgentPolicy,
        tasks: &[TaskDefinition],
    ) -> WardenResult<Self> {
        let mut artifacts: Vec<(String, Vec<u8>)> = vec![
            (TOOL_REGISTRY_FILE.to_string(), to_json(TOOL_REGISTRY_FILE, registry)?),
            (AGENT_POLICY_FILE.to_string(), to_json(AGENT_POLICY_FILE, policy)?),
            (
                TASK_DEFINITIONS_FILE.to_string(),
                to_json(TASK_DEFINITIONS_FILE, &tasks)?,
            ),
            (
                EXECUTION_TRACE_FILE.to_string(),
                to_json(EXECUTION_TRACE_FILE, &report.trace)?,
            ),
            (
                VIOLATIONS_SUMMARY_FILE.to_string(),
                to_json(VIOLATIONS_SUMMARY_FILE, &report.violations)?,
            ),
            (
                EXECUTIVE_SUMMARY_FILE.to_string(),
                render_summary(report, policy).into_bytes(),
            ),
        ];

        let manifest = EvidenceManifest::build(&artifacts, trace_digest(&report.trace));

        // The manifest itself is written but never self-referenced.
        artifacts.push((
            EVIDENCE_MANIFEST_FILE.to_string(),
            to_json(EVIDENCE_MANIFEST_FILE, &manifest)?,
        ));

        debug!(
            run_id = %report.run_id,
            artifacts = artifacts.len(),
            "evidence bundle assembled in memory"
        );

        Ok(Self {
            run_id: report.run_id.clone(),
            artifacts,
            manifest,
        })
    }

    /// The integrity index for this bundle.
    pub fn manifest(&self) -> &EvidenceManifest {
        &self.manifest
    }

    /// The assembled artifacts as (filename, bytes) pairs.
    pub fn artifacts(&self) -> &[(String, Vec<u8>)] {
        &self.artifacts
    }

    /// Persist every artifact under `<base_dir>/<run_id>/`.
    ///
    /// Returns the run-scoped output directory. Any I/O failure aborts the
    /// export with `ArtifactWriteFailed`; nothing already in memory is
    /// affected.
    pub fn write_to(&self, base_dir: &Path) -> WardenResult<PathBuf> {
        let run_dir = base_dir.join(self.run_id.to_string());

        std::fs::create_dir_all(&run_dir).map_err(|e| WardenError::ArtifactWriteFailed {
            artifact: run_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for (name, bytes) in &self.artifacts {
            let path = run_dir.join(name);
            std::fs::write(&path, bytes).map_err(|e| WardenError::ArtifactWriteFailed {
                artifact: name.clone(),
                reason: e.to_string(),
            })?;
        }

        info!(
            run_id = %self.run_id,
            output_dir = %run_dir.display(),
            artifacts = self.artifacts.len(),
            "evidence bundle exported"
        );

        Ok(run_dir)
    }
}

/// Serialize a value to pretty-printed JSON bytes.
fn to_json<T: Serialize>(artifact: &str, value: &T) -> WardenResult<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| WardenError::SerializationFailed {
        artifact: artifact.to_string(),
        reason: e.to_string(),
    })
}
