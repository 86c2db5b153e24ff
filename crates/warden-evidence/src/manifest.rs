//! Evidence manifest types.
//!
//! The manifest is the integrity index of an evidence bundle: one digest per
//! artifact plus the chained trace digest. Verifiers recompute digests from
//! the artifact bytes and compare; any single-byte change is detected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hash::hash_bytes;

/// A hash-indexed listing of all artifacts produced by a run.
///
/// `artifacts` maps artifact filename → SHA-256 digest; `files` repeats the
/// filenames in deterministic (sorted) order for quick enumeration. The
/// manifest never lists itself — it is the commitment, not a committed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceManifest {
    /// Artifact filenames in sorted order.
    pub files: Vec<String>,
    /// Artifact filename → lowercase hex SHA-256 of its bytes.
    pub artifacts: BTreeMap<String, String>,
    /// Chained digest over the execution trace events.
    pub trace_digest: String,
}

impl EvidenceManifest {
    /// Build a manifest from in-memory artifact bytes.
    pub fn build(artifacts: &[(String, Vec<u8>)], trace_digest: String) -> Self {
        let digests: BTreeMap<String, String> = artifacts
            .iter()
            .map(|(name, bytes)| (name.clone(), hash_bytes(bytes)))
            .collect();

        Self {
            files: digests.keys().cloned().collect(),
            artifacts: digests,
            trace_digest,
        }
    }

    /// Look up the digest recorded for an artifact.
    pub fn digest_of(&self, artifact: &str) -> Option<&str> {
        self.artifacts.get(artifact).map(|s| s.as_str())
    }

    /// Verify a set of artifact bytes against the recorded digests.
    ///
    /// Returns `true` only when every listed artifact is present with
    /// matching bytes and no extra artifacts are supplied.
    pub fn verify(&self, artifacts: &[(String, Vec<u8>)]) -> bool {
        if artifacts.len() != self.artifacts.len() {
            return false;
        }
        artifacts.iter().all(|(name, bytes)| {
            self.digest_of(name)
                .map(|expected| expected == hash_bytes(bytes))
                .unwrap_or(false)
        })
    }
}
