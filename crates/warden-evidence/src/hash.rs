//! SHA-256 hashing primitives.
//!
//! All digests in WARDEN are SHA-256, encoded as lowercase 64-character hex
//! strings. `trace_digest` folds the whole execution trace into a single
//! chained commitment: every event's hash is computed over its canonical JSON
//! plus the previous hash, so altering any event — even a single byte —
//! changes the terminal digest.

use sha2::{Digest, Sha256};

use warden_contracts::run::TraceEvent;

/// The sentinel previous-hash seeding every trace chain.
///
/// 64 hex zeros — a value that can never be the SHA-256 of real data.
pub const GENESIS_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Hash arbitrary bytes, returning a lowercase hex-encoded SHA-256 string.
///
/// Deterministic: the same input always produces the same output.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hash a UTF-8 string, returning a lowercase hex-encoded SHA-256 string.
pub fn hash_str(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

/// Compute the chained digest of an execution trace.
///
/// Each event contributes the SHA-256 of (previous digest bytes ‖ canonical
/// JSON of the event); the final link is returned. An empty trace yields
/// `GENESIS_HASH`.
///
/// # Panics
///
/// Panics if an event cannot be serialized to JSON — which cannot happen for
/// the well-formed `TraceEvent` type.
pub fn trace_digest(events: &[TraceEvent]) -> String {
    let mut digest = GENESIS_HASH.to_string();

    for event in events {
        let event_json =
            serde_json::to_vec(event).expect("TraceEvent must always be serializable to JSON");

        let mut hasher = Sha256::new();
        hasher.update(digest.as_bytes());
        hasher.update(&event_json);
        digest = hex::encode(hasher.finalize());
    }

    digest
}
