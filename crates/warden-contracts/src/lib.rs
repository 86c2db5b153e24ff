//! # warden-contracts
//!
//! Shared types, schemas, and contracts for the WARDEN agent runtime
//! constraint simulator.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod error;
pub mod policy;
pub mod run;
pub mod task;
pub mod tool;

#[cfg(test)]
mod tests {
    use super::*;
    use error::WardenError;
    use policy::{AgentPolicy, ApprovalTriggers, PolicyOutcome};
    use run::{RunId, TaskState, ViolationKind};
    use tool::{AccessLevel, RiskClass, ToolRegistry, ToolSpec};

    fn market_data_tool() -> ToolSpec {
        ToolSpec {
            tool_name: "MarketDataAPI_Read".to_string(),
            description: "Read market data".to_string(),
            access_level: AccessLevel::ReadOnly,
            risk_class: RiskClass::Low,
            mock_function_name: "mock_read_market_data".to_string(),
        }
    }

    // ── ToolRegistry ─────────────────────────────────────────────────────────

    #[test]
    fn registry_lookup_by_name() {
        let registry = ToolRegistry::new(vec![market_data_tool()]);

        assert!(registry.contains("MarketDataAPI_Read"));
        assert!(!registry.contains("Portfolio_Update"));

        let tool = registry.get("MarketDataAPI_Read").unwrap();
        assert_eq!(tool.access_level, AccessLevel::ReadOnly);
        assert_eq!(tool.risk_class, RiskClass::Low);
    }

    #[test]
    fn registry_serializes_as_array() {
        let registry = ToolRegistry::new(vec![market_data_tool()]);
        let json = serde_json::to_value(&registry).unwrap();

        // Persisted layout is a bare array of tool objects.
        let entries = json.as_array().expect("registry must serialize as an array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["tool_name"], "MarketDataAPI_Read");
        assert_eq!(entries[0]["access_level"], "read-only");
        assert_eq!(entries[0]["risk_class"], "low");
    }

    // ── Access level / risk class wire spellings ─────────────────────────────

    #[test]
    fn access_level_wire_strings() {
        assert_eq!(
            serde_json::to_string(&AccessLevel::ReadOnly).unwrap(),
            "\"read-only\""
        );
        assert_eq!(serde_json::to_string(&AccessLevel::Write).unwrap(), "\"write\"");
        assert_eq!(
            serde_json::to_string(&AccessLevel::Execute).unwrap(),
            "\"execute\""
        );

        let decoded: AccessLevel = serde_json::from_str("\"read-only\"").unwrap();
        assert_eq!(decoded, AccessLevel::ReadOnly);
    }

    #[test]
    fn risk_class_wire_strings() {
        assert_eq!(serde_json::to_string(&RiskClass::Critical).unwrap(), "\"critical\"");
        let decoded: RiskClass = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(decoded, RiskClass::Medium);
    }

    // ── ApprovalTriggers ─────────────────────────────────────────────────────

    #[test]
    fn approval_triggers_match_either_set() {
        let triggers = ApprovalTriggers {
            access_levels: vec![AccessLevel::Write],
            risk_classes: vec![RiskClass::Critical],
        };

        // Access level alone matches.
        assert!(triggers.matches(AccessLevel::Write, RiskClass::Low));
        // Risk class alone matches.
        assert!(triggers.matches(AccessLevel::ReadOnly, RiskClass::Critical));
        // Neither matches.
        assert!(!triggers.matches(AccessLevel::ReadOnly, RiskClass::Low));
    }

    #[test]
    fn empty_triggers_match_nothing() {
        let triggers = ApprovalTriggers::default();
        assert!(!triggers.matches(AccessLevel::Execute, RiskClass::Critical));
    }

    // ── PolicyOutcome serde round-trips ──────────────────────────────────────

    #[test]
    fn policy_outcome_approved_round_trips() {
        let original = PolicyOutcome::Approved;
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PolicyOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn policy_outcome_denied_round_trips() {
        let original = PolicyOutcome::Denied {
            reason: "tool not permitted".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PolicyOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn policy_outcome_requires_approval_round_trips() {
        let original = PolicyOutcome::RequiresApproval {
            reason: "risk class 'critical' is approval-gated".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PolicyOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── Run state wire spellings ─────────────────────────────────────────────

    #[test]
    fn task_state_wire_strings() {
        assert_eq!(
            serde_json::to_string(&TaskState::ApprovalRequired).unwrap(),
            "\"APPROVAL_REQUIRED\""
        );
        assert_eq!(serde_json::to_string(&TaskState::Complete).unwrap(), "\"COMPLETE\"");
        assert_eq!(serde_json::to_string(&TaskState::Violation).unwrap(), "\"VIOLATION\"");
    }

    #[test]
    fn violation_kind_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ViolationKind::ApprovalRequired).unwrap(),
            "\"approval_required\""
        );
        assert_eq!(serde_json::to_string(&ViolationKind::Denied).unwrap(), "\"denied\"");
    }

    // ── RunId ────────────────────────────────────────────────────────────────

    #[test]
    fn run_id_new_produces_unique_values() {
        let ids: Vec<RunId> = (0..100).map(|_| RunId::new()).collect();
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── AgentPolicy serde layout ─────────────────────────────────────────────

    #[test]
    fn agent_policy_round_trips_persisted_layout() {
        let json = serde_json::json!({
            "allowed_tools": ["MarketDataAPI_Read"],
            "max_steps_per_run": 5,
            "budget_limit": 100.0,
            "approval_required_for": {
                "access_levels": ["write"],
                "risk_classes": ["critical"]
            },
            "escalation_rule": "Notify Security Team and Terminate Agent"
        });

        let policy: AgentPolicy = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(policy.max_steps_per_run, 5);
        assert_eq!(policy.budget_limit, 100.0);
        assert_eq!(policy.approval_required_for.access_levels, vec![AccessLevel::Write]);

        let back = serde_json::to_value(&policy).unwrap();
        assert_eq!(back, json);
    }

    // ── WardenError display messages ─────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = WardenError::ConfigError {
            reason: "budget ceiling is negative".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("budget ceiling is negative"));
    }

    #[test]
    fn error_behavior_missing_display() {
        let err = WardenError::BehaviorMissing {
            tool_name: "Portfolio_Update".to_string(),
            mock_function_name: "mock_update_portfolio".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Portfolio_Update"));
        assert!(msg.contains("mock_update_portfolio"));
    }

    #[test]
    fn error_artifact_write_failed_display() {
        let err = WardenError::ArtifactWriteFailed {
            artifact: "execution_trace.json".to_string(),
            reason: "disk full".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("artifact write failed"));
        assert!(msg.contains("execution_trace.json"));
        assert!(msg.contains("disk full"));
    }
}
