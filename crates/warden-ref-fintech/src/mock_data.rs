//! Simulated fintech data for the WARDEN reference runtime.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. The mock behaviors stand in for real trading-platform APIs
//! in a production deployment; each is deterministic so repeated runs produce
//! byte-identical traces.

use serde_json::{json, Value};

use warden_contracts::{
    policy::{AgentPolicy, ApprovalTriggers},
    tool::{AccessLevel, RiskClass, ToolRegistry, ToolSpec},
};
use warden_core::traits::BehaviorTable;

// ── Mock tool behaviors ──────────────────────────────────────────────────────

/// Return a fixed slice of market data for the queried topic.
pub fn mock_read_market_data(params: &Value) -> Value {
    let query = params["query"].as_str().unwrap_or("unspecified");
    json!({
        "query": query,
        "data_points": [
            { "symbol": "QNTA", "price": 142.55, "trend": "up" },
            { "symbol": "ALGX", "price": 78.10, "trend": "flat" },
            { "symbol": "FINV", "price": 23.84, "trend": "down" },
        ],
        "source": "mock-market-feed",
    })
}

/// Render a canned analyst report over the requested topic.
pub fn mock_generate_report(params: &Value) -> Value {
    let topic = params["topic"].as_str().unwrap_or("general market");
    json!({
        "report_title": format!("Analyst Report: {topic}"),
        "sections": ["overview", "key movers", "risk factors"],
        "format": "markdown",
    })
}

/// Simulate a portfolio mutation. Never reached unless the policy approves a
/// critical write.
pub fn mock_update_portfolio(params: &Value) -> Value {
    json!({
        "status": "portfolio updated",
        "symbol": params["symbol"].clone(),
        "quantity": params["quantity"].clone(),
    })
}

/// Simulate a system configuration change. The reference policy never permits
/// this tool, so the behavior exists only to satisfy registry binding.
pub fn mock_change_system_config(params: &Value) -> Value {
    json!({
        "status": "configuration changed",
        "setting": params["setting"].clone(),
    })
}

// ── Registry / policy / behavior fixtures ────────────────────────────────────

/// The QuantAlgo tool registry: every tool the agent is allowed to know
/// about, with its access level and risk class.
pub fn sample_registry() -> ToolRegistry {
    ToolRegistry::new(vec![
        ToolSpec {
            tool_name: "MarketDataAPI_Read".to_string(),
            description: "Read market data".to_string(),
            access_level: AccessLevel::ReadOnly,
            risk_class: RiskClass::Low,
            mock_function_name: "mock_read_market_data".to_string(),
        },
        ToolSpec {
            tool_name: "ReportGenerator".to_string(),
            description: "Generate an analyst report".to_string(),
            access_level: AccessLevel::ReadOnly,
            risk_class: RiskClass::Low,
            mock_function_name: "mock_generate_report".to_string(),
        },
        ToolSpec {
            tool_name: "Portfolio_Update".to_string(),
            description: "Update portfolio".to_string(),
            access_level: AccessLevel::Write,
            risk_class: RiskClass::Critical,
            mock_function_name: "mock_update_portfolio".to_string(),
        },
        ToolSpec {
            tool_name: "System_Config_Change".to_string(),
            description: "Change system configuration".to_string(),
            access_level: AccessLevel::Execute,
            risk_class: RiskClass::High,
            mock_function_name: "mock_change_system_config".to_string(),
        },
    ])
}

/// The runtime policy for the Market Data Analyst Agent.
///
/// `System_Config_Change` is deliberately absent from the allowed list;
/// `Portfolio_Update` is allowed but approval-gated through both its access
/// level and risk class.
pub fn sample_policy() -> AgentPolicy {
    AgentPolicy {
        allowed_tools: vec![
            "MarketDataAPI_Read".to_string(),
            "ReportGenerator".to_string(),
            "Portfolio_Update".to_string(),
        ],
        max_steps_per_run: 5,
        budget_limit: 100.0,
        approval_required_for: ApprovalTriggers {
            access_levels: vec![AccessLevel::Write],
            risk_classes: vec![RiskClass::Critical],
        },
        escalation_rule: "Notify Security Team and Terminate Agent".to_string(),
    }
}

/// Bind every registry tool to its mock behavior.
pub fn sample_behaviors() -> BehaviorTable {
    let mut behaviors = BehaviorTable::new();
    behaviors.bind("MarketDataAPI_Read", Box::new(mock_read_market_data));
    behaviors.bind("ReportGenerator", Box::new(mock_generate_report));
    behaviors.bind("Portfolio_Update", Box::new(mock_update_portfolio));
    behaviors.bind("System_Config_Change", Box::new(mock_change_system_config));
    behaviors
}

// ── Tests ────────────────────────────────────────────────────────────────────
