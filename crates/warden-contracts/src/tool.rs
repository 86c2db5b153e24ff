//! Tool registry types.
//!
//! The registry is the static catalog of capabilities an agent can even know
//! about. Every tool carries an access level and a risk class — together they
//! drive the policy engine's approval gate. Registry contents are read-only
//! for the lifetime of a run.

use serde::{Deserialize, Serialize};

/// How intrusively a tool touches the systems it fronts.
///
/// Serialized as the lowercase strings used in the persisted registry
/// (`"read-only"`, `"write"`, `"execute"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    #[serde(rename = "read-only")]
    ReadOnly,
    #[serde(rename = "write")]
    Write,
    #[serde(rename = "execute")]
    Execute,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccessLevel::ReadOnly => "read-only",
            AccessLevel::Write => "write",
            AccessLevel::Execute => "execute",
        };
        f.write_str(s)
    }
}

/// The declared blast radius of a tool misfiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskClass {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskClass::Low => "low",
            RiskClass::Medium => "medium",
            RiskClass::High => "high",
            RiskClass::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// One entry in the tool registry.
///
/// `tool_name` is the unique key; `mock_function_name` names the deterministic
/// stand-in behavior the caller binds into warden-core's `BehaviorTable` at
/// run start. No real side-effecting call is ever made on a tool's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique key across the registry.
    pub tool_name: String,
    /// Human-readable purpose of the tool.
    pub description: String,
    /// Access level used by the approval gate.
    pub access_level: AccessLevel,
    /// Risk class used by the approval gate.
    pub risk_class: RiskClass,
    /// Name of the mock behavior bound to this tool.
    pub mock_function_name: String,
}

/// The static catalog of callable capabilities.
///
/// Serializes as a plain JSON array of [`ToolSpec`] objects, matching the
/// persisted `tool_registry.json` layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Build a registry from a list of tool specs.
    pub fn new(tools: Vec<ToolSpec>) -> Self {
        Self { tools }
    }

    /// Look up a tool by its unique name.
    pub fn get(&self, tool_name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.tool_name == tool_name)
    }

    /// Return true if the registry contains a tool with the given name.
    pub fn contains(&self, tool_name: &str) -> bool {
        self.get(tool_name).is_some()
    }

    /// Iterate over all registered tools in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
