use serde::{Deserialize, Serialize};

/// A catalog entry describing an agent that can be placed on the canvas.
///
/// Agents are templates: placing one copies it by value into a `WorkflowNode`,
/// so later catalog edits never reach nodes that already exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    /// Human-readable summary of `inputs`, e.g. `"Text, URL"`.
    #[serde(default)]
    pub input: String,
    /// Human-readable summary of `outputs`.
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}

impl Agent {
    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }
}

/// A partial update applied to a node's agent copy from the properties panel.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl AgentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.color.is_none() && self.tags.is_none()
    }

    /// Merges the set fields into `agent`.
    pub fn apply_to(&self, agent: &mut Agent) {
        if let Some(name) = &self.name {
            agent.name = name.clone();
        }
        if let Some(description) = &self.description {
            agent.description = description.clone();
        }
        if let Some(color) = &self.color {
            agent.color = color.clone();
        }
        if let Some(tags) = &self.tags {
            agent.tags = tags.clone();
        }
    }
}
