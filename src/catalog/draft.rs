use super::Agent;
use crate::error::ValidationError;
use crate::ids::IdGenerator;

/// The state of the "create agent" form.
///
/// List fields behave like tag inputs: entries are trimmed, and blank or
/// duplicate entries are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub domain: String,
    pub color: String,
    tags: Vec<String>,
    inputs: Vec<String>,
    outputs: Vec<String>,
    capabilities: Vec<String>,
}

impl Default for AgentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: "Processing".to_string(),
            domain: "custom".to_string(),
            color: "#8b5cf6".to_string(),
            tags: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            capabilities: Vec::new(),
        }
    }
}

/// Pushes `value` trimmed unless it is blank or already present.
fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

fn remove_entry(list: &mut Vec<String>, value: &str) {
    list.retain(|v| v != value);
}

impl AgentDraft {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_unique(&mut self.tags, tag)
    }

    pub fn remove_tag(&mut self, tag: &str) {
        remove_entry(&mut self.tags, tag);
    }

    pub fn add_input(&mut self, input: &str) -> bool {
        push_unique(&mut self.inputs, input)
    }

    pub fn remove_input(&mut self, input: &str) {
        remove_entry(&mut self.inputs, input);
    }

    pub fn add_output(&mut self, output: &str) -> bool {
        push_unique(&mut self.outputs, output)
    }

    pub fn remove_output(&mut self, output: &str) {
        remove_entry(&mut self.outputs, output);
    }

    pub fn add_capability(&mut self, capability: &str) -> bool {
        push_unique(&mut self.capabilities, capability)
    }

    pub fn remove_capability(&mut self, capability: &str) {
        remove_entry(&mut self.capabilities, capability);
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Lists the required fields that are still missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.inputs.is_empty() {
            missing.push("inputs");
        }
        if self.outputs.is_empty() {
            missing.push("outputs");
        }
        missing
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Builds the catalog agent, with id `custom-<millis>`.
    pub fn build(&self, ids: &mut IdGenerator) -> Result<Agent, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Agent {
            id: ids.next("custom"),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            color: self.color.clone(),
            tags: self.tags.clone(),
            rating: 5.0,
            usage_count: 0,
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            input: self.inputs.join(", "),
            output: self.outputs.join(", "),
            domains: vec![self.domain.clone()],
            capabilities: Some(self.capabilities.clone()),
        })
    }
}
