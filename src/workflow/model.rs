use crate::catalog::{Agent, AgentPatch};
use crate::geometry::Point;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A placed instance of an agent on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    /// Id of the catalog agent this node was created from.
    #[serde(rename = "type")]
    pub agent_type: String,
    /// Top-left corner of the card, in canvas space.
    pub position: Point,
    pub data: Agent,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl WorkflowNode {
    /// Copies `agent` into a new node at `position`.
    pub fn from_agent(id: String, agent: &Agent, position: Point) -> Self {
        Self {
            id,
            agent_type: agent.id.clone(),
            position,
            data: agent.clone(),
            inputs: agent.inputs.clone(),
            outputs: agent.outputs.clone(),
        }
    }

    pub fn output_index(&self, output: &str) -> Option<usize> {
        self.outputs.iter().position(|o| o == output)
    }

    pub fn input_index(&self, input: &str) -> Option<usize> {
        self.inputs.iter().position(|i| i == input)
    }
}

/// The source side of a connection: a node's named output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRef {
    pub node_id: String,
    pub output: String,
}

/// The target side of a connection: a node's named input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRef {
    pub node_id: String,
    pub input: String,
}

impl OutputRef {
    pub fn new(node_id: &str, output: &str) -> Self {
        Self {
            node_id: node_id.to_string(),
            output: output.to_string(),
        }
    }
}

impl InputRef {
    pub fn new(node_id: &str, input: &str) -> Self {
        Self {
            node_id: node_id.to_string(),
            input: input.to_string(),
        }
    }
}

/// A directed edge from one node's output to another node's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: OutputRef,
    pub to: InputRef,
}

impl Connection {
    pub fn touches(&self, node_id: &str) -> bool {
        self.from.node_id == node_id || self.to.node_id == node_id
    }

    /// Label shown on hover, e.g. `"Summary → Emails"`.
    pub fn label(&self) -> String {
        format!("{} → {}", self.from.output, self.to.input)
    }
}

/// A named graph of nodes and connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Workflow {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn node(&self, node_id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn node_mut(&mut self, node_id: &str) -> Option<&mut WorkflowNode> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    /// Both endpoint nodes of a connection, or `None` if either one is gone.
    pub fn endpoints(&self, connection: &Connection) -> Option<(&WorkflowNode, &WorkflowNode)> {
        Some((
            self.node(&connection.from.node_id)?,
            self.node(&connection.to.node_id)?,
        ))
    }

    /// Connections whose source or target is `node_id`.
    pub fn connections_of<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.connections.iter().filter(move |c| c.touches(node_id))
    }

    pub fn add_node(&mut self, node: WorkflowNode) {
        debug!(workflow_id = %self.id, node_id = %node.id, "node added");
        self.nodes.push(node);
    }

    /// Removes the given nodes and every connection touching any of them.
    ///
    /// Returns the number of nodes and connections removed.
    pub fn remove_nodes(&mut self, node_ids: &[String]) -> (usize, usize) {
        let doomed: AHashSet<&str> = node_ids.iter().map(String::as_str).collect();

        let nodes_before = self.nodes.len();
        self.nodes.retain(|n| !doomed.contains(n.id.as_str()));
        let connections_before = self.connections.len();
        self.connections.retain(|c| {
            !doomed.contains(c.from.node_id.as_str()) && !doomed.contains(c.to.node_id.as_str())
        });

        let removed = (
            nodes_before - self.nodes.len(),
            connections_before - self.connections.len(),
        );
        debug!(
            workflow_id = %self.id,
            nodes = removed.0,
            connections = removed.1,
            "nodes removed"
        );
        removed
    }

    pub fn remove_node(&mut self, node_id: &str) -> bool {
        self.remove_nodes(&[node_id.to_string()]).0 > 0
    }

    /// Appends a connection unless it would loop a node onto itself or an
    /// endpoint node does not exist. Already wired ports are accepted.
    pub fn connect(&mut self, id: String, from: OutputRef, to: InputRef) -> bool {
        if from.node_id == to.node_id {
            debug!(node_id = %from.node_id, "self-loop connection rejected");
            return false;
        }
        if !self.contains_node(&from.node_id) || !self.contains_node(&to.node_id) {
            debug!(from = %from.node_id, to = %to.node_id, "connection to missing node skipped");
            return false;
        }
        debug!(workflow_id = %self.id, connection_id = %id, "connection added");
        self.connections.push(Connection { id, from, to });
        true
    }

    pub fn remove_connection(&mut self, connection_id: &str) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != connection_id);
        before != self.connections.len()
    }

    pub fn move_node(&mut self, node_id: &str, position: Point) -> bool {
        match self.node_mut(node_id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => {
                debug!(node_id, "move of missing node skipped");
                false
            }
        }
    }

    /// Merges `patch` into the node's agent copy.
    pub fn update_node_data(&mut self, node_id: &str, patch: &AgentPatch) -> bool {
        match self.node_mut(node_id) {
            Some(node) => {
                patch.apply_to(&mut node.data);
                true
            }
            None => false,
        }
    }
}
