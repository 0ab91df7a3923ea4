//! Simulated run state. Nothing executes; the running list only drives
//! visual state such as progress bars and animated connections.

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    running: Vec<String>,
    workflow_running: bool,
}

impl RunState {
    pub fn running(&self) -> &[String] {
        &self.running
    }

    pub fn is_running(&self, node_id: &str) -> bool {
        self.running.iter().any(|id| id == node_id)
    }

    pub fn is_workflow_running(&self) -> bool {
        self.workflow_running
    }

    pub fn toggle_node(&mut self, node_id: &str) {
        if self.is_running(node_id) {
            self.running.retain(|id| id != node_id);
        } else {
            self.running.push(node_id.to_string());
        }
    }

    /// Stops every node in `node_ids` if all of them are running, otherwise
    /// starts the ones that are not.
    pub fn toggle_all(&mut self, node_ids: &[String]) {
        if node_ids.is_empty() {
            return;
        }
        if node_ids.iter().all(|id| self.is_running(id)) {
            self.running.retain(|id| !node_ids.contains(id));
            debug!(count = node_ids.len(), "nodes stopped");
        } else {
            for id in node_ids {
                if !self.is_running(id) {
                    self.running.push(id.clone());
                }
            }
            debug!(count = node_ids.len(), "nodes started");
        }
    }

    /// Marks the whole workflow as running with every given node running.
    pub fn start_workflow(&mut self, node_ids: Vec<String>) {
        self.running = node_ids;
        self.workflow_running = true;
    }

    pub fn stop_workflow(&mut self) {
        self.running.clear();
        self.workflow_running = false;
    }

    /// Drops ids of nodes that were removed from the workflow.
    pub fn forget(&mut self, node_ids: &[String]) {
        self.running.retain(|id| !node_ids.contains(id));
    }
}
