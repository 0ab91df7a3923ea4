use crate::workflow::Workflow;

/// The set of selected node ids plus the primary node shown in the
/// properties panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
    primary: Option<String>,
}

impl Selection {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.ids.iter().any(|id| id == node_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when more than one node is selected.
    pub fn is_multi(&self) -> bool {
        self.ids.len() > 1
    }

    pub fn select_only(&mut self, node_id: &str) {
        self.ids = vec![node_id.to_string()];
        self.primary = Some(node_id.to_string());
    }

    /// Adds `node_id` if absent and makes it primary.
    pub fn add(&mut self, node_id: &str) {
        if !self.contains(node_id) {
            self.ids.push(node_id.to_string());
        }
        self.primary = Some(node_id.to_string());
    }

    /// Replaces the selection. The primary node is kept only when exactly one
    /// node is selected.
    pub fn set(&mut self, ids: Vec<String>) {
        self.primary = match ids.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };
        self.ids = ids;
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.primary = None;
    }

    /// Drops ids of nodes that no longer exist in `workflow`.
    pub fn retain_existing(&mut self, workflow: &Workflow) {
        self.ids.retain(|id| workflow.contains_node(id));
        if self
            .primary
            .as_deref()
            .is_some_and(|id| !workflow.contains_node(id))
        {
            self.primary = None;
        }
    }
}
