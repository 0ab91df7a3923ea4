use super::selection::Selection;
use crate::workflow::Workflow;

/// Counts shown in the canvas status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub agents: usize,
    pub connections: usize,
    pub selected: usize,
}

impl StatusLine {
    pub fn of(workflow: &Workflow, selection: &Selection) -> Self {
        Self {
            agents: workflow.nodes.len(),
            connections: workflow.connections.len(),
            selected: selection.len(),
        }
    }

    /// Prompt to start wiring agents together.
    pub fn shows_connection_hint(&self) -> bool {
        self.agents > 1 && self.connections == 0
    }

    pub fn shows_empty_hint(&self) -> bool {
        self.agents == 0
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Agents • {} Connections • {} Selected",
            self.agents, self.connections, self.selected
        )
    }
}
