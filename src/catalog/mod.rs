//! The agent catalog: the palette users drag agents from.

pub mod agent;
pub mod builtin;
pub mod draft;
pub mod filter;

pub use agent::*;
pub use draft::*;
pub use filter::*;

use itertools::Itertools;
use tracing::debug;

/// Domain tabs shown above the catalog, in display order.
pub const DOMAINS: [&str; 6] = [
    "Marketing",
    "Corporate",
    "Legal",
    "Education",
    "Development",
    "Custom",
];

/// An ordered collection of agents available for placement.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    agents: Vec<Agent>,
}

impl Catalog {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// The catalog every workspace starts with.
    pub fn builtin() -> Self {
        Self::new(builtin::agents())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Appends a user-created agent.
    pub fn add(&mut self, agent: Agent) {
        debug!(agent_id = %agent.id, name = %agent.name, "agent added to catalog");
        self.agents.push(agent);
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        self.agents
            .iter()
            .map(|a| a.category.as_str())
            .unique()
            .collect()
    }

    pub fn filter<'a>(&'a self, filter: &'a AgentFilter) -> impl Iterator<Item = &'a Agent> + 'a {
        self.agents.iter().filter(move |a| filter.matches(a))
    }
}
