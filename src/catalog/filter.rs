use super::Agent;

/// Search and tab state of the agent panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentFilter {
    pub query: String,
    pub category: Option<String>,
    /// Lowercased domain, `None` for the "all" tab.
    pub domain: Option<String>,
}

impl AgentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Selects a domain tab by its label. `"all"` clears the domain filter.
    pub fn with_domain_tab(mut self, tab: &str) -> Self {
        let tab = tab.trim().to_lowercase();
        self.domain = if tab.is_empty() || tab == "all" {
            None
        } else {
            Some(tab)
        };
        self
    }

    pub fn matches(&self, agent: &Agent) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = agent.name.to_lowercase().contains(&query)
            || agent.description.to_lowercase().contains(&query);
        let matches_category = self
            .category
            .as_ref()
            .is_none_or(|c| &agent.category == c);
        let matches_domain = self.domain.as_ref().is_none_or(|d| agent.has_domain(d));

        matches_search && matches_category && matches_domain
    }
}
