//! Ready-made workflows offered in the template gallery.

use super::{InputRef, OutputRef, Workflow, WorkflowNode};
use crate::catalog::Catalog;
use crate::geometry::Point;
use crate::ids::IdGenerator;
use serde::{Deserialize, Serialize};

/// A workflow plus the gallery metadata describing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplate {
    #[serde(flatten)]
    pub workflow: Workflow,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub domain: String,
}

impl WorkflowTemplate {
    pub fn id(&self) -> &str {
        &self.workflow.id
    }

    /// Copies the template into a fresh workflow with id `<template-id>-<millis>`.
    /// Node and connection ids are kept.
    pub fn instantiate(&self, ids: &mut IdGenerator) -> Workflow {
        Workflow {
            id: ids.next(&self.workflow.id),
            ..self.workflow.clone()
        }
    }
}

/// Looks up the template selected by a `template=<name>` query parameter,
/// which names templates by the `<name>-workflow` id convention.
pub fn find_by_param<'a>(templates: &'a [WorkflowTemplate], param: &str) -> Option<&'a WorkflowTemplate> {
    let id = format!("{}-workflow", param);
    templates.iter().find(|t| t.id() == id)
}

const TEMPLATE_ORIGIN: Point = Point::new(100.0, 200.0);
const TEMPLATE_SPACING: f64 = 300.0;

/// Lays `agent_ids` out left to right and wires each agent into the next one,
/// preferring an output whose name matches one of the next agent's inputs.
fn chain(
    catalog: &Catalog,
    id: &str,
    name: &str,
    description: &str,
    domain: &str,
    agent_ids: &[&str],
    use_cases: &[&str],
) -> WorkflowTemplate {
    let mut workflow = Workflow::new(id, name, description);

    let agents: Vec<_> = agent_ids.iter().filter_map(|a| catalog.get(a)).collect();
    for (i, agent) in agents.iter().enumerate() {
        let position = Point::new(
            TEMPLATE_ORIGIN.x + TEMPLATE_SPACING * i as f64,
            TEMPLATE_ORIGIN.y,
        );
        workflow.add_node(WorkflowNode::from_agent(
            format!("node-{}", i + 1),
            agent,
            position,
        ));
    }

    for i in 1..workflow.nodes.len() {
        let (prev, next) = (&workflow.nodes[i - 1], &workflow.nodes[i]);
        let wiring = prev
            .outputs
            .iter()
            .find(|o| next.inputs.contains(o))
            .map(|o| (o.clone(), o.clone()))
            .or_else(|| Some((prev.outputs.first()?.clone(), next.inputs.first()?.clone())));

        if let Some((output, input)) = wiring {
            let from = OutputRef::new(&prev.id, &output);
            let to = InputRef::new(&next.id, &input);
            workflow.connect(format!("connection-{}", i), from, to);
        }
    }

    WorkflowTemplate {
        steps: agents.iter().map(|a| a.name.clone()).collect(),
        use_cases: use_cases.iter().map(|s| s.to_string()).collect(),
        domain: domain.to_string(),
        workflow,
    }
}

/// The templates shown in the gallery.
pub fn builtin_templates() -> Vec<WorkflowTemplate> {
    let catalog = Catalog::builtin();
    vec![
        chain(
            &catalog,
            "marketing-workflow",
            "Marketing Agency",
            "Research competitors, optimize content and publish campaigns",
            "marketing",
            &[
                "seo-optimizer",
                "competitor-watchdog",
                "product-recommendation",
                "post-creator",
                "smart-email-manager",
            ],
            &["Content marketing pipelines", "Competitive campaign planning"],
        ),
        chain(
            &catalog,
            "corporate-workflow",
            "Corporate Productivity",
            "Summarize meetings and keep stakeholders informed",
            "corporate",
            &[
                "meeting-summarizer",
                "smart-email-manager",
                "competitor-watchdog",
                "customer-feedback-analyzer",
            ],
            &["Meeting follow-ups", "Weekly executive briefings"],
        ),
        chain(
            &catalog,
            "legal-workflow",
            "Legal & Compliance",
            "Review contracts and check them against regulations",
            "legal",
            &[
                "contract-summarizer",
                "research-assistant",
                "compliance-watchdog",
                "smart-email-manager",
            ],
            &["Contract review", "Regulatory audits"],
        ),
        chain(
            &catalog,
            "education-workflow",
            "Education",
            "Plan lessons and generate assessments",
            "education",
            &["research-assistant", "lesson-planner", "quiz-generator"],
            &["Course preparation", "Assessment generation"],
        ),
        chain(
            &catalog,
            "development-workflow",
            "Software Development",
            "Review changes and keep documentation current",
            "development",
            &["code-reviewer", "doc-writer"],
            &["Pull request review", "Reference docs upkeep"],
        ),
    ]
}
