//! Agents shipped with every workspace.

use super::Agent;

struct Entry<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    category: &'a str,
    color: &'a str,
    tags: &'a [&'a str],
    rating: f64,
    usage_count: u64,
    inputs: &'a [&'a str],
    outputs: &'a [&'a str],
    domains: &'a [&'a str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Entry<'_> {
    fn into_agent(self) -> Agent {
        Agent {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            color: self.color.to_string(),
            tags: owned(self.tags),
            rating: self.rating,
            usage_count: self.usage_count,
            inputs: owned(self.inputs),
            outputs: owned(self.outputs),
            input: self.inputs.join(", "),
            output: self.outputs.join(", "),
            domains: owned(self.domains),
            capabilities: None,
        }
    }
}

pub fn agents() -> Vec<Agent> {
    [
        Entry {
            id: "seo-optimizer",
            name: "SEO Optimizer",
            description: "Analyzes content and suggests keyword and structure improvements",
            category: "Analysis",
            color: "#3b82f6",
            tags: &["seo", "content"],
            rating: 4.7,
            usage_count: 12_450,
            inputs: &["Content", "Keywords"],
            outputs: &["Optimized Content", "SEO Report"],
            domains: &["marketing"],
        },
        Entry {
            id: "competitor-watchdog",
            name: "Competitor Watchdog",
            description: "Monitors competitor websites and announcements for changes",
            category: "Monitoring",
            color: "#ef4444",
            tags: &["research", "monitoring"],
            rating: 4.5,
            usage_count: 8_320,
            inputs: &["Competitor URLs"],
            outputs: &["Change Report", "Alerts"],
            domains: &["marketing", "corporate"],
        },
        Entry {
            id: "product-recommendation",
            name: "Product Recommendation AI",
            description: "Suggests products based on customer profiles and behavior",
            category: "Generation",
            color: "#f59e0b",
            tags: &["ecommerce", "personalization"],
            rating: 4.4,
            usage_count: 6_780,
            inputs: &["Customer Profile", "Catalog"],
            outputs: &["Recommendations"],
            domains: &["marketing"],
        },
        Entry {
            id: "post-creator",
            name: "Post Creator",
            description: "Drafts social media posts from briefs and reports",
            category: "Generation",
            color: "#ec4899",
            tags: &["social", "copywriting"],
            rating: 4.6,
            usage_count: 15_210,
            inputs: &["Brief", "Report"],
            outputs: &["Posts"],
            domains: &["marketing"],
        },
        Entry {
            id: "smart-email-manager",
            name: "Smart Email Manager",
            description: "Sorts, prioritizes and drafts replies to incoming email",
            category: "Communication",
            color: "#10b981",
            tags: &["email", "productivity"],
            rating: 4.8,
            usage_count: 21_930,
            inputs: &["Emails", "Summary"],
            outputs: &["Draft Replies", "Priority List"],
            domains: &["marketing", "corporate", "legal"],
        },
        Entry {
            id: "meeting-summarizer",
            name: "Meeting Summarizer",
            description: "Turns meeting transcripts into summaries and action items",
            category: "Processing",
            color: "#8b5cf6",
            tags: &["meetings", "notes"],
            rating: 4.9,
            usage_count: 25_400,
            inputs: &["Transcript"],
            outputs: &["Summary", "Action Items"],
            domains: &["corporate"],
        },
        Entry {
            id: "customer-feedback-analyzer",
            name: "Customer Feedback Analyzer",
            description: "Clusters customer feedback and scores sentiment",
            category: "Analysis",
            color: "#06b6d4",
            tags: &["feedback", "sentiment"],
            rating: 4.5,
            usage_count: 9_870,
            inputs: &["Feedback"],
            outputs: &["Insights", "Sentiment Scores"],
            domains: &["corporate", "marketing"],
        },
        Entry {
            id: "contract-summarizer",
            name: "Contract Summarizer",
            description: "Extracts key clauses, obligations and dates from contracts",
            category: "Processing",
            color: "#6366f1",
            tags: &["contracts", "legal"],
            rating: 4.7,
            usage_count: 7_650,
            inputs: &["Contract"],
            outputs: &["Summary", "Key Clauses"],
            domains: &["legal"],
        },
        Entry {
            id: "research-assistant",
            name: "AI Research Assistant",
            description: "Searches sources and compiles cited research notes",
            category: "Research",
            color: "#14b8a6",
            tags: &["research", "citations"],
            rating: 4.6,
            usage_count: 11_300,
            inputs: &["Question", "Key Clauses"],
            outputs: &["Research Notes"],
            domains: &["legal", "education"],
        },
        Entry {
            id: "compliance-watchdog",
            name: "Regulatory Compliance Watchdog",
            description: "Checks documents against current regulations",
            category: "Monitoring",
            color: "#f97316",
            tags: &["compliance", "regulation"],
            rating: 4.5,
            usage_count: 4_980,
            inputs: &["Documents", "Research Notes"],
            outputs: &["Compliance Report"],
            domains: &["legal", "corporate"],
        },
        Entry {
            id: "lesson-planner",
            name: "Lesson Planner",
            description: "Builds lesson plans from curriculum goals",
            category: "Generation",
            color: "#84cc16",
            tags: &["teaching", "curriculum"],
            rating: 4.4,
            usage_count: 3_210,
            inputs: &["Curriculum Goals"],
            outputs: &["Lesson Plan"],
            domains: &["education"],
        },
        Entry {
            id: "quiz-generator",
            name: "Quiz Generator",
            description: "Writes quizzes and answer keys from lesson material",
            category: "Generation",
            color: "#eab308",
            tags: &["teaching", "assessment"],
            rating: 4.3,
            usage_count: 2_870,
            inputs: &["Lesson Plan"],
            outputs: &["Quiz", "Answer Key"],
            domains: &["education"],
        },
        Entry {
            id: "code-reviewer",
            name: "Code Reviewer",
            description: "Reviews diffs for bugs, style issues and missing tests",
            category: "Analysis",
            color: "#64748b",
            tags: &["code", "review"],
            rating: 4.7,
            usage_count: 13_640,
            inputs: &["Diff"],
            outputs: &["Review Comments"],
            domains: &["development"],
        },
        Entry {
            id: "doc-writer",
            name: "Documentation Writer",
            description: "Generates reference documentation from source code",
            category: "Generation",
            color: "#0ea5e9",
            tags: &["docs", "code"],
            rating: 4.5,
            usage_count: 5_420,
            inputs: &["Source Code", "Review Comments"],
            outputs: &["Documentation"],
            domains: &["development"],
        },
    ]
    .into_iter()
    .map(Entry::into_agent)
    .collect()
}
