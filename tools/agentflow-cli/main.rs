use agentflow::canvas::{MiniMap, StatusLine, Viewport, route_connections};
use agentflow::catalog::{AgentFilter, Catalog};
use agentflow::config::EditorConfig;
use agentflow::ids::IdGenerator;
use agentflow::run::RunState;
use agentflow::workflow::{self, builtin_templates, find_by_param};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Inspect, create and list agentflow workflow files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a workflow file: nodes, connections and curve routing
    Inspect {
        /// Path to the workflow JSON file
        path: PathBuf,
        /// Optional editor config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the download file name for a workflow name
    ExportName { name: String },
    /// Instantiate a built-in template into a workflow file
    Template {
        /// Template name as used in the `template` URL parameter, e.g. "marketing"
        name: String,
        /// Directory to write the workflow file into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// List the built-in templates
    Templates,
    /// List catalog agents, optionally filtered
    Agents {
        /// Case-insensitive search over name and description
        #[arg(short, long, default_value = "")]
        query: String,
        /// Exact category, e.g. "Analysis"
        #[arg(short, long)]
        category: Option<String>,
        /// Domain tab, e.g. "marketing" or "all"
        #[arg(short, long, default_value = "all")]
        domain: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "agentflow=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Inspect { path, config } => inspect(path, config),
        Command::ExportName { name } => {
            println!("{}", workflow::export_file_name(&name));
            Ok(())
        }
        Command::Template { name, out_dir } => template(&name, out_dir),
        Command::Templates => {
            list_templates();
            Ok(())
        }
        Command::Agents {
            query,
            category,
            domain,
        } => {
            list_agents(&query, category.as_deref(), &domain);
            Ok(())
        }
    };

    if let Err(e) = result {
        exit_with_error(&e.to_string());
    }
}

fn inspect(path: PathBuf, config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let load_start = Instant::now();
    let config = match config {
        Some(path) => EditorConfig::from_file(path)?,
        None => EditorConfig::default(),
    };
    let workflow = workflow::import_from_path(&path)?;
    let load_duration = load_start.elapsed();

    println!("Workflow: {} ({})", workflow.name, workflow.id);
    if !workflow.description.is_empty() {
        println!("  {}", workflow.description);
    }

    println!("\n--- Nodes ---");
    for node in &workflow.nodes {
        println!(
            "{:<28} {:<28} at {}  in: [{}]  out: [{}]",
            node.id,
            node.data.name,
            node.position,
            node.inputs.join(", "),
            node.outputs.join(", ")
        );
    }

    println!("\n--- Connections ---");
    let routes = route_connections(&workflow, config.node_size, &RunState::default());
    for routed in &routes {
        println!(
            "{:<28} {}  {}",
            routed.connection.id,
            routed.label,
            routed.route.svg_path()
        );
    }
    let dangling = workflow.connections.len() - routes.len();
    if dangling > 0 {
        println!("({} connection(s) reference missing nodes and are not drawn)", dangling);
    }

    let minimap = MiniMap::default();
    let scene = minimap.project(&workflow, &Viewport::default(), minimap.size);
    println!("\n--- Summary ---");
    println!("{}", StatusLine::of(&workflow, &Default::default()));
    println!("Mini-map markers: {}", scene.nodes.len());
    println!("Export file name: {}", workflow::export_file_name(&workflow.name));
    println!("Loaded in {:?}", load_duration);
    Ok(())
}

fn template(name: &str, out_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let templates = builtin_templates();
    let Some(template) = find_by_param(&templates, name) else {
        let known: Vec<&str> = templates
            .iter()
            .map(|t| t.id().trim_end_matches("-workflow"))
            .collect();
        return Err(format!("Unknown template '{}'. Known: {}", name, known.join(", ")).into());
    };
    let workflow = template.instantiate(&mut IdGenerator::default());
    let path = workflow::export_to_dir(&workflow, &out_dir)?;
    println!(
        "Created '{}' with {} agents at {}",
        workflow.name,
        workflow.nodes.len(),
        path.display()
    );
    Ok(())
}

fn list_templates() {
    for template in builtin_templates() {
        println!(
            "{:<22} {:<26} {}",
            template.id().trim_end_matches("-workflow"),
            template.workflow.name,
            template.steps.join(" -> ")
        );
    }
}

fn list_agents(query: &str, category: Option<&str>, domain: &str) {
    let catalog = Catalog::builtin();
    let mut filter = AgentFilter::new().with_query(query).with_domain_tab(domain);
    if let Some(category) = category {
        filter = filter.with_category(category);
    }
    let mut count = 0;
    for agent in catalog.filter(&filter) {
        count += 1;
        println!(
            "{:<28} {:<32} {:<14} ★{:.1}  {}",
            agent.id,
            agent.name,
            agent.category,
            agent.rating,
            agent.domains.join(", ")
        );
    }
    println!("\n{} of {} agents", count, catalog.len());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
