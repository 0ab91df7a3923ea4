use agentflow::catalog::Catalog;
use agentflow::geometry::Point;
use agentflow::ids::IdGenerator;
use agentflow::workflow::{self, InputRef, OutputRef, Workflow, WorkflowNode};
use clap::Parser;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};

/// A CLI tool to generate random workflows for manual and stress testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated workflow file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// The number of nodes to place
    #[arg(short, long, default_value_t = 20)]
    nodes: usize,

    /// The number of connections to attempt
    #[arg(short, long, default_value_t = 30)]
    connections: usize,

    /// Width and height of the square area nodes are scattered over
    #[arg(long, default_value_t = 3000.0)]
    spread: f64,

    /// Grid size positions are snapped to; 0 disables snapping
    #[arg(long, default_value_t = 20.0)]
    grid: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.spread <= 0.0 {
        eprintln!("Error: --spread ({}) must be positive", cli.spread);
        std::process::exit(1);
    }

    println!(
        "Generating a workflow with {} nodes and up to {} connections...",
        cli.nodes, cli.connections
    );

    let mut ids = IdGenerator::default();
    let mut workflow = Workflow::new(
        &ids.next("workflow"),
        "Generated Workflow",
        "Randomly generated for testing",
    );
    place_nodes(&mut rng, &mut ids, &mut workflow, &cli);
    let wired = wire_nodes(&mut rng, &mut ids, &mut workflow, cli.connections);

    let json_output = workflow::export_json(&workflow)?;
    std::fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} nodes and {} connections and saved them to '{}'",
        workflow.nodes.len(),
        wired,
        cli.output
    );

    Ok(())
}

/// Scatters random catalog agents over the spread area.
fn place_nodes(rng: &mut ThreadRng, ids: &mut IdGenerator, workflow: &mut Workflow, cli: &Cli) {
    let catalog = Catalog::builtin();
    let node_ids = ids.next_batch("node", cli.nodes);
    for id in node_ids {
        let Some(agent) = catalog.agents().choose(rng) else {
            return;
        };
        let position = Point::new(
            rng.random_range(0.0..cli.spread),
            rng.random_range(0.0..cli.spread),
        )
        .snapped(cli.grid);
        workflow.add_node(WorkflowNode::from_agent(id, agent, position));
    }
    println!("-> Placed {} nodes.", workflow.nodes.len());
}

/// Connects random output ports to random input ports of other nodes.
/// Returns the number of connections created.
fn wire_nodes(rng: &mut ThreadRng, ids: &mut IdGenerator, workflow: &mut Workflow, attempts: usize) -> usize {
    if workflow.nodes.len() < 2 {
        return 0;
    }
    let mut wired = 0;
    for _ in 0..attempts {
        let from = &workflow.nodes[rng.random_range(0..workflow.nodes.len())];
        let to = &workflow.nodes[rng.random_range(0..workflow.nodes.len())];
        let (Some(output), Some(input)) = (from.outputs.choose(rng), to.inputs.choose(rng)) else {
            continue;
        };
        let from = OutputRef::new(&from.id, output);
        let to = InputRef::new(&to.id, input);
        if workflow.connect(ids.next("connection"), from, to) {
            wired += 1;
        }
    }
    println!("-> Wired {} of {} attempted connections.", wired, attempts);
    wired
}
