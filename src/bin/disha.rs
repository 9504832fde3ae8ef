//! Solve maze scenario files from the command line.
//!
//! Usage:
//!   disha mazes/reference.yaml
//!   disha mazes/reference.yaml --only 2 --config configs/config.yaml

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

use disha_path::{DirectionalPlanner, DishaConfig, MazeFile, MazeScenario, Position, SearchConfig};

/// Direction-constrained maze solver (straight or right turns only)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze scenario file (YAML)
    mazes: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only solve the maze with this name
    #[arg(long)]
    only: Option<String>,

    /// Print search statistics for each maze
    #[arg(short, long)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns false if any maze could not be solved because of bad input
fn run(args: &Args) -> disha_path::Result<bool> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DishaConfig::load(path)?
        }
        None => DishaConfig::load_default()?,
    };
    let search_config = config.to_search_config();

    let file = MazeFile::load(&args.mazes)?;
    info!(
        "Loaded {} maze(s) from {}",
        file.mazes.len(),
        args.mazes.display()
    );

    let selected: Vec<&MazeScenario> = match &args.only {
        Some(name) => file.mazes.iter().filter(|m| &m.name == name).collect(),
        None => file.mazes.iter().collect(),
    };
    if selected.is_empty() {
        warn!("No mazes selected");
    }

    let mut all_ok = true;
    for scenario in selected {
        if let Err(e) = solve_scenario(scenario, &search_config, args.stats) {
            eprintln!("Maze {}: {}", scenario.name, e);
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn solve_scenario(
    scenario: &MazeScenario,
    search_config: &SearchConfig,
    stats: bool,
) -> disha_path::Result<()> {
    let problem = scenario.to_problem()?;
    let planner = DirectionalPlanner::new(&problem.grid, search_config.clone());
    let result = planner.find_path(problem.start, problem.end)?;

    println!("The path for maze {}:", scenario.name);
    if result.success {
        println!("{}\n", format_path(&result.path));
    } else {
        println!("no path\n");
    }

    if stats {
        println!(
            "  cells={} steps={} nodes_expanded={} failure={:?}\n",
            result.length_cells(),
            result.steps,
            result.nodes_expanded,
            result.failure_reason
        );
    }
    Ok(())
}

fn format_path(path: &[Position]) -> String {
    let cells: Vec<String> = path.iter().map(Position::to_string).collect();
    format!("[{}]", cells.join(", "))
}
