//! P&ID pipe router CLI
//!
//! Usage:
//!   pid-router [OPTIONS] [FILE]
//!
//! Reads a diagram description as JSON from FILE (or stdin) and writes the
//! routed pipes as JSON to stdout. Diagram format:
//!
//! ```json
//! {
//!   "components": [
//!     {"id": "P-101", "x": 0, "y": 0, "width": 60, "height": 40,
//!      "ports": {"discharge": {"dx": 60, "dy": 20}}}
//!   ],
//!   "connections": [
//!     {"from": "P-101", "from_port": "discharge", "to": "V-201"}
//!   ]
//! }
//! ```

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pid_router::{route_with_config, Diagram, RouterConfig};

#[derive(Parser)]
#[command(name = "pid-router")]
#[command(about = "Orthogonal pipe router for P&ID diagrams")]
struct Cli {
    /// Input diagram file, JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Router configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the grid cell size
    #[arg(long)]
    cell_size: Option<f64>,

    /// Override the obstacle padding
    #[arg(long)]
    padding: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // No input file and stdin is a terminal: show a hint instead of blocking
    // on a read that will never finish
    if cli.input.is_none() && io::stdin().is_terminal() {
        eprintln!("pid-router: reads a JSON diagram from a file or stdin.");
        eprintln!("Try: pid-router diagram.json");
        return ExitCode::FAILURE;
    }

    let mut config = match &cli.config {
        Some(path) => match RouterConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => RouterConfig::default(),
    };
    if let Some(cell_size) = cli.cell_size {
        config = config.with_cell_size(cell_size);
    }
    if let Some(padding) = cli.padding {
        config = config.with_padding(padding);
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    let diagram: Diagram = match serde_json::from_str(&source) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing diagram JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pipes = match route_with_config(&diagram, config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&pipes)
    } else {
        serde_json::to_string(&pipes)
    };
    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
