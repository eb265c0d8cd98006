//! `ttn` - tree tensor-network quantum circuit simulator CLI.
//!
//! Builds a named topology, runs a gate script against it, and prints
//! measurement probabilities or a Graphviz DOT export of the topology.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_complex::Complex64;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ttn_cli::script::{parse_script, run_script};
use ttn_sim::QCircuit;
use ttn_topology::{make_all_to_all, make_chain, make_ibmq_topology, to_dot, DotOptions, Topology};

/// `ttn` - tree tensor-network quantum circuit simulator.
#[derive(Parser)]
#[command(name = "ttn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a topology, run a gate script, and print measured probabilities
    Run {
        /// Topology kind (chain, ring, all-to-all, ibmq)
        #[arg(short, long, default_value = "chain")]
        topology: String,

        /// Number of qubits (ignored for `ibmq`, which is fixed at 53)
        #[arg(short = 'q', long, default_value = "4")]
        qubits: usize,

        /// Path to a gate script; if omitted, a small built-in GHZ script runs
        #[arg(value_name = "FILE")]
        script: Option<PathBuf>,

        /// Relative SVD cutoff
        #[arg(long, default_value = "0.0")]
        cutoff: f64,

        /// Maximum bond dimension (0 = unbounded)
        #[arg(long, default_value = "0")]
        max_dim: usize,
    },

    /// Print the Graphviz DOT text for a named topology
    Dot {
        /// Topology kind (chain, ring, all-to-all, ibmq)
        #[arg(short, long, default_value = "chain")]
        topology: String,

        /// Number of qubits (ignored for `ibmq`)
        #[arg(short = 'q', long, default_value = "4")]
        qubits: usize,
    },

    /// Show CLI/library version information
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let _ = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();

    match cli.command {
        Commands::Run {
            topology,
            qubits,
            script,
            cutoff,
            max_dim,
        } => cmd_run(&topology, qubits, script.as_deref(), cutoff, max_dim, cli.format),
        Commands::Dot { topology, qubits } => cmd_dot(&topology, qubits),
        Commands::Info => cmd_info(cli.format),
    }
}

fn build_topology(kind: &str, qubits: usize) -> Result<Topology> {
    match kind {
        "chain" => Ok(make_chain(qubits, false)),
        "ring" => Ok(make_chain(qubits, true)),
        "all-to-all" | "full" => Ok(make_all_to_all(qubits)),
        "ibmq" => Ok(make_ibmq_topology()),
        other => anyhow::bail!("unknown topology kind '{other}' (expected chain, ring, all-to-all, ibmq)"),
    }
}

const DEFAULT_SCRIPT: &str = "H 0\nCNOT 0 1\n";

fn cmd_run(
    topology_kind: &str,
    qubits: usize,
    script_path: Option<&std::path::Path>,
    cutoff: f64,
    max_dim: usize,
    format: OutputFormat,
) -> Result<()> {
    let topology = build_topology(topology_kind, qubits)?;
    let num_qubits = topology.num_bits();

    let amplitudes = vec![(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)); num_qubits];
    let mut qc = QCircuit::new(topology, &amplitudes)?;
    qc.with_cutoff(cutoff).with_max_dim(max_dim);

    let source = match script_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read gate script: {}", path.display()))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let gates = parse_script(&source)?;
    info!(gate_count = gates.len(), num_qubits, "running gate script");
    run_script(&mut qc, &gates)?;

    let probabilities: Vec<(usize, f64)> = (0..num_qubits)
        .map(|site| Ok::<_, anyhow::Error>((site, qc.probability_of_zero(site)?)))
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Text => {
            println!("\n=== Measurement probabilities ===");
            for (site, p0) in &probabilities {
                println!("qubit {site}: P(0) = {p0:.4}, P(1) = {:.4}", 1.0 - p0);
            }
        }
        OutputFormat::Json => {
            let json: Vec<_> = probabilities
                .iter()
                .map(|(site, p0)| serde_json::json!({"qubit": site, "p0": p0, "p1": 1.0 - p0}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

fn cmd_dot(topology_kind: &str, qubits: usize) -> Result<()> {
    let topology = build_topology(topology_kind, qubits)?;
    println!("{}", to_dot(&topology, &DotOptions::default()));
    Ok(())
}

fn cmd_info(format: OutputFormat) -> Result<()> {
    let name = "ttn";
    let version = env!("CARGO_PKG_VERSION");
    match format {
        OutputFormat::Text => {
            println!("{name} {version}");
            println!("Tree tensor-network quantum circuit simulator");
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({"name": name, "version": version}))?
            );
        }
    }
    Ok(())
}
