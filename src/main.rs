//! Pulsenet - Pulse-Propagation Network Simulator
//!
//! Reads a netlist, prints the low-times-high pulse product for a number
//! of button presses, and optionally the minimum press count for a target
//! module to receive a low pulse.
//!
//! # Usage
//!
//! ```bash
//! pulsenet network.txt --presses 1000 --target rx
//! ```

use std::path::PathBuf;

use clap::Parser;
use pulsenet::{dsl, error::Result, Network, Simulator, DEFAULT_PRESSES};

/// Pulse-propagation network simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Number of button presses for bulk counting
    #[arg(short, long, default_value_t = DEFAULT_PRESSES)]
    presses: u64,

    /// Module whose first low pulse to solve for
    #[arg(short, long)]
    target: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("pulsenet=info")
        .init();

    let args = Args::parse();

    // Parse and build the network
    let ast = dsl::parse_file(&args.netlist)?;
    let network = Network::from_ast(&ast)?;

    // Bulk counting (extrapolated, so very large press counts also work)
    let mut simulator = Simulator::new(network.clone());
    println!("{}", simulator.pulse_product(args.presses)?);

    // Reachability, from a pristine network
    if let Some(target) = args.target {
        let mut simulator = Simulator::new(network);
        println!("{}", simulator.min_presses_until_low(&target)?);
    }

    Ok(())
}
