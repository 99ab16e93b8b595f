//! # Pulsenet
//!
//! A pulse-propagation network simulator for typed digital-logic modules.
//!
//! This library provides:
//! - A line-oriented netlist format for describing module networks
//! - A strict breadth-first discrete-event simulation of button presses
//! - Bulk pulse counting over many presses
//! - Period-based extrapolation for astronomically large press counts
//! - A reachability solver combining branch periods via LCM
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the netlist adjacency format
//! - [`network`] - Module graph representation
//! - [`modules`] - Per-kind pulse-transition state machines
//! - [`sim`] - Scheduler and the analyses built on it
//!
//! ## Usage
//!
//! ```
//! use pulsenet::{dsl, Network, Simulator};
//!
//! let netlist = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a\n";
//! let network = Network::from_ast(&dsl::parse(netlist)?)?;
//! let mut sim = Simulator::new(network);
//! assert_eq!(sim.pulse_product(1000)?, 32_000_000);
//! # Ok::<(), pulsenet::PulsenetError>(())
//! ```
//!
//! ## Simulation Method
//!
//! One button press is one atomic tick. The tick seeds a FIFO queue with
//! the button's low pulse to the broadcaster, then drains it: each pulse
//! is counted when dequeued, delivered to its destination module, and the
//! module's response pulses are appended in order at the tail. Global
//! FIFO ordering makes conjunction memory updates, and therefore every
//! analysis result, deterministic.

pub mod dsl;
pub mod error;
pub mod modules;
pub mod network;
pub mod sim;

// Re-export main types for convenience
pub use error::{PulsenetError, Result};
pub use network::Network;
pub use sim::Simulator;

/// Default press count for bulk counting
pub const DEFAULT_PRESSES: u64 = 1000;
