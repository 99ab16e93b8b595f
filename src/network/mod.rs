//! Network graph representation.
//!
//! A network is a single owned table of typed modules addressed by
//! [`ModuleId`]. Topology (edges, conjunction input sets) is fixed once
//! [`Network::from_ast`] returns; only per-module internal state mutates
//! during simulation.

mod graph;
mod types;

pub use graph::{Network, NetworkState, ModuleState, BROADCASTER_NAME, BUTTON_NAME};
pub use types::{ModuleId, Pulse, PulseLevel};
