//! The simulation engine.
//!
//! One button press is one atomic tick: a strict breadth-first
//! discrete-event drain of a global FIFO pulse queue. Three analyses sit
//! on top of the tick:
//!
//! - bulk counting (`press_many` / `pulse_product_direct`)
//! - period-based extrapolation for press counts too large to simulate
//!   (`pulse_product`, `detect_period`)
//! - reachability via branch periods and LCM (`min_presses_until_low`)
//!
//! The engine is single-threaded and deterministic: identical starting
//! state always yields identical delivery sequences.

mod counter;
mod extrapolate;
mod reachability;
mod scheduler;

pub use extrapolate::Period;
pub use scheduler::PulseCounts;

use crate::network::Network;

/// Default safety bound on presses simulated while searching for a state
/// repeat or a branch period.
pub const DEFAULT_PERIOD_BOUND: usize = 10_000;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Maximum presses to simulate while searching for a state repeat
    /// or a branch's first high emission.
    pub period_bound: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            period_bound: DEFAULT_PERIOD_BOUND,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the period-search safety bound.
    ///
    /// The bound caps snapshot history growth; exceeding it without
    /// finding a repeat is a fatal error, never a silent truncation.
    pub fn with_period_bound(mut self, period_bound: usize) -> Self {
        self.period_bound = period_bound;
        self
    }
}

/// The main network simulator.
///
/// Owns the network exclusively for the duration of an analysis run;
/// module state persists across presses within the run.
pub struct Simulator {
    /// The network being simulated
    network: Network,
    /// Analysis configuration
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator for the given network with default
    /// configuration.
    pub fn new(network: Network) -> Self {
        Self::with_config(network, SimulatorConfig::default())
    }

    /// Create a new simulator with custom configuration.
    pub fn with_config(network: Network, config: SimulatorConfig) -> Self {
        Self { network, config }
    }

    /// The simulated network.
    pub fn network(&self) -> &Network {
        &self.network
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Simulator;
    use crate::dsl;
    use crate::network::Network;

    pub const EXAMPLE_ONE: &str =
        "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a\n";

    pub const EXAMPLE_TWO: &str =
        "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output\n";

    pub fn simulator(input: &str) -> Simulator {
        Simulator::new(Network::from_ast(&dsl::parse(input).unwrap()).unwrap())
    }
}
