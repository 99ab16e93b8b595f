//! The pulse scheduler: one button press as a FIFO queue drain.

use std::collections::VecDeque;
use std::ops::AddAssign;

use crate::network::{ModuleId, NetworkState, Pulse};

use super::Simulator;

/// Delivered pulse totals, split by level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseCounts {
    /// Pulses delivered at low level
    pub low: u64,
    /// Pulses delivered at high level
    pub high: u64,
}

impl PulseCounts {
    /// The bulk-counting answer: `low * high`.
    ///
    /// Widened to `u128`; extrapolated totals for very large press counts
    /// overflow a `u64` product.
    pub fn product(&self) -> u128 {
        u128::from(self.low) * u128::from(self.high)
    }
}

impl AddAssign for PulseCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.low += rhs.low;
        self.high += rhs.high;
    }
}

impl Simulator {
    /// Press the button once, running the tick to quiescence.
    ///
    /// Seeds the queue with the button's low pulse, then repeatedly
    /// dequeues the head pulse, counts it at delivery time, delivers it,
    /// and appends the resulting pulses in emission order at the tail.
    /// Pulses are delivered in exactly the order they are produced across
    /// the whole network (global FIFO), which fixes the conjunction
    /// memory update order.
    pub fn press_button(&mut self) -> PulseCounts {
        self.press_watched(&[]).0
    }

    /// Press the button once, additionally reporting which of the watched
    /// modules emitted a high pulse during the tick.
    pub(crate) fn press_watched(&mut self, watch: &[ModuleId]) -> (PulseCounts, Vec<ModuleId>) {
        let mut counts = PulseCounts::default();
        let mut high_emitters: Vec<ModuleId> = Vec::new();

        let mut queue: VecDeque<Pulse> = VecDeque::new();
        queue.push_back(self.network.seed_pulse());

        while let Some(pulse) = queue.pop_front() {
            if pulse.level.is_high() {
                counts.high += 1;
                if watch.contains(&pulse.source) && !high_emitters.contains(&pulse.source) {
                    high_emitters.push(pulse.source);
                }
            } else {
                counts.low += 1;
            }

            let module = self.network.module_mut(pulse.dest);
            if let Some(level) = module.kind.process(pulse.source, pulse.level) {
                for &dest in &module.destinations {
                    queue.push_back(Pulse {
                        source: pulse.dest,
                        level,
                        dest,
                    });
                }
            }
        }

        (counts, high_emitters)
    }

    /// Snapshot all mutable module state.
    pub fn snapshot(&self) -> NetworkState {
        self.network.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{simulator, EXAMPLE_ONE, EXAMPLE_TWO};
    use super::*;

    #[test]
    fn test_example_one_single_press() {
        let mut sim = simulator(EXAMPLE_ONE);
        let counts = sim.press_button();
        assert_eq!(counts, PulseCounts { low: 8, high: 4 });
    }

    #[test]
    fn test_example_two_single_press() {
        let mut sim = simulator(EXAMPLE_TWO);
        let counts = sim.press_button();
        assert_eq!(counts, PulseCounts { low: 4, high: 4 });
    }

    #[test]
    fn test_example_one_returns_to_initial_state() {
        let mut sim = simulator(EXAMPLE_ONE);
        let initial = sim.snapshot();
        sim.press_button();
        assert_eq!(sim.snapshot(), initial);
    }

    #[test]
    fn test_example_two_second_press_differs() {
        // Example two needs four presses to cycle back
        let mut sim = simulator(EXAMPLE_TWO);
        let initial = sim.snapshot();
        sim.press_button();
        assert_ne!(sim.snapshot(), initial);
    }

    #[test]
    fn test_determinism() {
        let mut first = simulator(EXAMPLE_TWO);
        let mut second = simulator(EXAMPLE_TWO);
        for _ in 0..5 {
            assert_eq!(first.press_button(), second.press_button());
            assert_eq!(first.snapshot(), second.snapshot());
        }
    }

    #[test]
    fn test_watch_reports_high_emitter() {
        let mut sim = simulator(EXAMPLE_TWO);
        let a = sim.network().find("a").unwrap();
        let (_, emitters) = sim.press_watched(&[a]);
        // First press toggles `a` on, so it emits high
        assert_eq!(emitters, vec![a]);
        let (_, emitters) = sim.press_watched(&[a]);
        // Second press toggles `a` off, emitting low
        assert!(emitters.is_empty());
    }
}
