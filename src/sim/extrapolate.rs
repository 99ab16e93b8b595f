//! Period detection and extrapolated bulk counting.
//!
//! After each press the full mutable state (every flip-flop bit, every
//! conjunction memory) is snapshotted and compared against all prior
//! snapshots. A repeat at press `j` matching the state after press `i`
//! means the per-press counts are periodic with period `j - i` starting
//! after press `i`, so totals for astronomically large press counts
//! reduce to prefix + whole cycles + remainder.

use tracing::debug;

use crate::error::{PulsenetError, Result};
use crate::network::NetworkState;

use super::{PulseCounts, Simulator};

/// A detected repetition in the network's state sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// Presses before the repeating cycle starts
    pub offset: usize,
    /// Cycle length in presses
    pub length: usize,
}

impl Simulator {
    /// Press until the full module state repeats, returning the detected
    /// offset and cycle length.
    ///
    /// The state after `offset` presses equals the state after
    /// `offset + length` presses. Fails if the safety bound is exhausted
    /// first.
    pub fn detect_period(&mut self) -> Result<Period> {
        let mut history = vec![self.snapshot()];
        for press in 1..=self.config.period_bound {
            self.press_button();
            let snap = self.snapshot();
            if let Some(offset) = history.iter().position(|s| *s == snap) {
                let period = Period {
                    offset,
                    length: press - offset,
                };
                debug!(offset = period.offset, length = period.length, "state repeat found");
                return Ok(period);
            }
            history.push(snap);
        }
        Err(PulsenetError::PeriodNotFound {
            bound: self.config.period_bound,
        })
    }

    /// The bulk-counting answer for `target` presses.
    ///
    /// Simulates until either the state repeats (then extrapolates) or
    /// `target` presses complete (then sums directly). Exhausting the
    /// safety bound with `target` still ahead is a fatal error.
    pub fn pulse_product(&mut self, target: u64) -> Result<u128> {
        let mut history: Vec<NetworkState> = vec![self.snapshot()];
        let mut per_press: Vec<PulseCounts> = Vec::new();

        while (per_press.len() as u64) < target {
            per_press.push(self.press_button());
            let press = per_press.len();
            if press as u64 == target {
                break;
            }
            let snap = self.snapshot();
            if let Some(offset) = history.iter().position(|s| *s == snap) {
                let length = press - offset;
                debug!(offset, length, target, "extrapolating from state repeat");
                return Ok(extrapolated_product(&per_press, offset, length, target));
            }
            history.push(snap);
            if press >= self.config.period_bound {
                return Err(PulsenetError::PeriodNotFound {
                    bound: self.config.period_bound,
                });
            }
        }

        let mut totals = PulseCounts::default();
        for counts in &per_press {
            totals += *counts;
        }
        Ok(totals.product())
    }
}

/// Combine recorded per-press counts into totals for `target` presses.
///
/// `per_press[k]` holds the counts of press `k + 1`; presses `1..=offset`
/// are the pre-period prefix and presses `offset+1..=offset+length` one
/// full cycle. Totals are accumulated in `u128`: near the top of the
/// `u64` target range the low total alone exceeds `u64::MAX`.
fn extrapolated_product(
    per_press: &[PulseCounts],
    offset: usize,
    length: usize,
    target: u64,
) -> u128 {
    let mut prefix = PulseCounts::default();
    for counts in &per_press[..offset] {
        prefix += *counts;
    }

    let mut cycle = PulseCounts::default();
    for counts in &per_press[offset..offset + length] {
        cycle += *counts;
    }

    let full_cycles = (target - offset as u64) / length as u64;
    let remainder = ((target - offset as u64) % length as u64) as usize;

    let mut partial = PulseCounts::default();
    for counts in &per_press[offset..offset + remainder] {
        partial += *counts;
    }

    let low = u128::from(prefix.low)
        + u128::from(cycle.low) * u128::from(full_cycles)
        + u128::from(partial.low);
    let high = u128::from(prefix.high)
        + u128::from(cycle.high) * u128::from(full_cycles)
        + u128::from(partial.high);
    low * high
}

#[cfg(test)]
mod tests {
    use super::super::testing::{simulator, EXAMPLE_ONE, EXAMPLE_TWO};
    use super::super::SimulatorConfig;
    use super::*;
    use crate::dsl;
    use crate::network::Network;

    #[test]
    fn test_example_one_period_is_one_press() {
        let mut sim = simulator(EXAMPLE_ONE);
        let period = sim.detect_period().unwrap();
        assert_eq!(period, Period { offset: 0, length: 1 });
    }

    #[test]
    fn test_example_two_period_is_four_presses() {
        let mut sim = simulator(EXAMPLE_TWO);
        let period = sim.detect_period().unwrap();
        assert_eq!(period, Period { offset: 0, length: 4 });
    }

    #[test]
    fn test_detected_period_matches_state_repeat() {
        let mut probe = simulator(EXAMPLE_TWO);
        let period = probe.detect_period().unwrap();

        let mut sim = simulator(EXAMPLE_TWO);
        for _ in 0..period.offset {
            sim.press_button();
        }
        let at_offset = sim.snapshot();
        for _ in 0..period.length {
            sim.press_button();
        }
        assert_eq!(sim.snapshot(), at_offset);
    }

    #[test]
    fn test_extrapolation_matches_direct_simulation() {
        for target in 0..40u64 {
            let mut direct = simulator(EXAMPLE_TWO);
            let mut extrapolated = simulator(EXAMPLE_TWO);
            assert_eq!(
                extrapolated.pulse_product(target).unwrap(),
                direct.pulse_product_direct(target),
                "mismatch at {} presses",
                target
            );
        }
    }

    #[test]
    fn test_example_products_via_extrapolation() {
        let mut sim = simulator(EXAMPLE_ONE);
        assert_eq!(sim.pulse_product(1000).unwrap(), 32_000_000);
        let mut sim = simulator(EXAMPLE_TWO);
        assert_eq!(sim.pulse_product(1000).unwrap(), 11_687_500);
    }

    #[test]
    fn test_huge_press_count() {
        // 8 low / 4 high per press, repeating from the start
        let mut sim = simulator(EXAMPLE_ONE);
        let target = 1_000_000_000_000u64;
        assert_eq!(
            sim.pulse_product(target).unwrap(),
            u128::from(target) * 8 * u128::from(target) * 4
        );
    }

    #[test]
    fn test_press_count_near_u64_limit() {
        // At this scale the low total alone (8 per press) exceeds
        // u64::MAX, so the extrapolated sums must be u128
        let mut sim = simulator(EXAMPLE_ONE);
        let target = 3_000_000_000_000_000_000u64;
        assert_eq!(
            sim.pulse_product(target).unwrap(),
            (u128::from(target) * 8) * (u128::from(target) * 4)
        );
    }

    #[test]
    fn test_bound_exhaustion_is_fatal() {
        let network = Network::from_ast(&dsl::parse(EXAMPLE_TWO).unwrap()).unwrap();
        let config = SimulatorConfig::new().with_period_bound(2);
        let mut sim = crate::Simulator::with_config(network, config);
        let err = sim.pulse_product(10).unwrap_err();
        assert!(matches!(
            err,
            crate::PulsenetError::PeriodNotFound { bound: 2 }
        ));
    }
}
