//! Reachability: minimum presses until a target module receives a low
//! pulse.
//!
//! The method assumes the puzzle-shaped input: the target is fed by a
//! single conjunction, and each of that conjunction's inputs is a
//! free-running branch that emits high with a constant period from its
//! first occurrence onward. Each branch is watched until its first high
//! emission; the answer is the LCM of the recorded press indices. The
//! periodicity assumption is documented, not verified; this is not a
//! general circuit-reachability algorithm.

use tracing::debug;

use crate::error::{PulsenetError, Result};
use crate::modules::ModuleKind;
use crate::network::ModuleId;

use super::Simulator;

impl Simulator {
    /// Minimum press count at which `target` first receives a low pulse.
    ///
    /// Fails if any watched branch emits no high pulse within the
    /// configured safety bound.
    pub fn min_presses_until_low(&mut self, target: &str) -> Result<u64> {
        let target_id = self
            .network
            .find(target)
            .ok_or_else(|| PulsenetError::ModuleNotFound {
                name: target.to_string(),
            })?;

        let watch = self.watched_branches(target, target_id)?;
        let mut periods: Vec<Option<u64>> = vec![None; watch.len()];

        let mut presses = 0u64;
        while let Some(idx) = periods.iter().position(Option::is_none) {
            if presses >= self.config.period_bound as u64 {
                return Err(PulsenetError::BranchPeriodNotFound {
                    branch: self.network.name(watch[idx]).to_string(),
                    bound: self.config.period_bound,
                });
            }
            let (_, emitters) = self.press_watched(&watch);
            presses += 1;
            for (idx, &branch) in watch.iter().enumerate() {
                if periods[idx].is_none() && emitters.contains(&branch) {
                    debug!(branch = %self.network.name(branch), period = presses, "branch period recorded");
                    periods[idx] = Some(presses);
                }
            }
        }

        let periods: Vec<u64> = periods.into_iter().flatten().collect();
        lcm_all(&periods)
    }

    /// The inputs of the unique conjunction feeding `target_id`.
    fn watched_branches(&self, target: &str, target_id: ModuleId) -> Result<Vec<ModuleId>> {
        let feeders = self.network.feeders(target_id);
        let feeder = match feeders.as_slice() {
            [single] => *single,
            [] => {
                return Err(PulsenetError::no_upstream_conjunction(
                    target,
                    "no module feeds the target",
                ))
            }
            _ => {
                return Err(PulsenetError::no_upstream_conjunction(
                    target,
                    format!("{} modules feed the target", feeders.len()),
                ))
            }
        };

        let watch = match &self.network.module(feeder).kind {
            ModuleKind::Conjunction(con) => con.inputs().to_vec(),
            _ => {
                return Err(PulsenetError::no_upstream_conjunction(
                    target,
                    format!("feeding module '{}' is not a conjunction", self.network.name(feeder)),
                ))
            }
        };

        if watch.is_empty() {
            return Err(PulsenetError::EmptyWatchSet {
                target: target.to_string(),
            });
        }
        Ok(watch)
    }
}

/// Least common multiple of a period set.
///
/// Undefined (and fatal) for an empty set or one containing zero.
pub(crate) fn lcm_all(periods: &[u64]) -> Result<u64> {
    if periods.is_empty() {
        return Err(PulsenetError::LcmUndefined {
            message: "empty period set".to_string(),
        });
    }
    if periods.contains(&0) {
        return Err(PulsenetError::LcmUndefined {
            message: "period set contains zero".to_string(),
        });
    }
    Ok(periods
        .iter()
        .copied()
        .fold(1, |acc, p| acc / gcd(acc, p) * p))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::super::testing::simulator;
    use super::*;

    #[test]
    fn test_lcm_all() {
        assert_eq!(lcm_all(&[4, 6]).unwrap(), 12);
        assert_eq!(lcm_all(&[3, 5, 7]).unwrap(), 105);
        assert_eq!(lcm_all(&[9]).unwrap(), 9);
    }

    #[test]
    fn test_lcm_empty_set_is_fatal() {
        assert!(matches!(
            lcm_all(&[]).unwrap_err(),
            PulsenetError::LcmUndefined { .. }
        ));
    }

    #[test]
    fn test_lcm_zero_is_fatal() {
        assert!(matches!(
            lcm_all(&[4, 0]).unwrap_err(),
            PulsenetError::LcmUndefined { .. }
        ));
    }

    #[test]
    fn test_single_branch_reachability() {
        // `rx` first receives low on press 2: press 1 toggles `a` on
        // (inv remembers high, sends low to con), press 2 toggles `a`
        // off so inv sends high and con's memory goes all-high.
        let mut sim = simulator("broadcaster -> a\n%a -> inv\n&inv -> con\n&con -> rx\n");
        assert_eq!(sim.min_presses_until_low("rx").unwrap(), 2);
    }

    #[test]
    fn test_two_branch_reachability() {
        // Both flip-flops emit high on the first press, so con sees
        // all-high within press 1.
        let mut sim = simulator("broadcaster -> a, b\n%a -> con\n%b -> con\n&con -> rx\n");
        assert_eq!(sim.min_presses_until_low("rx").unwrap(), 1);
    }

    #[test]
    fn test_unknown_target_is_fatal() {
        let mut sim = simulator("broadcaster -> a\n%a -> con\n&con -> rx\n");
        assert!(matches!(
            sim.min_presses_until_low("zz").unwrap_err(),
            PulsenetError::ModuleNotFound { .. }
        ));
    }

    #[test]
    fn test_non_conjunction_feeder_is_fatal() {
        let mut sim = simulator("broadcaster -> a\n%a -> rx\n");
        assert!(matches!(
            sim.min_presses_until_low("rx").unwrap_err(),
            PulsenetError::NoUpstreamConjunction { .. }
        ));
    }

    #[test]
    fn test_multiple_feeders_is_fatal() {
        let mut sim = simulator("broadcaster -> a, b\n%a -> rx\n%b -> rx\n");
        assert!(matches!(
            sim.min_presses_until_low("rx").unwrap_err(),
            PulsenetError::NoUpstreamConjunction { .. }
        ));
    }

    #[test]
    fn test_branch_never_emitting_high_is_fatal() {
        // `dead` is never pulsed, so `c` always emits high and the
        // watched flip-flop `b` absorbs forever without emitting
        let netlist =
            "broadcaster -> x\n%x -> c\n%dead -> c\n&c -> b\n%b -> con\n&con -> rx\n";
        let network = crate::Network::from_ast(&crate::dsl::parse(netlist).unwrap()).unwrap();
        let config = super::super::SimulatorConfig::new().with_period_bound(8);
        let mut sim = crate::Simulator::with_config(network, config);
        assert!(matches!(
            sim.min_presses_until_low("rx").unwrap_err(),
            PulsenetError::BranchPeriodNotFound { bound: 8, .. }
        ));
    }

    #[test]
    fn test_empty_watch_set_is_fatal() {
        let mut sim = simulator("broadcaster -> a\n&con -> rx\n%a -> sink\n");
        assert!(matches!(
            sim.min_presses_until_low("rx").unwrap_err(),
            PulsenetError::EmptyWatchSet { .. }
        ));
    }
}
