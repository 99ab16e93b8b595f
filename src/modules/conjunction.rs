//! Conjunction module state.

use crate::network::{ModuleId, PulseLevel};

/// A conjunction module: remembers the last level seen from each input.
///
/// The input set is fixed at build time to exactly the modules whose
/// destination lists contain this conjunction; every entry starts low.
/// On receiving a pulse it overwrites the entry for the pulse's source,
/// then emits low if every remembered level is high, high otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjunction {
    inputs: Vec<ModuleId>,
    memory: Vec<PulseLevel>,
}

impl Conjunction {
    /// Create a conjunction with an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an inbound edge, initializing its memory to low.
    ///
    /// Only called during network construction; the input set never
    /// changes afterwards.
    pub fn add_input(&mut self, source: ModuleId) {
        self.inputs.push(source);
        self.memory.push(PulseLevel::Low);
    }

    /// The fixed inbound-edge set.
    pub fn inputs(&self) -> &[ModuleId] {
        &self.inputs
    }

    /// Remembered levels, in input registration order.
    pub fn memory(&self) -> &[PulseLevel] {
        &self.memory
    }

    /// Receive a pulse from `source`, returning the level to emit.
    pub fn receive(&mut self, source: ModuleId, level: PulseLevel) -> PulseLevel {
        if let Some(pos) = self.inputs.iter().position(|&id| id == source) {
            self.memory[pos] = level;
        }
        if self.memory.iter().all(PulseLevel::is_high) {
            PulseLevel::Low
        } else {
            PulseLevel::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_input_inverts() {
        let mut con = Conjunction::new();
        con.add_input(ModuleId(0));
        assert_eq!(con.receive(ModuleId(0), PulseLevel::High), PulseLevel::Low);
        assert_eq!(con.receive(ModuleId(0), PulseLevel::Low), PulseLevel::High);
    }

    #[test]
    fn test_emits_high_until_all_inputs_high() {
        let mut con = Conjunction::new();
        con.add_input(ModuleId(0));
        con.add_input(ModuleId(1));
        assert_eq!(con.receive(ModuleId(0), PulseLevel::High), PulseLevel::High);
        assert_eq!(con.receive(ModuleId(1), PulseLevel::High), PulseLevel::Low);
    }

    #[test]
    fn test_memory_initializes_low() {
        let mut con = Conjunction::new();
        con.add_input(ModuleId(3));
        con.add_input(ModuleId(7));
        assert_eq!(con.memory(), &[PulseLevel::Low, PulseLevel::Low]);
    }

    proptest! {
        #[test]
        fn low_output_iff_all_memory_high(
            input_count in 1usize..6,
            updates in proptest::collection::vec((0usize..6, any::<bool>()), 1..32),
        ) {
            let mut con = Conjunction::new();
            for i in 0..input_count {
                con.add_input(ModuleId(i));
            }
            for (idx, high) in updates {
                let source = ModuleId(idx % input_count);
                let level = if high { PulseLevel::High } else { PulseLevel::Low };
                let out = con.receive(source, level);
                let all_high = con.memory().iter().all(PulseLevel::is_high);
                prop_assert_eq!(out == PulseLevel::Low, all_high);
            }
        }
    }
}
