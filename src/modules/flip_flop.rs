//! Flip-flop module state.

use crate::network::PulseLevel;

/// A flip-flop module: a single on/off bit, initially off.
///
/// High pulses are absorbed silently. A low pulse toggles the bit and
/// emits high if the bit is now on, low otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipFlop {
    on: bool,
}

impl FlipFlop {
    /// Create a flip-flop in its initial (off) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the flip-flop is currently on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Receive a pulse, returning the level to emit (if any).
    pub fn receive(&mut self, level: PulseLevel) -> Option<PulseLevel> {
        if level.is_high() {
            return None;
        }
        self.on = !self.on;
        Some(if self.on {
            PulseLevel::High
        } else {
            PulseLevel::Low
        })
    }
}
