//! Module state machines.
//!
//! This module provides the per-kind pulse-transition logic:
//! - Broadcaster: re-emits the incoming level unconditionally
//! - FlipFlop: on/off bit toggled by low pulses
//! - Conjunction: per-input memory, NAND-style output
//! - Button: seeds one low pulse per activation
//! - Output: terminal sink, absorbs everything
//!
//! Each stateful kind carries its own state payload; dispatch is by
//! pattern matching on the [`ModuleKind`] enum.

mod conjunction;
mod flip_flop;

pub use conjunction::Conjunction;
pub use flip_flop::FlipFlop;

use crate::network::{ModuleId, PulseLevel};

/// A module in the network: identity, ordered outgoing edges, and kind.
#[derive(Debug, Clone)]
pub struct Module {
    /// Unique module name
    pub name: String,
    /// Destinations in declaration order (order governs delivery order)
    pub destinations: Vec<ModuleId>,
    /// Kind and per-kind mutable state
    pub kind: ModuleKind,
}

/// Module kind, carrying per-kind state where applicable.
#[derive(Debug, Clone)]
pub enum ModuleKind {
    /// Re-emits every incoming pulse at the same level
    Broadcaster,
    /// Synthetic button; not driven by pulses
    Button,
    /// Implicit terminal sink
    Output,
    /// On/off toggle
    FlipFlop(FlipFlop),
    /// Per-input pulse memory
    Conjunction(Conjunction),
}

impl ModuleKind {
    /// Process an incoming pulse, returning the level to emit to every
    /// destination (or `None` to absorb the pulse).
    pub fn process(&mut self, source: ModuleId, level: PulseLevel) -> Option<PulseLevel> {
        match self {
            ModuleKind::Broadcaster => Some(level),
            ModuleKind::FlipFlop(ff) => ff.receive(level),
            ModuleKind::Conjunction(con) => Some(con.receive(source, level)),
            // The button is activated explicitly, never by a pulse
            ModuleKind::Button | ModuleKind::Output => None,
        }
    }
}
