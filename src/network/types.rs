//! Core types for network representation.

use std::fmt;

/// A unique identifier for a module in the network.
///
/// Indexes into the network's module table. Edges and conjunction memory
/// keys are stored as `ModuleId`s rather than references, so cyclic
/// topology never produces cyclic ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// A pulse level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PulseLevel {
    /// Low pulse
    Low,
    /// High pulse
    High,
}

impl PulseLevel {
    /// Check if this is a high pulse.
    pub fn is_high(&self) -> bool {
        matches!(self, PulseLevel::High)
    }
}

impl fmt::Display for PulseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PulseLevel::Low => write!(f, "low"),
            PulseLevel::High => write!(f, "high"),
        }
    }
}

/// A single pulse in flight: source, level, destination.
///
/// Pulses are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// Module that emitted the pulse
    pub source: ModuleId,
    /// Pulse level
    pub level: PulseLevel,
    /// Module the pulse is delivered to
    pub dest: ModuleId,
}
