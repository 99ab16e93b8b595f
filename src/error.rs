//! Error types for the Pulsenet simulator.
//!
//! This module provides a unified error type [`PulsenetError`] that covers
//! all error conditions that can occur during netlist parsing, network
//! construction, and the analyses built on top of the simulator.

use thiserror::Error;

/// Result type alias using [`PulsenetError`].
pub type Result<T> = std::result::Result<T, PulsenetError>;

/// Unified error type for all Pulsenet operations.
#[derive(Error, Debug)]
pub enum PulsenetError {
    // ============ Netlist Parsing Errors ============
    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Source name that is neither `broadcaster` nor `%`/`&` prefixed
    #[error("Unknown module kind for source '{name}' at line {line}")]
    UnknownModuleKind { name: String, line: usize },

    // ============ Network Construction Errors ============
    /// The same source name was defined twice
    #[error("Duplicate module definition '{name}'")]
    DuplicateModule { name: String },

    /// No broadcaster module to wire the button to
    #[error("Network has no broadcaster module")]
    MissingBroadcaster,

    /// Module name looked up but never defined or referenced
    #[error("Module '{name}' not found in network")]
    ModuleNotFound { name: String },

    // ============ Analysis Errors ============
    /// Reachability target is not fed by exactly one conjunction
    #[error("Reachability target '{target}' has no unique upstream conjunction: {message}")]
    NoUpstreamConjunction { target: String, message: String },

    /// The conjunction feeding the target has no inputs to watch
    #[error("Empty watch set for reachability target '{target}'")]
    EmptyWatchSet { target: String },

    /// LCM over an empty or zero-containing period set is undefined
    #[error("Least common multiple undefined: {message}")]
    LcmUndefined { message: String },

    /// Period search exhausted the safety bound without a state repeat
    #[error("No state repeat found within {bound} presses - periodicity assumption does not hold")]
    PeriodNotFound { bound: usize },

    /// A watched branch emitted no high pulse within the safety bound
    #[error("Watched branch '{branch}' emitted no high pulse within {bound} presses")]
    BranchPeriodNotFound { branch: String, bound: usize },

    // ============ I/O Errors ============
    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PulsenetError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an upstream-conjunction error
    pub fn no_upstream_conjunction(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NoUpstreamConjunction {
            target: target.into(),
            message: message.into(),
        }
    }
}
