//! Parser for the netlist adjacency format.
//!
//! The format is line-oriented: one adjacency record per line, naming a
//! source module and its ordered destination list.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { record }
//! record      = source " -> " destinations
//! source      = "broadcaster" | '%' name | '&' name
//! destinations = name { ", " name }
//! name        = identifier
//! ```
//!
//! `%` declares a flip-flop, `&` a conjunction, and the literal
//! `broadcaster` the broadcaster. Destination names are plain; a name that
//! never appears as a source is an implicit output sink.
//!
//! # Example
//!
//! ```text
//! broadcaster -> a, b, c
//! %a -> b
//! %b -> c
//! %c -> inv
//! &inv -> a
//! ```

mod ast;
mod parser;

pub use ast::{DeclaredKind, NetworkAst, Record};
pub use parser::parse;

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> crate::error::Result<NetworkAst> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::PulsenetError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
