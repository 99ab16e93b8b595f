//! Parser for the netlist format.

use super::ast::{DeclaredKind, NetworkAst, Record};
use crate::error::{PulsenetError, Result};

/// Separator between a record's source and its destination list.
const ARROW: &str = " -> ";

/// Parse a full netlist into an AST.
///
/// Blank lines are skipped. Lines are 1-indexed in error messages.
pub fn parse(input: &str) -> Result<NetworkAst> {
    let mut ast = NetworkAst::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        ast.records.push(parse_record(trimmed, line_no)?);
    }
    Ok(ast)
}

/// Parse a single `<source> -> <dest1>, <dest2>, ...` record.
fn parse_record(line: &str, line_no: usize) -> Result<Record> {
    let (source, destinations_str) = line.split_once(ARROW).ok_or_else(|| {
        PulsenetError::parse(
            line_no,
            format!("expected '{}' between source and destinations", ARROW.trim()),
        )
    })?;

    let source = source.trim();
    let (kind, name) = if let Some(name) = source.strip_prefix('%') {
        (DeclaredKind::FlipFlop, name)
    } else if let Some(name) = source.strip_prefix('&') {
        (DeclaredKind::Conjunction, name)
    } else if source == "broadcaster" {
        (DeclaredKind::Broadcaster, source)
    } else {
        return Err(PulsenetError::UnknownModuleKind {
            name: source.to_string(),
            line: line_no,
        });
    };

    if name.is_empty() {
        return Err(PulsenetError::parse(line_no, "empty module name"));
    }

    let destinations: Vec<String> = destinations_str
        .split(',')
        .map(|d| d.trim().to_string())
        .collect();

    if destinations.iter().any(String::is_empty) {
        return Err(PulsenetError::parse(line_no, "empty destination name"));
    }

    Ok(Record {
        kind,
        name: name.to_string(),
        destinations,
        line: line_no,
    })
}
