//! AST types for the netlist format.

/// Complete representation of a parsed netlist.
#[derive(Debug, Clone, Default)]
pub struct NetworkAst {
    /// All adjacency records, in input order
    pub records: Vec<Record>,
}

impl NetworkAst {
    /// Create a new empty netlist AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// One adjacency record: a source module and its destination list.
#[derive(Debug, Clone)]
pub struct Record {
    /// Kind declared by the source name's prefix (or the `broadcaster` literal)
    pub kind: DeclaredKind,
    /// Module identity, with any `%`/`&` prefix stripped
    pub name: String,
    /// Destination names in declaration order (order is significant)
    pub destinations: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Module kinds that can appear on the left of an adjacency record.
///
/// `Button` and `Output` modules are never declared in the netlist; the
/// button is synthesized at build time and outputs arise implicitly from
/// undeclared destination names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredKind {
    /// The single `broadcaster` module
    Broadcaster,
    /// `%`-prefixed flip-flop
    FlipFlop,
    /// `&`-prefixed conjunction
    Conjunction,
}
