//! Network graph structure.

use std::collections::HashMap;

use super::types::{ModuleId, Pulse, PulseLevel};
use crate::dsl::{DeclaredKind, NetworkAst};
use crate::error::{PulsenetError, Result};
use crate::modules::{Conjunction, FlipFlop, Module, ModuleKind};

/// Name of the synthetic button module.
pub const BUTTON_NAME: &str = "button";

/// Name of the broadcaster module.
pub const BROADCASTER_NAME: &str = "broadcaster";

/// Snapshot of one module's mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleState {
    /// Broadcaster, button, output
    Stateless,
    /// Flip-flop on/off bit
    FlipFlop(bool),
    /// Conjunction memory, in input registration order
    Conjunction(Vec<PulseLevel>),
}

/// Full snapshot of a network's mutable state, in module-table order.
///
/// Two snapshots compare equal exactly when every flip-flop bit and every
/// conjunction memory entry match; topology is fixed after build, so this
/// is the whole of the mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkState(pub Vec<ModuleState>);

/// A complete pulse network ready for simulation.
///
/// All modules live in a single owned table indexed by [`ModuleId`];
/// edges and conjunction inputs are ids into that table, so cycles in the
/// graph need no cyclic ownership.
#[derive(Debug, Clone)]
pub struct Network {
    modules: Vec<Module>,
    name_map: HashMap<String, ModuleId>,
    broadcaster: ModuleId,
    button: ModuleId,
}

impl Network {
    /// Build a network from a parsed netlist.
    ///
    /// Declared sources are registered first; destination names with no
    /// declaration become output sinks; a synthetic button wired to the
    /// broadcaster is appended last; finally every conjunction's input
    /// memory is populated from a scan of all destination lists.
    pub fn from_ast(ast: &NetworkAst) -> Result<Self> {
        let mut modules: Vec<Module> = Vec::with_capacity(ast.records.len() + 1);
        let mut name_map: HashMap<String, ModuleId> = HashMap::new();

        // Pass 1: register declared sources with their kinds
        for record in &ast.records {
            if name_map.contains_key(&record.name) {
                return Err(PulsenetError::DuplicateModule {
                    name: record.name.clone(),
                });
            }
            let kind = match record.kind {
                DeclaredKind::Broadcaster => ModuleKind::Broadcaster,
                DeclaredKind::FlipFlop => ModuleKind::FlipFlop(FlipFlop::new()),
                DeclaredKind::Conjunction => ModuleKind::Conjunction(Conjunction::new()),
            };
            name_map.insert(record.name.clone(), ModuleId(modules.len()));
            modules.push(Module {
                name: record.name.clone(),
                destinations: Vec::new(),
                kind,
            });
        }

        // Pass 2: resolve destinations, creating implicit output sinks
        for record in &ast.records {
            let mut destinations = Vec::with_capacity(record.destinations.len());
            for dest_name in &record.destinations {
                let id = match name_map.get(dest_name) {
                    Some(&id) => id,
                    None => {
                        let id = ModuleId(modules.len());
                        name_map.insert(dest_name.clone(), id);
                        modules.push(Module {
                            name: dest_name.clone(),
                            destinations: Vec::new(),
                            kind: ModuleKind::Output,
                        });
                        id
                    }
                };
                destinations.push(id);
            }
            let source = name_map[&record.name];
            modules[source.0].destinations = destinations;
        }

        let broadcaster = name_map
            .get(BROADCASTER_NAME)
            .copied()
            .ok_or(PulsenetError::MissingBroadcaster)?;

        // Synthetic button feeding the broadcaster
        let button = ModuleId(modules.len());
        name_map.insert(BUTTON_NAME.to_string(), button);
        modules.push(Module {
            name: BUTTON_NAME.to_string(),
            destinations: vec![broadcaster],
            kind: ModuleKind::Button,
        });

        // Wire conjunction inputs from the static edge set
        let edges: Vec<(ModuleId, ModuleId)> = modules
            .iter()
            .enumerate()
            .flat_map(|(i, m)| m.destinations.iter().map(move |&d| (ModuleId(i), d)))
            .collect();
        for (source, dest) in edges {
            if let ModuleKind::Conjunction(con) = &mut modules[dest.0].kind {
                con.add_input(source);
            }
        }

        Ok(Network {
            modules,
            name_map,
            broadcaster,
            button,
        })
    }

    /// Number of modules, including implicit sinks and the button.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the network has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Look up a module by id.
    pub fn module(&self, id: ModuleId) -> &Module {
        &self.modules[id.0]
    }

    /// Look up a module mutably by id.
    pub fn module_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.0]
    }

    /// Find a module id by name.
    pub fn find(&self, name: &str) -> Option<ModuleId> {
        self.name_map.get(name).copied()
    }

    /// Get the name of a module.
    pub fn name(&self, id: ModuleId) -> &str {
        &self.modules[id.0].name
    }

    /// The synthetic button's activation pulse: one low pulse to the
    /// broadcaster.
    pub fn seed_pulse(&self) -> Pulse {
        Pulse {
            source: self.button,
            level: PulseLevel::Low,
            dest: self.broadcaster,
        }
    }

    /// Modules whose destination lists contain `target`.
    pub fn feeders(&self, target: ModuleId) -> Vec<ModuleId> {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, m)| m.destinations.contains(&target))
            .map(|(i, _)| ModuleId(i))
            .collect()
    }

    /// Snapshot all mutable module state.
    pub fn snapshot(&self) -> NetworkState {
        NetworkState(
            self.modules
                .iter()
                .map(|m| match &m.kind {
                    ModuleKind::FlipFlop(ff) => ModuleState::FlipFlop(ff.is_on()),
                    ModuleKind::Conjunction(con) => {
                        ModuleState::Conjunction(con.memory().to_vec())
                    }
                    _ => ModuleState::Stateless,
                })
                .collect(),
        )
    }
}
