//! Directed graph model and cycle detection

use crate::error::InputError;
use std::collections::HashMap;

/// Dense index of an interned node
pub type NodeId = usize;

/// Immutable adjacency-list digraph over string-named nodes
///
/// Node names are interned in first-appearance order. Successor lists keep
/// input order, including repeated edges and self-loops. Nodes that only
/// ever appear as targets are present with an empty successor list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    successors: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Total number of edges, counting repeats
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Name of a node
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this graph.
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    /// Successors of a node in input order
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this graph.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.successors[id]
    }

    /// All node ids
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.names.len()
    }

    /// Render a path of ids as names
    pub fn path_names(&self, path: &[NodeId]) -> Vec<&str> {
        path.iter().map(|&id| self.name(id)).collect()
    }

    /// Whether any directed cycle exists
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// One directed cycle, if any
    ///
    /// Three-color depth-first search launched from every still-white node,
    /// driven by an explicit stack of (node, next successor position). The
    /// returned cycle starts and ends at the node the back-edge points to.
    pub fn find_cycle(&self) -> Option<Vec<NodeId>> {
        let mut color = vec![Color::White; self.len()];
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for root in self.nodes() {
            if color[root] != Color::White {
                continue;
            }
            color[root] = Color::Gray;
            stack.push((root, 0));

            while let Some(top) = stack.last_mut() {
                let node = top.0;
                let Some(&succ) = self.successors[node].get(top.1) else {
                    color[node] = Color::Black;
                    stack.pop();
                    continue;
                };
                top.1 += 1;

                match color[succ] {
                    Color::Gray => {
                        let from = stack.iter().position(|&(n, _)| n == succ).unwrap_or(0);
                        let mut cycle: Vec<NodeId> =
                            stack[from..].iter().map(|&(n, _)| n).collect();
                        cycle.push(succ);
                        return Some(cycle);
                    }
                    Color::White => {
                        color[succ] = Color::Gray;
                        stack.push((succ, 0));
                    }
                    Color::Black => {}
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Incremental constructor for [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a node, returning its id
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.graph.index.get(name) {
            return id;
        }
        let id = self.graph.names.len();
        self.graph.names.push(name.to_string());
        self.graph.index.insert(name.to_string(), id);
        self.graph.successors.push(Vec::new());
        id
    }

    /// Append an edge `from -> to`, interning both ends
    pub fn add_edge(&mut self, from: &str, to: &str) -> &mut Self {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.graph.successors[from].push(to);
        self
    }

    /// Finish building
    pub fn build(self) -> Graph {
        self.graph
    }
}

/// Parse `node: target1 target2 ...` lines into a [`Graph`]
///
/// Blank lines are skipped. A source listed on several lines accumulates
/// its targets in order.
///
/// # Errors
///
/// Returns [`InputError`] for a non-blank line without `:` or with an empty
/// source name.
pub fn load_graph(text: &str) -> Result<Graph, InputError> {
    let mut builder = GraphBuilder::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some((source, targets)) = line.split_once(':') else {
            return Err(InputError::MissingDelimiter {
                line: idx + 1,
                content: line.to_string(),
            });
        };
        let source = source.trim();
        if source.is_empty() {
            return Err(InputError::EmptyNodeName { line: idx + 1 });
        }

        builder.add_node(source);
        for target in targets.split_whitespace() {
            builder.add_edge(source, target);
        }
    }

    let graph = builder.build();
    tracing::debug!(nodes = graph.len(), edges = graph.edge_count(), "graph loaded");
    Ok(graph)
}
