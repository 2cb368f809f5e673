//! Exhaustive simple-path enumeration, safe on cyclic graphs

use super::RequiredSet;
use crate::graph::{Graph, NodeId};

/// Result of [`enumerate_simple_paths`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Every simple start → end path
    pub total: u128,
    /// Paths among `total` that visit all required nodes
    pub qualifying: u128,
    /// The first qualifying paths found, at most the retain limit
    pub retained: Vec<Vec<NodeId>>,
}

/// Walk every simple path from `start` to `end`
///
/// No node repeats within a path, so cycles cannot trap the search. A path
/// stops at `end` even if `end` has successors. The counts are exact
/// regardless of `retain_limit`, which only caps the stored listing.
/// Missing start or end nodes give an empty result.
pub fn enumerate_simple_paths(
    graph: &Graph,
    start: &str,
    end: &str,
    required: &RequiredSet,
    retain_limit: usize,
) -> Enumeration {
    let mut result = Enumeration::default();
    let (Some(start), Some(end)) = (graph.node(start), graph.node(end)) else {
        return result;
    };

    let bits = required.node_bits(graph);
    let full = required.full_mask();

    let mut on_path = vec![false; graph.len()];
    let mut path = vec![start];
    // (node, next successor position, required mask up to and including node)
    let mut stack: Vec<(NodeId, usize, u64)> = vec![(start, 0, bits[start])];
    on_path[start] = true;

    while let Some(top) = stack.last_mut() {
        let (node, next, mask) = *top;

        if node == end {
            result.total += 1;
            if mask == full {
                result.qualifying += 1;
                if result.retained.len() < retain_limit {
                    result.retained.push(path.clone());
                }
            }
        } else if let Some(&succ) = graph.successors(node).get(next) {
            top.1 += 1;
            if !on_path[succ] {
                on_path[succ] = true;
                path.push(succ);
                stack.push((succ, 0, mask | bits[succ]));
            }
            continue;
        }

        on_path[node] = false;
        path.pop();
        stack.pop();
    }

    tracing::trace!(total = %result.total, qualifying = %result.qualifying, "enumeration done");
    result
}
