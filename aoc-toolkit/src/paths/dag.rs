//! Memoized path counting on acyclic graphs

use super::RequiredSet;
use crate::error::PathError;
use crate::graph::{Graph, NodeId};
use crate::memo::{Backend, DpCache, DpProblem, HashMapBackend, Vec2DBackend};

/// Largest `nodes × 2^required` state space stored densely
const DENSE_STATE_LIMIT: usize = 1 << 24;

type State = (NodeId, u64);

/// Path count of a state; `None` once it no longer fits in `u128`
type Count = Option<u128>;

/// Path-count recurrence over (node, visited-required mask)
struct PathProblem<'g> {
    graph: &'g Graph,
    end: NodeId,
    bits: Vec<u64>,
    full: u64,
}

impl DpProblem<State, Count> for PathProblem<'_> {
    fn deps(&self, &(node, mask): &State) -> Vec<State> {
        if node == self.end {
            return Vec::new();
        }
        self.graph
            .successors(node)
            .iter()
            .map(|&next| (next, mask | self.bits[next]))
            .collect()
    }

    fn compute(&self, &(node, mask): &State, deps: Vec<Count>) -> Count {
        if node == self.end {
            Some(u128::from(mask == self.full))
        } else {
            deps.into_iter().try_fold(0u128, |total, count| total.checked_add(count?))
        }
    }
}

/// Memo storage chosen by state-space size
enum StateTable {
    Dense(Vec2DBackend<Count>),
    Sparse(HashMapBackend<State, Count>),
}

impl StateTable {
    fn for_space(nodes: usize, required: usize) -> Self {
        let dense = u32::try_from(required)
            .ok()
            .and_then(|r| 1usize.checked_shl(r))
            .filter(|&cols| nodes.saturating_mul(cols) <= DENSE_STATE_LIMIT);
        match dense {
            Some(cols) => {
                tracing::debug!(nodes, cols, "dense memo table");
                StateTable::Dense(Vec2DBackend::new(nodes, cols))
            }
            None => {
                tracing::debug!(nodes, required, "sparse memo table");
                StateTable::Sparse(HashMapBackend::new())
            }
        }
    }
}

impl Backend<State, Count> for StateTable {
    fn get(&self, index: &State) -> Option<&Count> {
        match self {
            StateTable::Dense(table) => table.get(index),
            StateTable::Sparse(table) => table.get(index),
        }
    }

    fn get_or_insert(&mut self, index: State, f: impl FnOnce() -> Count) -> &Count {
        match self {
            StateTable::Dense(table) => table.get_or_insert(index, f),
            StateTable::Sparse(table) => table.get_or_insert(index, f),
        }
    }

    fn len(&self) -> usize {
        match self {
            StateTable::Dense(table) => table.len(),
            StateTable::Sparse(table) => table.len(),
        }
    }
}

/// Qualifying-path counter for acyclic graphs
///
/// Every distinct (node, mask) state is evaluated once; the memo lives as
/// long as the counter. The start node's own required bit is folded into the
/// initial mask. The end node is terminal: paths never continue through it.
///
/// Running this on a cyclic graph does not terminate; check
/// [`Graph::has_cycle`] first.
pub struct DagPathCounter<'g> {
    cache: DpCache<State, Count, StateTable, PathProblem<'g>>,
    start: Option<State>,
}

impl<'g> DagPathCounter<'g> {
    /// Prepare a query; a missing start or end node makes every count 0
    pub fn new(graph: &'g Graph, start: &str, end: &str, required: &RequiredSet) -> Self {
        let bits = required.node_bits(graph);
        let full = required.full_mask();
        let endpoints = graph.node(start).zip(graph.node(end));
        let start = endpoints.map(|(s, _)| (s, bits[s]));
        let end = endpoints.map_or(usize::MAX, |(_, e)| e);

        let problem = PathProblem {
            graph,
            end,
            bits,
            full,
        };
        let table = StateTable::for_space(graph.len(), required.len());
        Self {
            cache: DpCache::new(table, problem),
            start,
        }
    }

    /// Number of qualifying start → end paths
    ///
    /// # Errors
    ///
    /// [`PathError::CountOverflow`] when the count exceeds `u128::MAX`.
    pub fn count(&mut self) -> Result<u128, PathError> {
        match self.start {
            Some(state) => self.cache.get(&state).ok_or(PathError::CountOverflow),
            None => Ok(0),
        }
    }

    /// Number of distinct states evaluated so far
    pub fn states_computed(&self) -> usize {
        self.cache.computed()
    }

    /// Up to `limit` qualifying paths, in successor order
    ///
    /// Only states with a non-zero count are entered, so every branch taken
    /// ends in a qualifying path. Overflowed counts are non-zero.
    pub fn sample_paths(&mut self, limit: usize) -> Vec<Vec<NodeId>> {
        let mut found = Vec::new();
        let Some(start) = self.start else {
            return found;
        };
        if limit == 0 || self.cache.get(&start) == Some(0) {
            return found;
        }

        let end = self.cache.problem().end;
        let mut path = vec![start.0];
        let mut stack: Vec<(State, usize)> = vec![(start, 0)];

        while let Some(&((node, mask), next)) = stack.last() {
            if node == end {
                found.push(path.clone());
                if found.len() == limit {
                    break;
                }
                stack.pop();
                path.pop();
                continue;
            }

            let deps = self.cache.problem().deps(&(node, mask));
            let live = deps
                .iter()
                .enumerate()
                .skip(next)
                .find_map(|(i, state)| {
                    (self.cache.get(state) != Some(0)).then_some((i, *state))
                });

            match live {
                Some((i, state)) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 = i + 1;
                    }
                    stack.push((state, 0));
                    path.push(state.0);
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }
        found
    }
}
