//! Counting paths that visit a required node set
//!
//! Two strategies answer the same question, "how many start → end paths
//! visit every required node":
//!
//! - [`DagPathCounter`]: memoized DP over (node, visited-required mask)
//!   states. Polynomial in `nodes × 2^required`, valid only without cycles.
//! - [`enumerate_simple_paths`]: exhaustive walk over simple paths, valid on
//!   any graph, exponential in the worst case.
//!
//! [`count_qualifying_paths`] and [`analyze_paths`] pick one with a single
//! [`Graph::has_cycle`] check per query. On an acyclic graph both agree
//! exactly, since every path of a DAG is simple.

mod dag;
mod safe;

pub use dag::DagPathCounter;
pub use safe::{Enumeration, enumerate_simple_paths};

use crate::error::PathError;
use crate::graph::{Graph, NodeId};
use std::fmt;

/// Maximum number of required nodes a query can carry
pub const MAX_REQUIRED: usize = 64;

/// Sorted, deduplicated set of node names a path must visit
///
/// The sorted order fixes the bit assigned to each name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredSet {
    names: Vec<String>,
}

impl RequiredSet {
    /// Build a set from names
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooManyRequired`] for more than [`MAX_REQUIRED`]
    /// distinct names.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Result<Self, PathError> {
        let mut names: Vec<String> = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        names.sort();
        names.dedup();
        if names.len() > MAX_REQUIRED {
            return Err(PathError::TooManyRequired(names.len()));
        }
        Ok(Self { names })
    }

    /// The empty set; every path qualifies
    pub fn empty() -> Self {
        Self::default()
    }

    /// Names in bit order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of required names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no node is required
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Mask with every required bit set
    pub fn full_mask(&self) -> u64 {
        match self.names.len() {
            MAX_REQUIRED => u64::MAX,
            n => (1u64 << n) - 1,
        }
    }

    /// Per-node bit table for `graph`
    ///
    /// Names absent from the graph keep their bit in [`full_mask`](Self::full_mask)
    /// but no node carries it, so no path can qualify.
    pub(crate) fn node_bits(&self, graph: &Graph) -> Vec<u64> {
        let mut bits = vec![0u64; graph.len()];
        for (bit, name) in self.names.iter().enumerate() {
            if let Some(id) = graph.node(name) {
                bits[id] = 1 << bit;
            }
        }
        bits
    }
}

/// Which strategy answered a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Acyclic graph, memoized DP over (node, mask)
    Memoized,
    /// Cyclic graph, exhaustive simple-path enumeration
    Exhaustive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Memoized => write!(f, "memoized DP (acyclic graph)"),
            Strategy::Exhaustive => write!(f, "exhaustive simple-path enumeration (cyclic graph)"),
        }
    }
}

/// Parameters of a path analysis
#[derive(Debug, Clone)]
pub struct PathQuery<'a> {
    /// Start node name
    pub start: &'a str,
    /// End node name
    pub end: &'a str,
    /// Nodes every qualifying path must visit
    pub required: RequiredSet,
    /// Maximum number of qualifying paths to keep for display
    pub retain_limit: usize,
}

impl<'a> PathQuery<'a> {
    /// Query counting all paths from `start` to `end`, retaining none
    pub fn new(start: &'a str, end: &'a str) -> Self {
        Self {
            start,
            end,
            required: RequiredSet::empty(),
            retain_limit: 0,
        }
    }

    /// Set the required nodes
    pub fn required(mut self, required: RequiredSet) -> Self {
        self.required = required;
        self
    }

    /// Set how many qualifying paths to retain
    pub fn retain(mut self, limit: usize) -> Self {
        self.retain_limit = limit;
        self
    }
}

/// Outcome of [`analyze_paths`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    /// Strategy chosen by the cycle check
    pub strategy: Strategy,
    /// Exact number of qualifying paths
    pub qualifying: u128,
    /// Total simple start → end paths; only known after exhaustive search
    pub total_simple: Option<u128>,
    /// Up to `retain_limit` qualifying paths
    pub retained: Vec<Vec<NodeId>>,
}

/// Count start → end paths that visit every required node
///
/// Missing start or end nodes give 0.
///
/// # Errors
///
/// [`PathError::CountOverflow`] when an acyclic graph has more qualifying
/// paths than `u128` holds.
#[tracing::instrument(skip(graph, required), fields(required = required.len()))]
pub fn count_qualifying_paths(
    graph: &Graph,
    start: &str,
    end: &str,
    required: &RequiredSet,
) -> Result<u128, PathError> {
    if graph.has_cycle() {
        tracing::debug!("graph has a cycle, enumerating simple paths");
        Ok(enumerate_simple_paths(graph, start, end, required, 0).qualifying)
    } else {
        tracing::debug!("graph is acyclic, using memoized DP");
        DagPathCounter::new(graph, start, end, required).count()
    }
}

/// Count qualifying paths and collect a capped listing of them
///
/// On a cyclic graph the listing comes from the same enumeration that
/// counts, which also yields the total number of simple paths. On an
/// acyclic graph the count comes from the DP and the listing from a descent
/// that only follows states with a non-zero count.
///
/// # Errors
///
/// [`PathError::CountOverflow`] as for [`count_qualifying_paths`].
#[tracing::instrument(skip_all, fields(start = query.start, end = query.end))]
pub fn analyze_paths(graph: &Graph, query: &PathQuery<'_>) -> Result<PathReport, PathError> {
    if graph.has_cycle() {
        let found = enumerate_simple_paths(
            graph,
            query.start,
            query.end,
            &query.required,
            query.retain_limit,
        );
        tracing::info!(
            total = %found.total,
            qualifying = %found.qualifying,
            "exhaustive enumeration finished"
        );
        Ok(PathReport {
            strategy: Strategy::Exhaustive,
            qualifying: found.qualifying,
            total_simple: Some(found.total),
            retained: found.retained,
        })
    } else {
        let mut counter = DagPathCounter::new(graph, query.start, query.end, &query.required);
        let qualifying = counter.count()?;
        let retained = counter.sample_paths(query.retain_limit);
        tracing::info!(
            qualifying = %qualifying,
            states = counter.states_computed(),
            "memoized count finished"
        );
        Ok(PathReport {
            strategy: Strategy::Memoized,
            qualifying,
            total_simple: None,
            retained,
        })
    }
}
