//! Combinatorial graph & packing toolkit
//!
//! The search engines shared by the graph, clustering and packing puzzles:
//!
//! - [`DisjointSet`]: union-find with path compression and union by size
//! - [`Graph`]: interned adjacency-list digraph with cycle detection
//! - [`paths`]: qualifying-path counting with two interchangeable strategies,
//!   memoized DP for acyclic graphs and simple-path enumeration otherwise
//! - [`cluster`]: nearest-pair merging over integer point sets
//! - [`packing`]: symmetric shape variants and backtracking region packing
//!
//! # Example
//!
//! ```
//! use aoc_toolkit::{load_graph, paths::{count_qualifying_paths, RequiredSet}};
//!
//! let graph = load_graph("a: b c\nb: d\nc: d\nd:").unwrap();
//! let required = RequiredSet::new(["b"]).unwrap();
//! assert_eq!(count_qualifying_paths(&graph, "a", "d", &required), Ok(1));
//! ```
//!
//! Everything here is single-threaded and owns its working state for the
//! duration of one call; memo tables and boards are dropped on return.

pub mod cluster;
mod dsu;
mod error;
mod graph;
pub mod memo;
pub mod packing;
pub mod paths;

pub use dsu::DisjointSet;
pub use error::{InputError, PathError};
pub use graph::{Graph, GraphBuilder, NodeId, load_graph};
