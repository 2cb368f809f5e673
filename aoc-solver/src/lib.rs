//! Puzzle framework for the Advent of Code runner
//!
//! A puzzle is a type implementing [`AocParser`] (text → shared data) and
//! one [`PartSolver<N>`] per part. `#[derive(AocSolver)]` turns those into a
//! [`Solver`] with a runtime part dispatch, and `#[derive(AutoRegisterSolver)]`
//! submits it as a [`SolverPlugin`] so a [`RegistryBuilder`] can discover it.
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! /// Counts edges and distinct targets of an `a: b c` adjacency list
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Adjacency;
//!
//! impl AocParser for Adjacency {
//!     type SharedData<'a> = Vec<(&'a str, Vec<&'a str>)>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 let (from, to) = line
//!                     .split_once(':')
//!                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
//!                 Ok((from, to.split_whitespace().collect()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Adjacency {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().map(|(_, to)| to.len()).sum::<usize>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Adjacency {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let mut targets: Vec<&str> = shared.iter().flat_map(|(_, to)| to.clone()).collect();
//!         targets.sort_unstable();
//!         targets.dedup();
//!         Ok(targets.len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Adjacency>(2025, 11)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2025, 11, "a: b c\nb: c").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "2");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// the derive macros expand to `::aoc_solver::inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
