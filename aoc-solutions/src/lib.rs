//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the solver framework; the algorithms live in
//! `aoc-toolkit`.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
