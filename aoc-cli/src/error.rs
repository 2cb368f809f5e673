//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type; any of these ends the process with exit code 1
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Input file error outside a solver run
    #[error("Input error: {0}")]
    Input(#[from] InputStoreError),

    /// Graph text rejected by the parser
    #[error("Invalid graph: {0}")]
    Graph(#[from] aoc_toolkit::InputError),

    /// Path query that cannot be run
    #[error("Invalid path query: {0}")]
    Path(#[from] aoc_toolkit::PathError),

    /// Logging setup failed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors reading puzzle inputs from disk
#[derive(Error, Debug)]
pub enum InputStoreError {
    /// No file at the expected location
    #[error("no input file at {}", .path.display())]
    Missing { path: PathBuf },

    /// File exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why one part produced no answer
///
/// Input failures are shared by every part of the day, hence the `Arc`.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Input(Arc<InputStoreError>),

    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
