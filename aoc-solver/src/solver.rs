//! Parsing and per-part solving traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle text into the data every part works on
///
/// `SharedData` is generic over the input lifetime so a solver may borrow
/// from the text instead of copying it.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Edges;
///
/// impl AocParser for Edges {
///     type SharedData<'a> = Vec<(&'a str, &'a str)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.split_once('-')
///                     .ok_or_else(|| ParseError::InvalidFormat(format!("no '-' in {l:?}")))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Edges::parse("a-b\nb-c").unwrap(), vec![("a", "b"), ("b", "c")]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything parts want to cache for each other
    type SharedData<'a>;

    /// Parse the puzzle text
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One numbered part of a puzzle
///
/// Implement it once per part; `#[derive(AocSolver)]` then generates the
/// [`Solver`] dispatch over `1..=max_parts`.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Edges;
///
/// impl AocParser for Edges {
///     type SharedData<'a> = Vec<(&'a str, &'a str)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().filter_map(|l| l.split_once('-')).collect())
///     }
/// }
///
/// impl PartSolver<1> for Edges {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let mut edges = Edges::parse("a-b\nb-c").unwrap();
/// assert_eq!(<Edges as PartSolver<1>>::solve(&mut edges).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Answer part `N`
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: parser plus a runtime part dispatch
///
/// Usually derived. A hand-written implementation looks like this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
/// use std::collections::BTreeSet;
///
/// struct Edges;
///
/// impl AocParser for Edges {
///     type SharedData<'a> = Vec<(&'a str, &'a str)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().filter_map(|l| l.split_once('-')).collect())
///     }
/// }
///
/// impl Solver for Edges {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             2 => {
///                 let nodes: BTreeSet<&str> = shared.iter().flat_map(|&(a, b)| [a, b]).collect();
///                 Ok(nodes.len().to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut edges = Edges::parse("a-b\nb-c").unwrap();
/// assert_eq!(Edges::solve_part(&mut edges, 2).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part`, which callers keep within `1..=PARTS`
    ///
    /// Parts run in sequence over the same `shared` data, so a later part
    /// may reuse what an earlier one stored there.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point over [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Like `solve_part`, but rejects parts outside `1..=PARTS` with
    /// [`SolveError::PartOutOfRange`]
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
