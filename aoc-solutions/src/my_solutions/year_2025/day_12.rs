//! Christmas tree farm: fitting presents under trees

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use aoc_toolkit::packing::{PackingPuzzle, count_packable, parse_packing_input};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["2025", "packing"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = PackingPuzzle;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_packing_input(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_packable(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
0:
#.
##

1:
#

2x2: 1 1
3x3: 3 0
3x2: 2 0
2x2: 0 3
";

    #[test]
    fn test_example() {
        let mut puzzle = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(puzzle.regions.len(), 4);
        assert_eq!(Solver::solve_part(&mut puzzle, 1).unwrap(), "2");
    }

    #[test]
    fn test_only_one_part() {
        let mut puzzle = Solver::parse(EXAMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut puzzle, 2),
            Err(SolveError::PartNotImplemented(2))
        ));
    }

    #[test]
    fn test_region_count_mismatch_is_parse_error() {
        let input = "0:\n#\n\n2x2: 1 1\n";
        assert!(matches!(Solver::parse(input), Err(ParseError::InvalidFormat(_))));
    }
}
