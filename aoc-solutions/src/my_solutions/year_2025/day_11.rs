//! Reactor wiring: counting device paths

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use aoc_toolkit::paths::{RequiredSet, count_qualifying_paths};
use aoc_toolkit::{Graph, load_graph};

const YOU: &str = "you";
const SERVER: &str = "svr";
const OUT: &str = "out";
const REQUIRED: [&str; 2] = ["dac", "fft"];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["2025", "graph"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Graph;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        load_graph(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count_qualifying_paths(shared, YOU, OUT, &RequiredSet::empty())
            .map(|count| count.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let required = RequiredSet::new(REQUIRED).map_err(|e| SolveError::SolveFailed(e.into()))?;
        count_qualifying_paths(shared, SERVER, OUT, &required)
            .map(|count| count.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_1: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const EXAMPLE_2: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn test_part_1_example() {
        let mut graph = Solver::parse(EXAMPLE_1).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut graph).unwrap(), "5");
    }

    #[test]
    fn test_part_2_example() {
        let mut graph = Solver::parse(EXAMPLE_2).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut graph).unwrap(), "2");
        // no `you` node in this input
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut graph).unwrap(), "0");
    }

    #[test]
    fn test_part_2_with_cycle_off_the_answer_paths() {
        let input = format!("{EXAMPLE_2}tty: bbb\n");
        let mut graph = Solver::parse(&input).unwrap();
        assert!(graph.has_cycle());
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut graph).unwrap(), "2");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Solver::parse("svr aaa"), Err(ParseError::InvalidFormat(_))));
    }
}
