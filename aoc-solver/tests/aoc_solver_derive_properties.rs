//! Property tests for the `AocSolver` derive

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError, Solver};
use proptest::prelude::*;

/// Part 1 sums the out-degrees of a `node: targets` list, part 2 counts sinks
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct DegreeStats;

impl AocParser for DegreeStats {
    type SharedData<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.split_once(':')
                    .map(|(_, to)| to.split_whitespace().count())
                    .ok_or_else(|| ParseError::InvalidFormat("missing ':'".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for DegreeStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for DegreeStats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|&&d| d == 0).count().to_string())
    }
}

fn adjacency(degrees: &[usize]) -> String {
    degrees
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let targets: Vec<String> = (0..d).map(|t| format!("t{t}")).collect();
            format!("n{i}: {}", targets.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn dispatch_matches_part_solver(
        degrees in prop::collection::vec(0usize..5, 1..8),
        part in 1u8..=2,
    ) {
        let input = adjacency(&degrees);
        let mut via_dispatch = DegreeStats::parse(&input).unwrap();
        let mut direct = DegreeStats::parse(&input).unwrap();

        let dispatched = DegreeStats::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <DegreeStats as PartSolver<1>>::solve(&mut direct),
            _ => <DegreeStats as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(dispatched, expected.unwrap());
    }

    #[test]
    fn undeclared_parts_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = DegreeStats::parse("a: b").unwrap();
        match DegreeStats::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn registry_instance_agrees_with_direct_calls(
        degrees in prop::collection::vec(0usize..5, 1..8),
    ) {
        let input = adjacency(&degrees);
        let registry = RegistryBuilder::new()
            .register_solver::<DegreeStats>(2025, 11)
            .unwrap()
            .build();
        let mut solver = registry.create_solver(2025, 11, &input).unwrap();
        prop_assert_eq!(solver.parts(), 2);

        let sum: usize = degrees.iter().sum();
        let sinks = degrees.iter().filter(|&&d| d == 0).count();
        prop_assert_eq!(solver.solve(1).unwrap().answer, sum.to_string());
        prop_assert_eq!(solver.solve(2).unwrap().answer, sinks.to_string());
    }
}
