//! Parts that hand results to each other through the shared data

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug)]
struct Degrees {
    out_degree: Vec<usize>,
    busiest: Option<usize>,
}

/// Part 1 finds the busiest node, part 2 reuses it
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct BusiestNode;

impl AocParser for BusiestNode {
    type SharedData<'a> = Degrees;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let out_degree = input
            .lines()
            .map(|line| {
                line.split_once(':')
                    .map(|(_, targets)| targets.split_whitespace().count())
                    .ok_or_else(|| ParseError::InvalidFormat(format!("no ':' in {line:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Degrees {
            out_degree,
            busiest: None,
        })
    }
}

impl PartSolver<1> for BusiestNode {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let busiest = shared.out_degree.iter().copied().max().unwrap_or(0);
        shared.busiest = Some(busiest);
        Ok(busiest.to_string())
    }
}

impl PartSolver<2> for BusiestNode {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let busiest = shared
            .busiest
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
        let ties = shared.out_degree.iter().filter(|&&d| d == busiest).count();
        Ok(ties.to_string())
    }
}

const INPUT: &str = "a: b c\nb: c d\nc: d\nd:";

#[test]
fn test_parts_share_state() {
    let mut shared = BusiestNode::parse(INPUT).unwrap();
    assert_eq!(BusiestNode::solve_part(&mut shared, 1).unwrap(), "2");
    assert_eq!(shared.busiest, Some(2));
    assert_eq!(BusiestNode::solve_part(&mut shared, 2).unwrap(), "2");
}

#[test]
fn test_part_two_alone_fails() {
    let mut shared = BusiestNode::parse(INPUT).unwrap();
    assert!(matches!(
        BusiestNode::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_parse_error_propagates() {
    assert!(matches!(
        BusiestNode::parse("a b"),
        Err(ParseError::InvalidFormat(_))
    ));
}

#[test]
fn test_generated_part_count() {
    assert_eq!(BusiestNode::PARTS, 2);
}
