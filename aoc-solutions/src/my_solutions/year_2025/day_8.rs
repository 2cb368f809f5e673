//! Playground junction boxes: nearest-pair clustering in 3D

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use aoc_toolkit::cluster::{self, Point};

/// Number of closest pairs wired in part 1
pub const PAIR_BUDGET: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["2025", "clustering"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    boxes: Vec<Point<3>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = cluster::parse_points::<3>(input)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if boxes.is_empty() {
            return Err(ParseError::MissingData("no junction boxes".into()));
        }
        Ok(SharedData { boxes })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_circuits_product(&shared.boxes, PAIR_BUDGET).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = cluster::collapse_to_single(&shared.boxes).ok_or_else(|| {
            SolveError::SolveFailed(anyhow!("junction boxes never form one circuit").into())
        })?;
        let product = i128::from(shared.boxes[a].x()) * i128::from(shared.boxes[b].x());
        Ok(product.to_string())
    }
}

/// Product of the three largest circuits after wiring `budget` closest pairs
fn largest_circuits_product(boxes: &[Point<3>], budget: usize) -> u128 {
    let sizes = cluster::cluster_nearest_pairs(boxes, budget);
    tracing::debug!(circuits = sizes.len(), "circuits after wiring");
    cluster::top_three_product(&sizes)
}
