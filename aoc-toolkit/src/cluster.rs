//! Nearest-pair clustering over integer points
//!
//! Every unordered pair is ranked by exact squared distance, then pairs are
//! merged into a [`DisjointSet`] nearest first. Two stopping rules are
//! offered: a fixed pair budget ([`cluster_nearest_pairs`]) or the first
//! merge that leaves one component ([`collapse_to_single`]).

use crate::dsu::DisjointSet;
use crate::error::InputError;
use itertools::Itertools;

/// Point with `D` integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<const D: usize>(pub [i64; D]);

impl<const D: usize> Point<D> {
    /// Exact squared Euclidean distance
    pub fn squared_distance(&self, other: &Self) -> u128 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = u128::from(a.abs_diff(*b));
                d * d
            })
            .sum()
    }

    /// First coordinate
    pub fn x(&self) -> i64 {
        self.0[0]
    }
}

/// One unordered pair with its squared distance, `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PairDistance {
    /// Squared distance; compared first
    pub distance: u128,
    /// Smaller point index
    pub a: usize,
    /// Larger point index
    pub b: usize,
}

/// All pairs sorted by (distance, a, b)
pub fn sorted_pairs<const D: usize>(points: &[Point<D>]) -> Vec<PairDistance> {
    let mut pairs: Vec<PairDistance> = (0..points.len())
        .tuple_combinations()
        .map(|(a, b)| PairDistance {
            distance: points[a].squared_distance(&points[b]),
            a,
            b,
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Union the `k` nearest pairs and return component sizes, largest first
///
/// `k` is capped at the number of pairs. Pairs already in one component
/// still use up the budget.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn cluster_nearest_pairs<const D: usize>(points: &[Point<D>], k: usize) -> Vec<usize> {
    let pairs = sorted_pairs(points);
    let budget = k.min(pairs.len());
    if budget < k {
        tracing::debug!(budget, "pair budget capped to available pairs");
    }

    let mut dsu = DisjointSet::new(points.len());
    for pair in &pairs[..budget] {
        dsu.union(pair.a, pair.b);
    }
    dsu.component_sizes()
}

/// Product of the three largest sizes, missing ones counting as 1
pub fn top_three_product(sizes: &[usize]) -> u128 {
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
        .into_iter()
        .chain(std::iter::repeat(1))
        .take(3)
        .map(|s| s as u128)
        .product()
}

/// The pair whose merge first joins every point into one component
///
/// Returns `None` when there is nothing to join (fewer than two points).
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn collapse_to_single<const D: usize>(points: &[Point<D>]) -> Option<(usize, usize)> {
    let mut dsu = DisjointSet::new(points.len());
    let collapse = sorted_pairs(points)
        .into_iter()
        .find(|pair| dsu.union(pair.a, pair.b) && dsu.component_count() == 1)
        .map(|pair| (pair.a, pair.b));
    if collapse.is_none() {
        tracing::debug!("point set never collapses");
    }
    collapse
}

/// Parse one point per line, `D` comma-separated integers each
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns [`InputError`] for a wrong coordinate count or a non-integer
/// coordinate.
pub fn parse_points<const D: usize>(text: &str) -> Result<Vec<Point<D>>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(idx, raw)| {
            let fields: Vec<&str> = raw.trim().split(',').map(str::trim).collect();
            if fields.len() != D {
                return Err(InputError::CoordinateCount {
                    line: idx + 1,
                    expected: D,
                    found: fields.len(),
                });
            }
            let mut coords = [0i64; D];
            for (slot, field) in coords.iter_mut().zip(fields) {
                *slot = field.parse().map_err(|_| InputError::InvalidCoordinate {
                    line: idx + 1,
                    value: field.to_string(),
                })?;
            }
            Ok(Point(coords))
        })
        .collect()
}
