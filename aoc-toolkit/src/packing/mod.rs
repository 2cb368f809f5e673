//! Shape variants and region packing
//!
//! Puzzle text is a list of shape blocks followed by region lines:
//!
//! ```text
//! 0:
//! #.
//! ##
//!
//! 1:
//! #
//!
//! 2x2: 1 1
//! 3x3: 3 0
//! ```
//!
//! Each region asks whether its board can be covered completely using at
//! most the listed number of copies of each shape, any shape rotated or
//! mirrored. [`count_packable`] answers that for every region.

mod board;
mod shape;

pub use board::pack_region;
pub use shape::Shape;

use crate::error::InputError;
use std::iter::Peekable;

/// A board and the available copies of each shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    /// `need[id]` copies of shape `id`
    pub need: Vec<usize>,
}

/// Parsed shapes (index = id) and regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingPuzzle {
    pub shapes: Vec<Shape>,
    pub regions: Vec<Region>,
}

impl PackingPuzzle {
    /// Variant lists for every shape, indexed by shape id
    pub fn variants(&self) -> Vec<Vec<Shape>> {
        self.shapes.iter().map(Shape::variants).collect()
    }
}

fn shape_header(line: &str) -> Option<&str> {
    line.strip_suffix(':')
}

/// Parse shape blocks and region lines
///
/// Blank lines separate blocks and are otherwise ignored. A shape block
/// ends at a blank line or at the next line containing `:`.
///
/// # Errors
///
/// Returns [`InputError`] for a malformed header, out-of-order ids, an
/// empty or ragged shape, a cell other than `#`/`.`, a malformed region
/// line (including one whose cell count overflows `usize`), or a region
/// whose count list does not match the number of shapes.
pub fn parse_packing_input(text: &str) -> Result<PackingPuzzle, InputError> {
    let mut shapes = Vec::new();
    let mut regions = Vec::new();
    let mut lines = text.lines().enumerate().peekable();

    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = shape_header(line) {
            let id: usize = header.trim().parse().map_err(|_| InputError::ShapeHeader {
                line: idx + 1,
                header: line.to_string(),
            })?;
            if id != shapes.len() || !regions.is_empty() {
                return Err(InputError::ShapeId {
                    line: idx + 1,
                    expected: shapes.len(),
                    found: id,
                });
            }
            shapes.push(parse_shape_rows(id, &mut lines)?);
        } else if line.contains(':') {
            regions.push(parse_region(idx + 1, line, shapes.len())?);
        } else {
            return Err(InputError::ShapeHeader {
                line: idx + 1,
                header: line.to_string(),
            });
        }
    }

    tracing::debug!(shapes = shapes.len(), regions = regions.len(), "parsed packing input");
    Ok(PackingPuzzle { shapes, regions })
}

fn parse_shape_rows<'a, I>(id: usize, lines: &mut Peekable<I>) -> Result<Shape, InputError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut rows: Vec<&str> = Vec::new();
    while let Some(&(idx, raw)) = lines.peek() {
        let row = raw.trim();
        if row.is_empty() || row.contains(':') {
            break;
        }
        if let Some(found) = row.chars().find(|c| !matches!(c, '#' | '.')) {
            return Err(InputError::ShapeCell {
                line: idx + 1,
                found,
            });
        }
        rows.push(row);
        lines.next();
    }

    if rows.is_empty() {
        return Err(InputError::EmptyShape { id });
    }
    Shape::from_rows(&rows).ok_or(InputError::RaggedShape { id })
}

fn parse_region(line: usize, content: &str, shape_count: usize) -> Result<Region, InputError> {
    let malformed = || InputError::Region {
        line,
        content: content.to_string(),
    };

    let (dims, counts) = content.split_once(':').ok_or_else(malformed)?;
    let (width, height) = dims.trim().split_once('x').ok_or_else(malformed)?;
    let width: usize = width.parse().map_err(|_| malformed())?;
    let height: usize = height.parse().map_err(|_| malformed())?;
    if width.checked_mul(height).is_none() {
        return Err(malformed());
    }
    let need = counts
        .split_whitespace()
        .map(|c| c.parse().map_err(|_| malformed()))
        .collect::<Result<Vec<usize>, _>>()?;

    if need.len() != shape_count {
        return Err(InputError::RegionCountLength {
            line,
            expected: shape_count,
            found: need.len(),
        });
    }
    Ok(Region {
        width,
        height,
        need,
    })
}

/// Number of regions whose board can be fully covered
#[tracing::instrument(skip_all, fields(regions = puzzle.regions.len()))]
pub fn count_packable(puzzle: &PackingPuzzle) -> usize {
    let variants = puzzle.variants();
    puzzle
        .regions
        .iter()
        .enumerate()
        .filter(|(i, region)| {
            let packed = pack_region(region.width, region.height, &variants, &region.need);
            tracing::debug!(region = i, packed, "region searched");
            packed
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "0:
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
    fn test_parse_example() {
        let puzzle = parse_packing_input(EXAMPLE).unwrap();
        assert_eq!(puzzle.shapes.len(), 2);
        assert_eq!(puzzle.shapes[0].cell_count(), 3);
        assert_eq!(puzzle.regions.len(), 4);
        assert_eq!(
            puzzle.regions[1],
            Region {
                width: 3,
                height: 3,
                need: vec![3, 0]
            }
        );
    }

    #[test]
    fn test_count_packable_example() {
        // 3x3 cannot be tiled by L trominoes; three monominoes leave a hole
        let puzzle = parse_packing_input(EXAMPLE).unwrap();
        assert_eq!(count_packable(&puzzle), 2);
    }

    #[test]
    fn test_shape_ended_by_region_line() {
        let puzzle = parse_packing_input("0:\n##\n1x2: 1").unwrap();
        assert_eq!(puzzle.shapes[0].width(), 2);
        assert_eq!(puzzle.regions[0].need, vec![1]);
        assert_eq!(count_packable(&puzzle), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_packing_input("a:\n#").unwrap_err(),
            InputError::ShapeHeader {
                line: 1,
                header: "a:".to_string()
            }
        );
        assert_eq!(
            parse_packing_input("1:\n#").unwrap_err(),
            InputError::ShapeId {
                line: 1,
                expected: 0,
                found: 1
            }
        );
        assert_eq!(
            parse_packing_input("0:\n\n1:\n#").unwrap_err(),
            InputError::EmptyShape { id: 0 }
        );
        assert_eq!(
            parse_packing_input("0:\n#x").unwrap_err(),
            InputError::ShapeCell { line: 2, found: 'x' }
        );
        assert_eq!(
            parse_packing_input("0:\n##\n#").unwrap_err(),
            InputError::RaggedShape { id: 0 }
        );
    }

    #[test]
    fn test_region_errors() {
        assert_eq!(
            parse_packing_input("0:\n#\n\n4by4: 1").unwrap_err(),
            InputError::Region {
                line: 4,
                content: "4by4: 1".to_string()
            }
        );
        assert_eq!(
            parse_packing_input("0:\n#\n\n4294967296x4294967296: 1").unwrap_err(),
            InputError::Region {
                line: 4,
                content: "4294967296x4294967296: 1".to_string()
            }
        );
        assert_eq!(
            parse_packing_input("0:\n#\n\n4x4: 1 2").unwrap_err(),
            InputError::RegionCountLength {
                line: 4,
                expected: 1,
                found: 2
            }
        );
    }
}
