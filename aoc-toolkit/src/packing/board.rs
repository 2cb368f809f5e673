//! Backtracking placement of shape variants onto a bounded board

use super::shape::Shape;

/// One variant as cell offsets from its first occupied cell (row-major)
#[derive(Debug, Clone)]
struct Placement {
    offsets: Vec<(isize, isize)>,
}

impl Placement {
    fn from_shape(shape: &Shape) -> Option<Self> {
        let mut cells = shape.occupied();
        let (ar, ac) = cells.next()?;
        let offsets = std::iter::once((ar, ac))
            .chain(cells)
            .map(|(r, c)| (r as isize - ar as isize, c as isize - ac as isize))
            .collect();
        Some(Self { offsets })
    }
}

/// Board cells and the pieces still to place
///
/// A cell holds at most one shape id. Every `place` is paired with a
/// `remove` before the search returns, so the board is empty again after
/// [`pack_region`] finishes, whatever the outcome.
struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
    empty: usize,
}

impl Board {
    fn new(width: usize, height: usize, area: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; area],
            empty: area,
        }
    }

    fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    /// Board indices covered by `placement` anchored at `anchor`, if all fit
    fn covered(&self, placement: &Placement, anchor: usize) -> Option<Vec<usize>> {
        let (row, col) = ((anchor / self.width) as isize, (anchor % self.width) as isize);
        placement
            .offsets
            .iter()
            .map(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                let in_bounds =
                    r >= 0 && c >= 0 && (r as usize) < self.height && (c as usize) < self.width;
                let index = in_bounds.then(|| r as usize * self.width + c as usize)?;
                self.cells[index].is_none().then_some(index)
            })
            .collect()
    }

    fn place(&mut self, covered: &[usize], id: usize) {
        for &i in covered {
            self.cells[i] = Some(id);
        }
        self.empty -= covered.len();
    }

    fn remove(&mut self, covered: &[usize]) {
        for &i in covered {
            self.cells[i] = None;
        }
        self.empty += covered.len();
    }
}

struct Search {
    board: Board,
    placements: Vec<Vec<Placement>>,
    need: Vec<usize>,
    piece_cells: Vec<usize>,
    remaining_cells: usize,
}

impl Search {
    fn solve(&mut self) -> bool {
        let Some(anchor) = self.board.first_empty() else {
            return true;
        };
        if self.remaining_cells < self.board.empty {
            return false;
        }

        for id in 0..self.need.len() {
            if self.need[id] == 0 {
                continue;
            }
            for v in 0..self.placements[id].len() {
                let Some(covered) = self.board.covered(&self.placements[id][v], anchor) else {
                    continue;
                };

                self.board.place(&covered, id);
                self.need[id] -= 1;
                self.remaining_cells -= self.piece_cells[id];

                let solved = self.solve();

                self.remaining_cells += self.piece_cells[id];
                self.need[id] += 1;
                self.board.remove(&covered);

                if solved {
                    return true;
                }
            }
        }
        false
    }
}

/// Whether the pieces in `need` can cover every cell of a `width × height` board
///
/// `variants[id]` lists the placeable orientations of shape `id`;
/// `need[id]` is how many copies of it are available. The search fills the
/// first empty cell in row-major order, trying shape ids in ascending order
/// and each of their variants anchored by the variant's first occupied cell.
/// Success means no empty cell remains; spare pieces may stay unused.
/// A board whose cell count does not fit in `usize` is never packed.
///
/// # Panics
///
/// Panics if `need` is longer than `variants`.
#[tracing::instrument(
    skip(variants, need),
    fields(pieces = need.iter().fold(0usize, |total, n| total.saturating_add(*n)))
)]
pub fn pack_region(width: usize, height: usize, variants: &[Vec<Shape>], need: &[usize]) -> bool {
    assert!(need.len() <= variants.len(), "need lists a shape without variants");

    let placements: Vec<Vec<Placement>> = variants
        .iter()
        .map(|vs| vs.iter().filter_map(Placement::from_shape).collect())
        .collect();
    let piece_cells: Vec<usize> = variants
        .iter()
        .map(|vs| vs.first().map_or(0, Shape::cell_count))
        .collect();
    // saturated totals still bound the area from above
    let remaining_cells = need
        .iter()
        .zip(&piece_cells)
        .fold(0usize, |total, (n, c)| total.saturating_add(n.saturating_mul(*c)));

    let Some(area) = width.checked_mul(height) else {
        tracing::debug!(width, height, "board area overflows");
        return false;
    };
    if remaining_cells < area {
        tracing::debug!(remaining_cells, area, "not enough piece cells to cover board");
        return false;
    }

    let mut search = Search {
        board: Board::new(width, height, area),
        placements,
        need: need.to_vec(),
        piece_cells,
        remaining_cells,
    };
    let solved = search.solve();
    debug_assert_eq!(search.board.empty, area);
    solved
}
