//! Polyomino-like shapes and their symmetry variants

use std::fmt;

/// Rectangular grid of occupied (`#`) and empty (`.`) cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from row-major cells
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), width * height, "cell count must match dimensions");
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a shape from equal-length rows of `#`/`.`
    ///
    /// Returns `None` if rows differ in width or contain other characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                match c {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    _ => return None,
                }
            }
        }
        Some(Self::new(width, rows.len(), cells))
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(row, col)` is occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Occupied `(row, col)` positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// Copy with uniformly empty border rows and columns removed
    ///
    /// A shape with no occupied cell normalizes to the 0×0 shape.
    pub fn normalize(&self) -> Self {
        let rows = || self.occupied().map(|(r, _)| r);
        let cols = || self.occupied().map(|(_, c)| c);
        let (Some(top), Some(bottom), Some(left), Some(right)) =
            (rows().min(), rows().max(), cols().min(), cols().max())
        else {
            return Self::new(0, 0, Vec::new());
        };

        let width = right - left + 1;
        let height = bottom - top + 1;
        let cells = (top..=bottom)
            .flat_map(|r| (left..=right).map(move |c| (r, c)))
            .map(|(r, c)| self.is_occupied(r, c))
            .collect();
        Self::new(width, height, cells)
    }

    /// Rotate 90° clockwise
    pub fn rotate(&self) -> Self {
        let width = self.height;
        let height = self.width;
        let cells = (0..height)
            .flat_map(|r| (0..width).map(move |c| (r, c)))
            .map(|(r, c)| self.is_occupied(self.height - 1 - c, r))
            .collect();
        Self::new(width, height, cells)
    }

    /// Mirror left to right
    pub fn flip(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .map(|(r, c)| self.is_occupied(r, self.width - 1 - c))
            .collect();
        Self::new(self.width, self.height, cells)
    }

    /// Distinct shapes reachable by rotation and reflection
    ///
    /// Generated from the normalized shape as identity, flip, then rotate and
    /// repeat; duplicates keep their first position. At most 8 variants.
    pub fn variants(&self) -> Vec<Shape> {
        let mut variants: Vec<Shape> = Vec::with_capacity(8);
        let mut current = self.normalize();
        for _ in 0..4 {
            for candidate in [current.clone(), current.flip()] {
                if !variants.contains(&candidate) {
                    variants.push(candidate);
                }
            }
            current = current.rotate();
        }
        variants
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.width {
                f.write_str(if self.is_occupied(r, c) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: &[&str]) -> Shape {
        Shape::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert_eq!(Shape::from_rows(&["##", "#"]), None);
        assert_eq!(Shape::from_rows(&["#x"]), None);
    }

    #[test]
    fn test_normalize_trims_borders() {
        let padded = shape(&["....", ".#..", ".##.", "...."]);
        assert_eq!(padded.normalize(), shape(&["#.", "##"]));
    }

    #[test]
    fn test_normalize_empty_shape() {
        let blank = shape(&["...", "..."]);
        assert_eq!(blank.normalize().width(), 0);
        assert_eq!(blank.normalize().height(), 0);
    }

    #[test]
    fn test_rotate_clockwise() {
        let l = shape(&["#.", "#.", "##"]);
        assert_eq!(l.rotate(), shape(&["###", "#.."]));
        assert_eq!(l.rotate().rotate().rotate().rotate(), l);
    }

    #[test]
    fn test_flip() {
        assert_eq!(shape(&["##.", "#.."]).flip(), shape(&[".##", "..#"]));
    }

    #[test]
    fn test_variant_counts_follow_symmetry() {
        assert_eq!(shape(&["##", "##"]).variants().len(), 1);
        assert_eq!(shape(&["###"]).variants().len(), 2);
        assert_eq!(shape(&["##.", ".##"]).variants().len(), 4);
        assert_eq!(shape(&["#.", "#.", "##"]).variants().len(), 8);
    }

    #[test]
    fn test_display_round_trip() {
        let s = shape(&["#.#", "###"]);
        assert_eq!(s.to_string(), "#.#\n###");
    }

    #[test]
    fn test_occupied_is_row_major() {
        let s = shape(&[".#", "##"]);
        assert_eq!(s.occupied().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(s.cell_count(), 3);
    }
}
