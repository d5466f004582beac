use std::fmt;

use crate::Cell;
use crate::seed::Seed;

/// The full history of an automaton run.
///
/// All rows live in one preallocated buffer, stored row-major, so that row `r` is
/// `cells[r * width..(r + 1) * width]`. The final dimensions are known up front, the buffer never
/// grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,

    /// Number of rows, always at least 1
    rows: usize,

    /// Number of cells per row, always at least 1
    width: usize,
}

impl Grid {
    /// Allocate a `rows x seed.width()` grid with the seed copied into row 0. Every other row is
    /// dead until computed.
    pub(crate) fn with_seed(seed: &Seed, rows: usize) -> Self {
        assert!(rows > 0, "a grid has at least one row");

        let width = seed.width();
        let mut cells = vec![false; rows * width];
        cells[..width].copy_from_slice(seed.cells());

        Self { cells, rows, width }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// State of the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        self.cells[self.index(row, col)]
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows, "row is out of bounds");

        let start = self.index(row, 0);
        &self.cells[start..start + self.width]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of live cells in the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Split the buffer around row `row`, returning the previous row and the row to write.
    pub(crate) fn split_row_mut(&mut self, row: usize) -> (&[Cell], &mut [Cell]) {
        assert!(row > 0 && row < self.rows, "row is out of bounds");

        let start = self.index(row, 0);
        let (done, rest) = self.cells.split_at_mut(start);
        let prev = &done[start - self.width..];

        (prev, &mut rest[..self.width])
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

/// One line per row, `1` for live cells and `0` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }

            for &cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_row_zero() {
        let seed = Seed::parse("0110").unwrap();
        let grid = Grid::with_seed(&seed, 3);

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.row(0), seed.cells());
        assert_eq!(grid.row(1), &[false; 4]);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn split_row() {
        let seed = Seed::parse("101").unwrap();
        let mut grid = Grid::with_seed(&seed, 2);

        let (prev, next) = grid.split_row_mut(1);
        assert_eq!(prev, &[true, false, true]);
        next[1] = true;

        assert!(grid.get(1, 1));
        assert_eq!(grid.to_string(), "101\n010");
    }

    #[test]
    #[should_panic(expected = "row is out of bounds")]
    fn row_out_of_bounds() {
        let seed = Seed::parse("1").unwrap();
        let grid = Grid::with_seed(&seed, 1);

        grid.row(1);
    }
}
