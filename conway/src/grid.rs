// grid.rs - Grid types for Conway's Game of Life on a torus

use std::fmt;

/// Folds `a` into `[0, extent)`, stepping off one edge onto the opposite one.
///
/// True modulo rather than truncating remainder, so `wrap(-1, n) == n - 1`.
/// Total for every `a` and every positive `extent`, including extents beyond
/// `isize::MAX`.
pub fn wrap(a: isize, extent: usize) -> usize {
    assert!(extent > 0, "wrap extent must be positive");
    match isize::try_from(extent) {
        Ok(b) => a.rem_euclid(b) as usize,
        // Every isize already lies within one period of such an extent.
        Err(_) if a >= 0 => a as usize,
        Err(_) => extent - a.unsigned_abs(),
    }
}

/// Fixed-size boolean cell matrix, row-major, `true` meaning alive.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const R: usize, const C: usize> {
    cells: [[bool; C]; R],
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> Grid<R, C> {
    /// All-dead grid.
    pub const fn new() -> Self {
        Self { cells: [[false; C]; R] }
    }

    /// All-alive grid.
    pub const fn filled() -> Self {
        Self { cells: [[true; C]; R] }
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; C]> {
        self.cells.iter()
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [bool; C] {
        &mut self.cells[row]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Live cells among the 8 toroidal neighbours of `(row, col)`, in `0..=8`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = wrap(row as isize + dr, R);
                let nc = wrap(col as isize + dc, C);
                if self.cells[nr][nc] {
                    count += 1;
                }
            }
        }
        count
    }
}

impl<const R: usize, const C: usize> fmt::Display for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", R, C)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_folds_into_range() {
        for b in 1..=12usize {
            for a in -40..=40isize {
                let w = wrap(a, b);
                assert!(w < b, "wrap({a}, {b}) = {w}");
                assert_eq!(w, wrap(a + b as isize, b));
                assert_eq!(w, wrap(a - b as isize, b));
            }
        }
    }

    #[test]
    fn wrap_handles_negative_inputs() {
        assert_eq!(wrap(-1, 48), 47);
        assert_eq!(wrap(-48, 48), 0);
        assert_eq!(wrap(-49, 48), 47);
        assert_eq!(wrap(168, 168), 0);
        assert_eq!(wrap(5, 168), 5);
    }

    #[test]
    fn wrap_is_total_near_the_integer_limits() {
        let big = isize::MAX as usize;
        assert_eq!(wrap(isize::MAX - 1, big), big - 1);
        assert_eq!(wrap(isize::MAX, big), 0);
        assert_eq!(wrap(isize::MIN, big), big - 1);
        assert_eq!(wrap(-1, big), big - 1);

        assert_eq!(wrap(isize::MAX, usize::MAX), isize::MAX as usize);
        assert_eq!(wrap(-1, usize::MAX), usize::MAX - 1);
        assert_eq!(wrap(isize::MIN, usize::MAX), usize::MAX - isize::MIN.unsigned_abs());
    }

    #[test]
    fn dead_grid_has_no_neighbors() {
        let grid = Grid::<5, 7>::new();
        for row in 0..5 {
            for col in 0..7 {
                assert_eq!(grid.live_neighbors(row, col), 0);
            }
        }
    }

    #[test]
    fn live_grid_has_eight_neighbors_everywhere() {
        let grid = Grid::<3, 4>::filled();
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.live_neighbors(row, col), 8);
            }
        }
    }

    #[test]
    fn corner_cell_reaches_across_every_edge() {
        let mut grid = Grid::<6, 9>::new();
        grid.set(0, 0, true);

        let toroidal = [(5, 8), (5, 0), (5, 1), (0, 8), (0, 1), (1, 8), (1, 0), (1, 1)];
        for row in 0..6 {
            for col in 0..9 {
                let expected = u8::from(toroidal.contains(&(row, col)));
                assert_eq!(grid.live_neighbors(row, col), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn displays_hash_and_dot_rows() {
        let mut grid = Grid::<2, 3>::new();
        grid.set(0, 1, true);
        grid.set(1, 2, true);
        assert_eq!(grid.to_string(), ".#.\n..#\n");
        assert_eq!(grid.rows().collect::<Vec<_>>(), [&[false, true, false], &[false, false, true]]);
        assert_eq!(grid.population(), 2);
        assert!(!grid.is_empty());
    }
}
