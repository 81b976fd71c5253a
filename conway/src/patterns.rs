use rand::Rng;

use crate::config::RANDOM_SEED_THRESHOLD;
use crate::grid::{Grid, wrap};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

//   0 1 2
// 0 . # .
// 1 . . #
// 2 # # #
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Sets the pattern's cells alive, leaving every other cell as it was.
pub fn apply_pattern<const R: usize, const C: usize>(grid: &mut Grid<R, C>, pattern: &Pattern) {
    for &(row, col) in pattern.cells {
        grid.set(wrap(row as isize, R), wrap(col as isize, C), true);
    }
}

/// Sprinkles live cells (~19% density) over the grid without clearing any.
pub fn apply_random_pattern<const R: usize, const C: usize>(grid: &mut Grid<R, C>, rng: &mut impl Rng) {
    for row in 0..R {
        for col in 0..C {
            if rng.gen_range(0..100) > RANDOM_SEED_THRESHOLD {
                grid.set(row, col, true);
            }
        }
    }
}
