//! One generation of the automaton: neighbour count, survival/birth rule and
//! the optional spontaneous-birth mutation, from `current` into `next`.

use rand::Rng;

use crate::grid::Grid;

/// Upper bound (exclusive) of the per-cell mutation draw.
pub const MUTATION_DRAW_RANGE: u32 = 100_000;

/// Conway's rule for a single cell.
pub fn next_liveness(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Per-cell chance of a forced birth, layered on top of the rule.
///
/// The threshold is `chance * 1000` truncated and compared against a draw in
/// `[0, 100000)`, so the effective rate is `chance / 100`: a configured
/// `0.001` yields one birth per 100000 cells per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    threshold: u32,
}

impl Mutation {
    pub fn from_chance(chance: f32) -> Self {
        Self { threshold: (chance * 1000.0) as u32 }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Fraction of cells a tick is expected to force alive.
    pub fn effective_rate(&self) -> f64 {
        f64::from(self.threshold.min(MUTATION_DRAW_RANGE)) / f64::from(MUTATION_DRAW_RANGE)
    }

    /// Draws once; `true` means the cell is forced alive.
    pub fn strikes(&self, rng: &mut impl Rng) -> bool {
        rng.gen_range(0..MUTATION_DRAW_RANGE) < self.threshold
    }
}

/// Computes one row of the next generation.
fn process_row<const R: usize, const C: usize>(
    current: &Grid<R, C>,
    row_index: usize,
    row_result: &mut [bool; C],
    mutation: Option<&Mutation>,
    rng: &mut impl Rng,
) {
    for (col, cell) in row_result.iter_mut().enumerate() {
        let count = current.live_neighbors(row_index, col);
        *cell = next_liveness(current.get(row_index, col), count);

        if let Some(mutation) = mutation {
            if mutation.strikes(rng) {
                *cell = true;
            }
        }
    }
}

/// Overwrites every cell of `next` from `current`; `current` is only read.
pub fn step<const R: usize, const C: usize>(
    current: &Grid<R, C>,
    next: &mut Grid<R, C>,
    mutation: Option<&Mutation>,
    rng: &mut impl Rng,
) {
    for row in 0..R {
        process_row(current, row, next.row_mut(row), mutation, rng);
    }
}
