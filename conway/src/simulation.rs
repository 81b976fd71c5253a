// simulation.rs - Double-buffered Game of Life state

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SimConfig;
use crate::engine::{self, Mutation};
use crate::grid::Grid;
use crate::patterns::{self, GLIDER};

/// Owns both grids, the generation counter and the random source.
pub struct Simulation<const R: usize, const C: usize> {
    current_grid: Grid<R, C>,
    next_grid: Grid<R, C>,
    generation: u64,
    mutation: Option<Mutation>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl<const R: usize, const C: usize> Simulation<R, C> {
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };

        Self {
            current_grid: Grid::new(),
            next_grid: Grid::new(),
            generation: 0,
            mutation: config.mutation.map(Mutation::from_chance),
            rng,
            rng_seed: config.rng_seed,
        }
    }

    /// Starts from an explicit grid instead of the seeders.
    pub fn from_grid(config: &SimConfig, grid: Grid<R, C>) -> Self {
        let mut sim = Self::new(config);
        sim.current_grid = grid;
        sim
    }

    pub fn seed_glider(&mut self) {
        patterns::apply_pattern(&mut self.current_grid, &GLIDER);
        debug!("seeded {} at origin", GLIDER.name);
    }

    pub fn seed_random(&mut self) {
        patterns::apply_random_pattern(&mut self.current_grid, &mut self.rng);
    }

    /// Advances one tick: compute `next` from `current`, then swap them.
    pub fn update_generation(&mut self) {
        engine::step(&self.current_grid, &mut self.next_grid, self.mutation.as_ref(), &mut self.rng);
        std::mem::swap(&mut self.current_grid, &mut self.next_grid);
        self.generation += 1;
    }

    pub fn clear_grid(&mut self) {
        self.current_grid = Grid::new();
        self.generation = 0;
    }

    pub fn grid(&self) -> &Grid<R, C> {
        &self.current_grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current_grid.population()
    }

    pub fn mutation(&self) -> Option<&Mutation> {
        self.mutation.as_ref()
    }

    /// Where the random source came from, for start-up logging.
    pub fn seed_source(&self) -> String {
        match self.rng_seed {
            Some(seed) => format!("seed {seed}"),
            None => "entropy".to_string(),
        }
    }
}
