// config.rs - Compile-time tunables for the terminal Game of Life

use std::time::Duration;

// Compile-time grid size configuration
pub const ROWS: usize = 48;                           // Terminal lines per frame
pub const COLS: usize = 168;                          // Characters per line

pub const SLEEP: Duration = Duration::from_millis(50); // Pause between ticks
pub const MUTATION: bool = true;                      // Spontaneous births enabled
pub const MUTATION_CHANCE: f32 = 0.001;               // Scaled by 1000 against a draw in [0, 100000)
pub const RANDOM_SEED_THRESHOLD: u32 = 80;            // Draw in [0, 100) above this seeds a live cell
pub const RNG_SEED: Option<u64> = None;               // Fix to replay a run; None draws from entropy

pub const PROFILE_PATH: &str = "conway.prof";
pub const SHUTDOWN_NOTICE: &str = "Keyboard interrupted...";

/// Knobs handed to a [`Simulation`](crate::Simulation) and its driver.
///
/// The binary only ever runs with [`SimConfig::default`], which mirrors the
/// constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub tick: Duration,
    /// Configured mutation chance, `None` when mutation is off.
    pub mutation: Option<f32>,
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick: SLEEP,
            mutation: MUTATION.then_some(MUTATION_CHANCE),
            rng_seed: RNG_SEED,
        }
    }
}

impl SimConfig {
    /// Deterministic rule-only configuration.
    pub fn without_mutation(mut self) -> Self {
        self.mutation = None;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}
