//! Conway's Game of Life on a fixed toroidal grid, animated in the terminal,
//! with optional spontaneous-birth mutation.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod profile;
pub mod render;
pub mod shutdown;
pub mod simulation;

pub use config::SimConfig;
pub use driver::Driver;
pub use error::{ConwayError, ConwayResult};
pub use grid::{Grid, wrap};
pub use simulation::Simulation;
