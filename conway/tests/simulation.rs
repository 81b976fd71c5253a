use std::thread;
use std::time::Duration;

use conway::patterns::{GLIDER, apply_pattern};
use conway::{Driver, Grid, SimConfig, Simulation};

fn rules_only() -> SimConfig {
    SimConfig::default().without_mutation().with_seed(11)
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let mut start = Grid::<12, 12>::new();
    apply_pattern(&mut start, &GLIDER);

    let mut sim = Simulation::from_grid(&rules_only(), start);
    for _ in 0..4 {
        sim.update_generation();
    }

    let mut expected = Grid::<12, 12>::new();
    for &(row, col) in GLIDER.cells {
        expected.set(row + 1, col + 1, true);
    }
    assert_eq!(sim.grid(), &expected);
    assert_eq!(sim.generation(), 4);
}

#[test]
fn glider_crosses_the_edge_and_returns() {
    // On an 8x8 torus the glider travels 8 cells in 32 generations and lands
    // back where it started.
    let mut start = Grid::<8, 8>::new();
    apply_pattern(&mut start, &GLIDER);

    let mut sim = Simulation::from_grid(&rules_only(), start);
    for _ in 0..32 {
        sim.update_generation();
        assert_eq!(sim.population(), 5);
    }
    assert_eq!(sim.grid(), &start);
}

#[test]
fn single_corner_cell_dies_and_births_nothing() {
    let mut start = Grid::<5, 5>::new();
    start.set(0, 0, true);

    let mut sim = Simulation::from_grid(&rules_only(), start);
    sim.update_generation();
    assert!(sim.grid().is_empty());
}

#[test]
fn blinker_across_the_seam_oscillates() {
    // Horizontal blinker centred on column 0, split across the left/right edge.
    let mut start = Grid::<7, 7>::new();
    for col in [6, 0, 1] {
        start.set(3, col, true);
    }

    let mut sim = Simulation::from_grid(&rules_only(), start);
    sim.update_generation();

    let mut vertical = Grid::<7, 7>::new();
    for row in 2..=4 {
        vertical.set(row, 0, true);
    }
    assert_eq!(sim.grid(), &vertical);

    sim.update_generation();
    assert_eq!(sim.grid(), &start);
}

#[test]
fn run_stops_at_tick_boundary_when_signalled() {
    let config = rules_only().with_tick(Duration::from_millis(5));
    let driver = Driver::<10, 20>::new(&config, None).unwrap();
    let shutdown = driver.shutdown_signal();

    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(60));
        shutdown.trigger();
    });

    let mut out = Vec::new();
    let ticks = driver.run(&mut out).unwrap();
    stopper.join().unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(ticks >= 1);
    assert_eq!(text.matches("\x1b[10A\x1b[20D").count() as u64, ticks);
    assert!(text.ends_with("Keyboard interrupted...\n"));
}
