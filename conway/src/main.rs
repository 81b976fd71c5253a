// main.rs - Terminal Game of Life, runs until SIGINT / SIGTERM

use std::io;

use conway::config::{COLS, PROFILE_PATH, ROWS};
use conway::profile::Profiler;
use conway::{ConwayResult, Driver, SimConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        println!("{err}");
    }
}

fn run() -> ConwayResult<()> {
    let profiler = Profiler::start(PROFILE_PATH)?;

    let driver = Driver::<ROWS, COLS>::new(&SimConfig::default(), profiler)?;
    let mut stdout = io::stdout().lock();
    driver.run(&mut stdout)?;
    Ok(())
}
