// driver.rs - Render / step / sleep loop until interrupted

use std::io::Write;
use std::time::Duration;

use log::{debug, info};

use crate::config::{SHUTDOWN_NOTICE, SimConfig};
use crate::error::ConwayResult;
use crate::profile::{self, Profiler};
use crate::render::render;
use crate::shutdown::{self, ShutdownSignal};
use crate::simulation::Simulation;

pub struct Driver<const R: usize, const C: usize> {
    simulation: Simulation<R, C>,
    interval: Duration,
    shutdown: ShutdownSignal,
    profiler: Option<Profiler>,

    // Hosts the signal listener; dropped with the driver.
    runtime: tokio::runtime::Runtime,
}

impl<const R: usize, const C: usize> Driver<R, C> {
    /// Seeds the glider and the random sprinkle, then starts listening for
    /// SIGINT / SIGTERM.
    pub fn new(config: &SimConfig, profiler: Option<Profiler>) -> ConwayResult<Self> {
        let mut simulation = Simulation::new(config);
        simulation.seed_glider();
        simulation.seed_random();
        Self::with_simulation(simulation, config.tick, profiler)
    }

    pub fn with_simulation(
        simulation: Simulation<R, C>,
        interval: Duration,
        profiler: Option<Profiler>,
    ) -> ConwayResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("conway-signals")
            .enable_all()
            .build()?;

        let shutdown = ShutdownSignal::new();
        runtime.spawn(shutdown::listen(shutdown.clone()));

        info!(
            "{}x{} grid, {} live cells, tick {:?}, mutation threshold {:?}, rng from {}",
            R,
            C,
            simulation.population(),
            interval,
            simulation.mutation().map(|m| m.threshold()),
            simulation.seed_source(),
        );

        Ok(Self { simulation, interval, shutdown, profiler, runtime })
    }

    /// Handle that stops [`run`](Self::run) at the next tick boundary.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    pub fn simulation(&self) -> &Simulation<R, C> {
        &self.simulation
    }

    /// Renders the current generation, then advances to the next.
    pub fn tick(&mut self, out: &mut impl Write) -> ConwayResult<()> {
        render(out, self.simulation.grid())?;
        self.simulation.update_generation();
        debug!(
            "generation {} population {}",
            self.simulation.generation(),
            self.simulation.population()
        );
        Ok(())
    }

    /// Ticks until shutdown is signalled, then prints the notice and
    /// finalises any profile. Returns the number of ticks run.
    ///
    /// The profile is finalised even when output fails mid-run; the output
    /// error takes precedence over a profile error.
    pub fn run(mut self, out: &mut impl Write) -> ConwayResult<u64> {
        let outcome = self.run_until_shutdown(out);
        let finished = profile::finish(self.profiler.take());
        self.runtime.shutdown_background();

        let ticks = outcome?;
        finished?;
        Ok(ticks)
    }

    fn run_until_shutdown(&mut self, out: &mut impl Write) -> ConwayResult<u64> {
        let mut ticks = 0;
        while !self.shutdown.is_triggered() {
            self.tick(out)?;
            ticks += 1;
            std::thread::sleep(self.interval);
        }

        writeln!(out, "{SHUTDOWN_NOTICE}")?;
        out.flush()?;
        info!("stopped after {ticks} ticks at generation {}", self.simulation.generation());
        Ok(ticks)
    }
}
