// profile.rs - Optional CPU profile captured from start-up until interrupt
//
// Only built with `--features profile`. A process killed without an
// interrupt never flushes the report.

use crate::error::ConwayResult;

#[cfg(all(feature = "profile", unix))]
pub use enabled::Profiler;

#[cfg(not(all(feature = "profile", unix)))]
pub use disabled::Profiler;

#[cfg(all(feature = "profile", unix))]
mod enabled {
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;

    use log::info;
    use pprof::protos::Message;

    use crate::error::{ConwayError, ConwayResult};

    pub struct Profiler {
        file: File,
        guard: pprof::ProfilerGuard<'static>,
    }

    impl Profiler {
        /// Creates the output file up front; failing here aborts start-up.
        pub fn start(path: impl AsRef<Path>) -> ConwayResult<Option<Self>> {
            let file = File::create(path.as_ref())?;
            let guard = pprof::ProfilerGuardBuilder::default()
                .frequency(1000)
                .blocklist(&["libc", "libgcc", "pthread", "vdso"])
                .build()
                .map_err(|err| ConwayError::profile(err.to_string()))?;
            info!("profiling to {}", path.as_ref().display());
            Ok(Some(Self { file, guard }))
        }

        pub fn finish(mut self) -> ConwayResult<()> {
            let report = self
                .guard
                .report()
                .build()
                .map_err(|err| ConwayError::profile(err.to_string()))?;
            let profile = report.pprof().map_err(|err| ConwayError::profile(err.to_string()))?;

            let mut content = Vec::new();
            profile
                .encode(&mut content)
                .map_err(|err| ConwayError::profile(err.to_string()))?;
            self.file.write_all(&content)?;
            self.file.flush()?;
            Ok(())
        }
    }
}

#[cfg(not(all(feature = "profile", unix)))]
mod disabled {
    use std::path::Path;

    use crate::error::ConwayResult;

    /// Stand-in when the `profile` feature is off: nothing is created.
    pub struct Profiler(());

    impl Profiler {
        pub fn start(_path: impl AsRef<Path>) -> ConwayResult<Option<Self>> {
            Ok(None)
        }

        pub fn finish(self) -> ConwayResult<()> {
            Ok(())
        }
    }
}

/// Finalises an active capture, if any.
pub fn finish(profiler: Option<Profiler>) -> ConwayResult<()> {
    match profiler {
        Some(profiler) => profiler.finish(),
        None => Ok(()),
    }
}

/// Only one sampling profiler may run per process; tests that start one
/// hold this lock.
#[cfg(all(test, feature = "profile", unix))]
pub(crate) static PROFILER_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(all(test, feature = "profile", unix))]
pub(crate) fn burn_cpu() -> u64 {
    let mut acc = 0u64;
    for i in 0..50_000_000u64 {
        acc = acc.wrapping_mul(31).wrapping_add(i);
    }
    std::hint::black_box(acc)
}
