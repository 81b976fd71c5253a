//! Error types for the simulation binary.
//!
//! The automaton itself is total; only terminal output and the optional
//! profile capture can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConwayError {
    /// Terminal write, runtime start-up or profile file error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Profiler start-up or report encoding error
    #[error("Profile error: {0}")]
    Profile(String),
}

pub type ConwayResult<T> = Result<T, ConwayError>;

impl ConwayError {
    pub fn profile(msg: impl Into<String>) -> Self {
        Self::Profile(msg.into())
    }
}
