//! Error types for the eldermotion simulator.
//!
//! The core is total over well-typed input: once a schedule is built, every
//! query function succeeds. Errors therefore only arise at schedule
//! construction, where the contiguity invariant the resolver depends on is
//! established.

use thiserror::Error;

/// A specialized `Result` for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while constructing an activity schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// A schedule must contain at least one segment.
    #[error("activity schedule is empty")]
    EmptySchedule,

    /// Every segment needs a positive duration, otherwise the time
    /// resolver's coverage invariant breaks.
    #[error("schedule entry {index} has zero duration")]
    ZeroDurationEntry {
        /// Index of the offending entry.
        index: usize,
    },
}
