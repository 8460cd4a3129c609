//! Error types for the playback layer.

use thiserror::Error;

/// A specialized `Result` for playback operations.
pub type PlaybackResult<T> = Result<T, PlaybackError>;

/// Errors raised while dispatching playback actions.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PlaybackError {
    /// Playback speed must be finite and positive.
    #[error("invalid playback speed: {speed}")]
    InvalidSpeed {
        /// The rejected speed value.
        speed: f64,
    },
}
