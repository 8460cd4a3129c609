//! Playback and session layer over the eldermotion simulator.
//!
//! Rather than a global mutable store, playback position, display
//! toggles, and analysis results live in an immutable [`PlaybackState`]
//! with a pure [`reduce`] function over [`PlaybackAction`]s, plus a
//! [`MonitorSession`] that owns the simulator and caches derived data
//! for the renderer.
//!
//! # Example
//!
//! ```
//! use eldermotion_playback::{AnalysisMode, MonitorSession, PlaybackAction};
//!
//! let mut session = MonitorSession::default_loop();
//!
//! // A driver ticks the session at its animation cadence.
//! session.dispatch(PlaybackAction::Tick { delta_ms: 16 })?;
//!
//! // Opening the risk panel computes and caches the score.
//! session.dispatch(PlaybackAction::SetAnalysisMode(Some(AnalysisMode::RiskScore)))?;
//! assert!(session.risk_score().is_some());
//! # Ok::<(), eldermotion_playback::PlaybackError>(())
//! ```

pub mod error;
pub mod session;
pub mod state;

pub use error::{PlaybackError, PlaybackResult};
pub use session::MonitorSession;
pub use state::{reduce, AnalysisMode, PlaybackAction, PlaybackState};
