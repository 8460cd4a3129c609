//! Immutable playback state and its reducer.
//!
//! The rendering layer drives playback by dispatching actions; state is
//! never mutated in place. [`reduce`] is a pure, total function over
//! `(state, action)`, so any driver can replay or inspect transitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which analysis panel the dashboard currently shows, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AnalysisMode {
    MotionBiography,
    BaselineDrift,
    CaregiverAlerts,
    RiskScore,
}

/// Playback position and display toggles for the visualization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaybackState {
    /// Whether the clock advances on ticks.
    pub playing: bool,
    /// Position within the loop, in milliseconds. Always below the loop
    /// duration after a reduction.
    pub current_time_ms: u64,
    /// Playback rate multiplier applied to tick deltas.
    pub speed: f64,
    /// Sensor glyph overlay toggle.
    pub show_sensor_layers: bool,
    /// Joint saliency overlay toggle.
    pub show_joint_importance: bool,
    /// Active analysis panel.
    pub analysis_mode: Option<AnalysisMode>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: true,
            current_time_ms: 0,
            speed: 1.0,
            show_sensor_layers: true,
            show_joint_importance: true,
            analysis_mode: None,
        }
    }
}

/// Everything a driver can ask the playback layer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaybackAction {
    Play,
    Pause,
    TogglePlay,
    /// Jump to an absolute loop offset (wraps modulo the loop duration).
    Seek { time_ms: u64 },
    SetSpeed { speed: f64 },
    /// Advance the clock by an elapsed wall interval, scaled by speed.
    /// No-op while paused.
    Tick { delta_ms: u64 },
    SetAnalysisMode(Option<AnalysisMode>),
    ToggleSensorLayers,
    ToggleJointImportance,
}

/// Applies `action` to `state`, yielding the next state.
///
/// `total_ms` is the loop duration the clock wraps against and must be
/// positive; schedules guarantee this by construction. Within that
/// precondition the function is pure: non-finite or non-positive speeds
/// leave the current speed untouched rather than poisoning the clock
/// (the session layer rejects them with an error before they reach
/// here). Play and pause are idempotent; ticks while paused change
/// nothing.
#[must_use]
pub fn reduce(state: &PlaybackState, action: &PlaybackAction, total_ms: u64) -> PlaybackState {
    debug_assert!(total_ms > 0, "loop duration must be positive");
    let mut next = *state;
    match *action {
        PlaybackAction::Play => next.playing = true,
        PlaybackAction::Pause => next.playing = false,
        PlaybackAction::TogglePlay => next.playing = !state.playing,
        PlaybackAction::Seek { time_ms } => next.current_time_ms = time_ms % total_ms,
        PlaybackAction::SetSpeed { speed } => {
            if speed.is_finite() && speed > 0.0 {
                next.speed = speed;
            }
        }
        PlaybackAction::Tick { delta_ms } => {
            if state.playing {
                let advance = (delta_ms as f64 * state.speed).round() as u64;
                next.current_time_ms = (state.current_time_ms + advance) % total_ms;
            }
        }
        PlaybackAction::SetAnalysisMode(mode) => next.analysis_mode = mode,
        PlaybackAction::ToggleSensorLayers => next.show_sensor_layers = !state.show_sensor_layers,
        PlaybackAction::ToggleJointImportance => {
            next.show_joint_importance = !state.show_joint_importance;
        }
    }
    next
}
