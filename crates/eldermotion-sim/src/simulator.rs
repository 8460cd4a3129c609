//! The motion simulator facade.
//!
//! Bundles the schedule, the signal synthesizer, and the pose synthesizer
//! behind the query surface an animation driver polls every tick.

use crate::pose;
use crate::schedule::{ActivityAt, ActivitySchedule};
use crate::signal::SignalSynthesizer;
use crate::timeline::build_timeline;
use crate::types::{ActivityKind, JointRotations, MotionPrediction, TimelineSegment};

/// Simulated motion feed over a looping activity schedule.
///
/// Time queries are pure with respect to the schedule; only the stochastic
/// noise layer of predictions draws on internal RNG state, which is why
/// prediction queries take `&mut self`.
#[derive(Debug)]
pub struct MotionSimulator {
    schedule: ActivitySchedule,
    synthesizer: SignalSynthesizer,
}

impl MotionSimulator {
    /// Creates a simulator over the given schedule with entropy-seeded noise.
    #[must_use]
    pub fn new(schedule: ActivitySchedule) -> Self {
        Self {
            schedule,
            synthesizer: SignalSynthesizer::new(),
        }
    }

    /// Creates a simulator with a fixed noise seed for reproducible runs.
    #[must_use]
    pub fn with_seed(schedule: ActivitySchedule, seed: u64) -> Self {
        Self {
            schedule,
            synthesizer: SignalSynthesizer::from_seed(seed),
        }
    }

    /// Simulator over the scripted demo loop.
    #[must_use]
    pub fn default_loop() -> Self {
        Self::new(ActivitySchedule::default_loop())
    }

    /// The underlying schedule.
    #[must_use]
    pub fn schedule(&self) -> &ActivitySchedule {
        &self.schedule
    }

    /// Total loop duration `D` in milliseconds.
    #[must_use]
    pub fn total_duration_ms(&self) -> u64 {
        self.schedule.total_duration_ms()
    }

    /// Resolves the activity, risk level, and in-segment progress at
    /// `time_ms` (wrapping modulo the loop duration).
    #[must_use]
    pub fn current_activity(&self, time_ms: u64) -> ActivityAt {
        self.schedule.resolve(time_ms)
    }

    /// Synthesizes a full model prediction for `time_ms`.
    ///
    /// Confidence is pinned to 0.95 during falls; otherwise it is drawn
    /// uniformly from [0.75, 0.95).
    pub fn prediction_at(&mut self, time_ms: u64) -> MotionPrediction {
        let at = self.schedule.resolve(time_ms);
        let sensor = self.synthesizer.sensor_sample(at.activity, time_ms);
        let joint_importance = self.synthesizer.joint_importance(at.activity);

        let confidence = if at.activity == ActivityKind::Falling {
            0.95
        } else {
            0.75 + self.synthesizer.confidence_jitter() * 0.2
        };

        MotionPrediction {
            activity: at.activity,
            confidence,
            risk_level: at.risk_level,
            timestamp_ms: time_ms,
            sensor,
            joint_importance,
        }
    }

    /// Computes the avatar pose for an already-resolved activity.
    ///
    /// Pure pass-through to [`pose::joint_rotations`]; exposed here so
    /// drivers can resolve once and query both signal and pose.
    #[must_use]
    pub fn joint_rotations(
        &self,
        activity: ActivityKind,
        time_ms: u64,
        progress: f64,
    ) -> JointRotations {
        pose::joint_rotations(activity, time_ms, progress)
    }

    /// Expands the schedule into absolute-stamped timeline segments.
    #[must_use]
    pub fn timeline(&self) -> Vec<TimelineSegment> {
        build_timeline(&self.schedule)
    }
}
