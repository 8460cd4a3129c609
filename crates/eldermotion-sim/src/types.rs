//! Core data types for the eldermotion simulator.
//!
//! This module defines the value types exchanged between the schedule,
//! the signal and pose synthesizers, and the analysis summarizers.
//! Every type here is a plain value: recomputed per query, never stored,
//! never mutated in place.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Activity and risk classification
// =============================================================================

/// Activity classes recognized by the (simulated) motion model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActivityKind {
    /// Ambulatory gait.
    Walking,
    /// Upright, stationary.
    Standing,
    /// Seated.
    Sitting,
    /// Supine or lateral recumbent.
    Lying,
    /// Loss-of-balance event in progress.
    Falling,
    /// No detectable motion, sensor at rest.
    Idle,
}

impl ActivityKind {
    /// All activity kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Walking,
        Self::Standing,
        Self::Sitting,
        Self::Lying,
        Self::Falling,
        Self::Idle,
    ];

    /// Whether this activity counts as sedentary for inactivity metrics.
    #[must_use]
    pub fn is_sedentary(&self) -> bool {
        matches!(self, Self::Sitting | Self::Lying)
    }

    /// Whether this activity is a fall event.
    #[must_use]
    pub fn is_fall(&self) -> bool {
        matches!(self, Self::Falling)
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Walking => "walking",
            Self::Standing => "standing",
            Self::Sitting => "sitting",
            Self::Lying => "lying",
            Self::Falling => "falling",
            Self::Idle => "idle",
        };
        write!(f, "{name}")
    }
}

/// Safety classification attached to each schedule segment.
///
/// Totally ordered (`Safe < Caution < Danger`) for display sorting only;
/// no arithmetic is ever performed on the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Normal activity, no concern.
    Safe,
    /// Elevated attention warranted.
    Caution,
    /// Acute risk, immediate attention.
    Danger,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Danger => "danger",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// Sensor and pose values
// =============================================================================

/// Three-axis vector used for accelerometer/gyroscope samples and for
/// per-joint Euler rotations (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector (rest rotation, no acceleration).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A single synthetic IMU sample.
///
/// Ranges are nominal, not guaranteed: the stochastic noise layer can push
/// any axis outside its typical envelope, so consumers must not assume
/// hard bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSample {
    /// Accelerometer reading, in g per axis.
    pub accelerometer: Vec3,
    /// Gyroscope reading, in deg/s per axis.
    pub gyroscope: Vec3,
    /// Query time this sample was synthesized for, in milliseconds.
    pub timestamp_ms: u64,
}

/// Per-joint saliency weights for explainability overlays.
///
/// Values sit in roughly [0, 1] but are not strictly bounded; they drive
/// visual emphasis, not any calibrated statistical quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointImportance {
    pub hip: f64,
    pub left_knee: f64,
    pub right_knee: f64,
    pub left_ankle: f64,
    pub right_ankle: f64,
    pub spine: f64,
    pub neck: f64,
    pub left_shoulder: f64,
    pub right_shoulder: f64,
    pub left_elbow: f64,
    pub right_elbow: f64,
}

impl JointImportance {
    /// All eleven weights in a fixed order, for iteration by overlays.
    #[must_use]
    pub fn as_array(&self) -> [f64; 11] {
        [
            self.hip,
            self.left_knee,
            self.right_knee,
            self.left_ankle,
            self.right_ankle,
            self.spine,
            self.neck,
            self.left_shoulder,
            self.right_shoulder,
            self.left_elbow,
            self.right_elbow,
        ]
    }
}

/// Full avatar pose: Euler rotations (radians) for thirteen joint slots.
///
/// Slots an activity does not articulate carry [`Vec3::ZERO`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointRotations {
    pub hip: Vec3,
    pub spine: Vec3,
    pub neck: Vec3,
    pub left_shoulder: Vec3,
    pub right_shoulder: Vec3,
    pub left_elbow: Vec3,
    pub right_elbow: Vec3,
    pub left_hip: Vec3,
    pub right_hip: Vec3,
    pub left_knee: Vec3,
    pub right_knee: Vec3,
    pub left_ankle: Vec3,
    pub right_ankle: Vec3,
}

// =============================================================================
// Prediction and timeline
// =============================================================================

/// One synthesized model output for a single query time.
///
/// Ephemeral: recomputed on every call, never cached by the core.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionPrediction {
    pub activity: ActivityKind,
    /// Model confidence in [0, 1]. Pinned to 0.95 during falls.
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub timestamp_ms: u64,
    pub sensor: SensorSample,
    pub joint_importance: JointImportance,
}

/// One schedule segment stamped with absolute offsets within a loop.
///
/// Segments are contiguous and non-overlapping, covering `[0, D)` in
/// schedule order, where `D` is the loop's total duration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimelineSegment {
    /// Absolute start offset within the loop, in milliseconds.
    pub start_ms: u64,
    /// Absolute end offset within the loop, in milliseconds (exclusive).
    pub end_ms: u64,
    pub activity: ActivityKind,
    pub risk_level: RiskLevel,
    /// Reserved extension point for attaching observed predictions to a
    /// segment. Always empty today; no code path populates it.
    pub predictions: Vec<MotionPrediction>,
}

impl TimelineSegment {
    /// Segment length in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sedentary_classification() {
        assert!(ActivityKind::Sitting.is_sedentary());
        assert!(ActivityKind::Lying.is_sedentary());
        assert!(!ActivityKind::Walking.is_sedentary());
        assert!(!ActivityKind::Falling.is_sedentary());
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Safe < RiskLevel::Caution);
        assert!(RiskLevel::Caution < RiskLevel::Danger);
    }

    #[test]
    fn activity_display_names() {
        assert_eq!(ActivityKind::Falling.to_string(), "falling");
        assert_eq!(ActivityKind::Idle.to_string(), "idle");
    }

    #[test]
    fn segment_duration() {
        let seg = TimelineSegment {
            start_ms: 3000,
            end_ms: 8000,
            activity: ActivityKind::Walking,
            risk_level: RiskLevel::Safe,
            predictions: Vec::new(),
        };
        assert_eq!(seg.duration_ms(), 5000);
    }

    #[test]
    fn importance_array_order() {
        let imp = JointImportance {
            hip: 1.0,
            left_knee: 2.0,
            right_knee: 3.0,
            left_ankle: 4.0,
            right_ankle: 5.0,
            spine: 6.0,
            neck: 7.0,
            left_shoulder: 8.0,
            right_shoulder: 9.0,
            left_elbow: 10.0,
            right_elbow: 11.0,
        };
        let arr = imp.as_array();
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[5], 6.0);
        assert_eq!(arr[10], 11.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn activity_serde_roundtrip() {
        let json = serde_json::to_string(&ActivityKind::Falling).unwrap();
        assert_eq!(json, "\"falling\"");
        let back: ActivityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ActivityKind::Falling);
    }
}
