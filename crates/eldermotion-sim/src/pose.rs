//! Per-activity avatar pose synthesis.
//!
//! Each activity maps to a signature pose shape modulated by small
//! sinusoidal sway for lifelike idle motion. The one intricate case is
//! falling: every joint angle is a blend
//!
//! ```text
//! angle = base + fall_progress * s1 + chaos * s2
//! ```
//!
//! where `fall_progress = min(2 * progress, 1)` completes the collapse in
//! the first half of the segment, and `chaos = sin(t * 20) * (1 -
//! fall_progress)` is a high-frequency wobble that decays to zero as the
//! body settles. Unlike the signal synthesizer there is no hidden
//! randomness here: same inputs, same angles.

use crate::types::{ActivityKind, JointRotations, Vec3};

/// Computes the full set of joint rotations for `activity` at `time_ms`.
///
/// `progress` is the fractional position within the containing schedule
/// segment, in `[0, 1)`; only the falling pose consumes it. Pure function
/// of its three inputs.
#[must_use]
pub fn joint_rotations(activity: ActivityKind, time_ms: u64, progress: f64) -> JointRotations {
    let t = time_ms as f64 / 1000.0;

    match activity {
        ActivityKind::Walking => walking_pose(t),
        ActivityKind::Standing => standing_pose(t),
        ActivityKind::Sitting => sitting_pose(t),
        ActivityKind::Lying => lying_pose(t),
        ActivityKind::Falling => falling_pose(t, progress),
        ActivityKind::Idle => idle_pose(),
    }
}

fn walking_pose(t: f64) -> JointRotations {
    let cycle = (t * 6.0).sin();
    let cycle_offset = (t * 6.0 + std::f64::consts::PI).sin();

    JointRotations {
        hip: Vec3::new(0.0, (t * 3.0).sin() * 0.1, cycle * 0.05),
        spine: Vec3::new(0.15, cycle * 0.05, 0.0),
        neck: Vec3::new(0.1, 0.0, 0.0),
        left_shoulder: Vec3::new(cycle_offset * 0.3, 0.0, 0.0),
        right_shoulder: Vec3::new(cycle * 0.3, 0.0, 0.0),
        left_elbow: Vec3::new(-0.3 - cycle_offset * 0.2, 0.0, 0.0),
        right_elbow: Vec3::new(-0.3 - cycle * 0.2, 0.0, 0.0),
        left_hip: Vec3::new(cycle * 0.4, 0.0, 0.0),
        right_hip: Vec3::new(cycle_offset * 0.4, 0.0, 0.0),
        left_knee: Vec3::new((-cycle).max(0.0) * 0.8, 0.0, 0.0),
        right_knee: Vec3::new((-cycle_offset).max(0.0) * 0.8, 0.0, 0.0),
        left_ankle: Vec3::new(cycle * 0.2, 0.0, 0.0),
        right_ankle: Vec3::new(cycle_offset * 0.2, 0.0, 0.0),
    }
}

fn standing_pose(t: f64) -> JointRotations {
    JointRotations {
        hip: Vec3::new(0.0, (t * 0.5).sin() * 0.02, 0.0),
        spine: Vec3::new(0.1, 0.0, 0.0),
        neck: Vec3::new(0.05, (t * 0.3).sin() * 0.05, 0.0),
        left_shoulder: Vec3::new(0.0, 0.0, 0.05),
        right_shoulder: Vec3::new(0.0, 0.0, -0.05),
        left_elbow: Vec3::new(-0.1, 0.0, 0.0),
        right_elbow: Vec3::new(-0.1, 0.0, 0.0),
        left_knee: Vec3::new(0.05, 0.0, 0.0),
        right_knee: Vec3::new(0.05, 0.0, 0.0),
        ..JointRotations::default()
    }
}

fn sitting_pose(t: f64) -> JointRotations {
    JointRotations {
        hip: Vec3::new(0.8, 0.0, 0.0),
        spine: Vec3::new(-0.2, 0.0, 0.0),
        neck: Vec3::new(-0.1, (t * 0.2).sin() * 0.1, 0.0),
        left_shoulder: Vec3::new(-0.2, 0.0, 0.1),
        right_shoulder: Vec3::new(-0.2, 0.0, -0.1),
        left_elbow: Vec3::new(-1.2, 0.0, 0.0),
        right_elbow: Vec3::new(-1.2, 0.0, 0.0),
        left_hip: Vec3::new(-1.5, 0.1, 0.0),
        right_hip: Vec3::new(-1.5, -0.1, 0.0),
        left_knee: Vec3::new(1.5, 0.0, 0.0),
        right_knee: Vec3::new(1.5, 0.0, 0.0),
        left_ankle: Vec3::new(0.2, 0.0, 0.0),
        right_ankle: Vec3::new(0.2, 0.0, 0.0),
    }
}

fn lying_pose(t: f64) -> JointRotations {
    JointRotations {
        hip: Vec3::new(1.57, 0.0, 0.0),
        neck: Vec3::new(0.0, (t * 0.1).sin() * 0.05, 0.0),
        left_shoulder: Vec3::new(0.0, 0.0, 0.8),
        right_shoulder: Vec3::new(0.0, 0.0, -0.8),
        left_elbow: Vec3::new(-0.3, 0.0, 0.0),
        right_elbow: Vec3::new(-0.3, 0.0, 0.0),
        left_knee: Vec3::new(0.1, 0.0, 0.0),
        right_knee: Vec3::new(0.1, 0.0, 0.0),
        ..JointRotations::default()
    }
}

fn falling_pose(t: f64, progress: f64) -> JointRotations {
    // The collapse saturates halfway through the segment: the avatar is
    // fully down well before the segment ends.
    let fall = (progress * 2.0).min(1.0);
    let chaos = (t * 20.0).sin() * (1.0 - fall);

    JointRotations {
        hip: Vec3::new(fall * 1.2 + chaos * 0.3, chaos * 0.5, fall * 0.5),
        spine: Vec3::new(fall * 0.8 + chaos * 0.2, chaos * 0.3, fall * 0.3),
        neck: Vec3::new(fall * 0.4, chaos * 0.2, chaos * 0.3),
        left_shoulder: Vec3::new(fall * 1.5 + chaos * 0.5, 0.0, 0.8),
        right_shoulder: Vec3::new(fall * 1.2 + chaos * 0.5, 0.0, -0.8),
        left_elbow: Vec3::new(-1.0 + chaos * 0.3, 0.0, 0.0),
        right_elbow: Vec3::new(-0.8 + chaos * 0.3, 0.0, 0.0),
        left_hip: Vec3::new(fall * 0.5 + chaos * 0.2, 0.2, 0.0),
        right_hip: Vec3::new(fall * 0.3 + chaos * 0.2, -0.2, 0.0),
        left_knee: Vec3::new(fall * 1.2 + chaos * 0.3, 0.0, 0.0),
        right_knee: Vec3::new(fall * 0.8 + chaos * 0.3, 0.0, 0.0),
        left_ankle: Vec3::new(chaos * 0.5, 0.0, 0.0),
        right_ankle: Vec3::new(chaos * 0.5, 0.0, 0.0),
    }
}

fn idle_pose() -> JointRotations {
    JointRotations {
        spine: Vec3::new(0.1, 0.0, 0.0),
        left_shoulder: Vec3::new(0.0, 0.0, 0.05),
        right_shoulder: Vec3::new(0.0, 0.0, -0.05),
        left_elbow: Vec3::new(-0.1, 0.0, 0.0),
        right_elbow: Vec3::new(-0.1, 0.0, 0.0),
        ..JointRotations::default()
    }
}
