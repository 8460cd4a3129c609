//! Simulated elderly-activity motion feed.
//!
//! This crate procedurally generates everything a monitoring dashboard
//! needs to animate and assess a simulated subject: there is no real
//! sensor ingestion, no trained model, and no persistence. A fixed,
//! looping activity schedule drives four derivations:
//!
//! 1. **Time resolution** ([`ActivitySchedule::resolve`]): maps a
//!    wall-clock offset to its activity segment and in-segment progress.
//! 2. **Signal synthesis** ([`SignalSynthesizer`]): closed-form
//!    accelerometer/gyroscope signatures per activity, plus per-joint
//!    saliency weights, with a seedable noise layer. Overlay renderers
//!    iterate the weights via [`JointImportance::as_array`].
//! 3. **Pose synthesis** ([`pose::joint_rotations`]): deterministic
//!    per-activity joint rotations, including the fall collapse blend.
//! 4. **Analysis** ([`analysis`]): four pure reducers folding the
//!    expanded timeline into a biography, drift score, caregiver alerts,
//!    and a composite risk score.
//!
//! The [`MotionSimulator`] facade bundles the schedule and synthesizer
//! behind the polling surface an animation driver calls every tick.
//!
//! # Example
//!
//! ```
//! use eldermotion_sim::{MotionSimulator, analysis};
//!
//! let mut sim = MotionSimulator::with_seed(
//!     eldermotion_sim::ActivitySchedule::default_loop(),
//!     42,
//! );
//!
//! let at = sim.current_activity(21_000);
//! let pose = sim.joint_rotations(at.activity, 21_000, at.progress);
//! let prediction = sim.prediction_at(21_000);
//!
//! let timeline = sim.timeline();
//! let risk = analysis::generate_risk_score(&timeline);
//! assert_eq!(risk.overall, 35);
//! # let _ = (pose, prediction);
//! ```

pub mod analysis;
pub mod error;
pub mod pose;
pub mod schedule;
pub mod signal;
pub mod simulator;
pub mod timeline;
pub mod types;

pub use error::{SimError, SimResult};
pub use schedule::{ActivityAt, ActivitySchedule, ScheduleEntry};
pub use signal::SignalSynthesizer;
pub use simulator::MotionSimulator;
pub use timeline::build_timeline;
pub use types::{
    ActivityKind, JointImportance, JointRotations, MotionPrediction, RiskLevel, SensorSample,
    TimelineSegment, Vec3,
};
