//! Analysis summarizers over the activity timeline.
//!
//! Four independent pure reducers, each folding the (static) timeline into
//! one monitoring summary: a narrative biography, a baseline-drift score,
//! a caregiver alert list, and a composite risk score. They are design
//! sketches of monitoring features rather than real detectors: the
//! "baseline" each compares against is synthesized from the current
//! timeline itself, a stand-in for the historical averages a production
//! system would keep. Callers re-invoke them on demand; nothing here is
//! cached or reactive.

mod biography;
mod caregiver;
mod drift;
mod risk;

pub use biography::{generate_motion_biography, MotionBiography, WeeklyTrends};
pub use caregiver::{generate_caregiver_alerts, AlertKind, CaregiverAlert, CaregiverAlerts, Severity};
pub use drift::{generate_baseline_drift, ActivityCounts, BaselineCounts, BaselineDrift, DriftLevel};
pub use risk::{generate_risk_score, RiskComponents, RiskScore};
