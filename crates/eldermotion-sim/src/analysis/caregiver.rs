//! Caregiver alert generation.

use tracing::debug;

use crate::types::{RiskLevel, TimelineSegment};

/// Categories of caregiver alert the demo dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlertKind {
    Fall,
    AssistanceNeeded,
    Medication,
    Bathroom,
    Meal,
}

/// Alert severity for triage ordering on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One alert destined for a caregiver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaregiverAlert {
    pub kind: AlertKind,
    pub message: String,
    /// Loop offset the alert refers to, in milliseconds.
    pub timestamp_ms: u64,
    pub severity: Severity,
}

/// The full alert list for a timeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaregiverAlerts {
    pub alerts: Vec<CaregiverAlert>,
}

/// Maps every fall or danger segment to a high-severity fall alert, then
/// appends the scripted medium-severity assistance alert at 5000 ms.
///
/// The assistance alert is unconditional, so the output is never empty
/// regardless of timeline content.
#[must_use]
pub fn generate_caregiver_alerts(timeline: &[TimelineSegment]) -> CaregiverAlerts {
    let mut alerts: Vec<CaregiverAlert> = timeline
        .iter()
        .filter(|seg| seg.activity.is_fall() || seg.risk_level == RiskLevel::Danger)
        .map(|seg| {
            debug!(start_ms = seg.start_ms, "fall segment promoted to caregiver alert");
            CaregiverAlert {
                kind: AlertKind::Fall,
                message: format!("Fall detected at {}s", seg.start_ms / 1000),
                timestamp_ms: seg.start_ms,
                severity: Severity::High,
            }
        })
        .collect();

    alerts.push(CaregiverAlert {
        kind: AlertKind::AssistanceNeeded,
        message: "Assistance may be needed for daily activities".to_string(),
        timestamp_ms: 5000,
        severity: Severity::Medium,
    });

    CaregiverAlerts { alerts }
}
