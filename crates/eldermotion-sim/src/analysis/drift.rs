//! Baseline drift scoring.

use crate::types::{ActivityKind, TimelineSegment};

/// Segment counts for the current timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityCounts {
    /// Walking segments.
    pub walk: usize,
    /// Standing-or-walking segments, read as posture transitions.
    pub transitions: usize,
    /// Sitting-or-lying segments.
    pub stationary: usize,
}

/// The synthesized comparison baseline.
///
/// Known limitation: derived as a fixed multiple of the current counts
/// rather than from independent history, so with a non-degenerate timeline
/// the drift checks can never fire. The shape is kept so a real historical
/// baseline can drop in without changing the scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineCounts {
    pub walk: f64,
    pub transitions: f64,
    pub stationary: f64,
}

/// Coarse drift classification derived from the 0-3 drift score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriftLevel {
    Stable,
    Minor,
    Moderate,
    Significant,
}

impl DriftLevel {
    fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Stable,
            1 => Self::Minor,
            2 => Self::Moderate,
            _ => Self::Significant,
        }
    }
}

impl std::fmt::Display for DriftLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Stable => "stable",
            Self::Minor => "minor drift",
            Self::Moderate => "moderate drift",
            Self::Significant => "significant drift",
        };
        write!(f, "{name}")
    }
}

/// Drift summary: score, classification, and the alerts that fired.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineDrift {
    /// Number of drift checks that fired, 0-3.
    pub drift_score: u8,
    pub drift_level: DriftLevel,
    /// One alert string per fired check; a single "no drift" string when
    /// none fired.
    pub alerts: Vec<String>,
    pub current: ActivityCounts,
    pub baseline: BaselineCounts,
}

/// Scores the timeline's deviation from the synthesized baseline.
///
/// Three checks, one point each: walking below 0.8x baseline, transitions
/// above 1.2x baseline, stationary segments above 1.25x baseline. The
/// baseline itself is walk x1.2, transitions x0.9, stationary x0.8 of the
/// current counts.
#[must_use]
pub fn generate_baseline_drift(timeline: &[TimelineSegment]) -> BaselineDrift {
    let current = ActivityCounts {
        walk: timeline
            .iter()
            .filter(|seg| seg.activity == ActivityKind::Walking)
            .count(),
        transitions: timeline
            .iter()
            .filter(|seg| {
                matches!(seg.activity, ActivityKind::Standing | ActivityKind::Walking)
            })
            .count(),
        stationary: timeline
            .iter()
            .filter(|seg| seg.activity.is_sedentary())
            .count(),
    };

    let baseline = BaselineCounts {
        walk: current.walk as f64 * 1.2,
        transitions: current.transitions as f64 * 0.9,
        stationary: current.stationary as f64 * 0.8,
    };

    let mut drift_score: u8 = 0;
    let mut alerts = Vec::new();

    if (current.walk as f64) < baseline.walk * 0.8 {
        drift_score += 1;
        alerts.push("Walking activity has declined compared to baseline.".to_string());
    }
    if current.transitions as f64 > baseline.transitions * 1.2 {
        drift_score += 1;
        alerts.push("Increase in unstable transitions detected.".to_string());
    }
    if current.stationary as f64 > baseline.stationary * 1.25 {
        drift_score += 1;
        alerts.push("Prolonged inactivity compared to baseline.".to_string());
    }

    let drift_level = DriftLevel::from_score(drift_score);

    if alerts.is_empty() {
        alerts.push("No significant mobility drift detected.".to_string());
    }

    BaselineDrift {
        drift_score,
        drift_level,
        alerts,
        current,
        baseline,
    }
}
