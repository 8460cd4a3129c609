//! Narrative motion biography.

use crate::types::{ActivityKind, RiskLevel, TimelineSegment};

/// Week-over-week percentage deltas the narratives key off.
///
/// Known limitation: these are fixed placeholder values, not computed from
/// the timeline. A production system would derive them from stored history;
/// the demo has no history to compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyTrends {
    /// Change in walking duration, percent.
    pub walk_change: f64,
    /// Change in near-fall frequency, percent.
    pub near_fall_change: f64,
    /// Change in sedentary time, percent.
    pub inactivity_change: f64,
}

/// Narrative summary of the subject's mobility over the timeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionBiography {
    /// Narrative strings, in priority order. Never empty: a "stable"
    /// narrative is emitted when no trend crosses its threshold.
    pub narratives: Vec<String>,
    pub weekly_trends: WeeklyTrends,
    /// Total walking time across the timeline, milliseconds.
    pub walk_time_ms: u64,
    /// Segments that were falls or carried a caution risk level.
    pub near_fall_count: usize,
    /// Total sitting/lying time across the timeline, milliseconds.
    pub inactivity_ms: u64,
}

/// Folds the timeline into a [`MotionBiography`].
///
/// Narrative selection checks the walking decline first, then near-fall
/// increase, then inactivity increase; all that trigger are emitted, and a
/// single stable narrative stands in when none do. Thresholds:
/// `walk_change <= -20`, `near_fall_change >= 20`,
/// `inactivity_change >= 25`.
#[must_use]
pub fn generate_motion_biography(timeline: &[TimelineSegment]) -> MotionBiography {
    let walk_time_ms: u64 = timeline
        .iter()
        .filter(|seg| seg.activity == ActivityKind::Walking)
        .map(TimelineSegment::duration_ms)
        .sum();

    let near_fall_count = timeline
        .iter()
        .filter(|seg| seg.activity.is_fall() || seg.risk_level == RiskLevel::Caution)
        .count();

    let inactivity_ms: u64 = timeline
        .iter()
        .filter(|seg| seg.activity.is_sedentary())
        .map(TimelineSegment::duration_ms)
        .sum();

    // Placeholder deltas standing in for a real week-over-week comparison.
    let weekly_trends = WeeklyTrends {
        walk_change: -15.0,
        near_fall_change: 10.0,
        inactivity_change: 20.0,
    };

    let mut narratives = Vec::new();
    if weekly_trends.walk_change <= -20.0 {
        narratives.push("Walking duration reduced significantly this week.".to_string());
    }
    if weekly_trends.near_fall_change >= 20.0 {
        narratives.push("Near-fall frequency has increased over recent days.".to_string());
    }
    if weekly_trends.inactivity_change >= 25.0 {
        narratives.push("Prolonged inactivity observed. Mobility may be declining.".to_string());
    }
    if narratives.is_empty() {
        narratives.push("Mobility stable. No immediate intervention required.".to_string());
    }

    MotionBiography {
        narratives,
        weekly_trends,
        walk_time_ms,
        near_fall_count,
        inactivity_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ActivitySchedule;
    use crate::timeline::build_timeline;

    #[test]
    fn default_timeline_reads_stable() {
        let timeline = build_timeline(&ActivitySchedule::default_loop());
        let bio = generate_motion_biography(&timeline);

        // None of the placeholder deltas cross a threshold.
        assert_eq!(bio.narratives.len(), 1);
        assert_eq!(
            bio.narratives[0],
            "Mobility stable. No immediate intervention required."
        );
    }

    #[test]
    fn aggregates_match_default_schedule() {
        let timeline = build_timeline(&ActivitySchedule::default_loop());
        let bio = generate_motion_biography(&timeline);

        // Walking: 5000 + 2000 + 3000 + 4000.
        assert_eq!(bio.walk_time_ms, 14_000);
        // Sitting 4000 + 2000, lying 3000.
        assert_eq!(bio.inactivity_ms, 9000);
        // One fall plus three caution segments (one of them the lying
        // recovery, one a caution walk, one a caution stand).
        assert_eq!(bio.near_fall_count, 4);
    }

    #[test]
    fn empty_timeline_still_narrates() {
        let bio = generate_motion_biography(&[]);
        assert_eq!(bio.narratives.len(), 1);
        assert_eq!(bio.walk_time_ms, 0);
        assert_eq!(bio.near_fall_count, 0);
    }
}
