//! Expansion of the schedule into absolute-stamped timeline segments.

use crate::schedule::ActivitySchedule;
use crate::types::TimelineSegment;

/// Expands the schedule into one [`TimelineSegment`] per entry, stamped
/// with absolute start/end offsets within a single loop.
///
/// Deterministic and idempotent: repeated calls over the same schedule
/// produce structurally identical output. The `predictions` vector on each
/// segment is a reserved extension point and is always left empty.
#[must_use]
pub fn build_timeline(schedule: &ActivitySchedule) -> Vec<TimelineSegment> {
    let mut elapsed: u64 = 0;

    schedule
        .entries()
        .iter()
        .map(|entry| {
            let segment = TimelineSegment {
                start_ms: elapsed,
                end_ms: elapsed + entry.duration_ms,
                activity: entry.activity,
                risk_level: entry.risk_level,
                predictions: Vec::new(),
            };
            elapsed += entry.duration_ms;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_loop_exactly_once() {
        let schedule = ActivitySchedule::default_loop();
        let timeline = build_timeline(&schedule);

        assert_eq!(timeline.len(), schedule.entries().len());
        assert_eq!(timeline[0].start_ms, 0);
        assert_eq!(
            timeline.last().unwrap().end_ms,
            schedule.total_duration_ms()
        );
        for pair in timeline.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
    }

    #[test]
    fn idempotent() {
        let schedule = ActivitySchedule::default_loop();
        assert_eq!(build_timeline(&schedule), build_timeline(&schedule));
    }

    #[test]
    fn predictions_left_empty() {
        let schedule = ActivitySchedule::default_loop();
        assert!(build_timeline(&schedule)
            .iter()
            .all(|seg| seg.predictions.is_empty()));
    }

    #[test]
    fn durations_match_entries() {
        let schedule = ActivitySchedule::default_loop();
        let timeline = build_timeline(&schedule);
        for (seg, entry) in timeline.iter().zip(schedule.entries()) {
            assert_eq!(seg.duration_ms(), entry.duration_ms);
            assert_eq!(seg.activity, entry.activity);
            assert_eq!(seg.risk_level, entry.risk_level);
        }
    }
}
