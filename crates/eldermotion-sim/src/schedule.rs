//! The looping activity schedule and its time resolver.
//!
//! The schedule is the leaf data of the whole simulator: an ordered sequence
//! of `(activity, duration, risk)` triples forming a loop of total duration
//! `D`. Everything else (signals, poses, timeline, analysis) derives from it.

use crate::error::{SimError, SimResult};
use crate::types::{ActivityKind, RiskLevel};

/// One entry of the looping schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    pub activity: ActivityKind,
    /// Segment duration in milliseconds. Must be positive.
    pub duration_ms: u64,
    pub risk_level: RiskLevel,
}

impl ScheduleEntry {
    #[must_use]
    pub fn new(activity: ActivityKind, duration_ms: u64, risk_level: RiskLevel) -> Self {
        Self {
            activity,
            duration_ms,
            risk_level,
        }
    }
}

/// Resolution of a query time against the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityAt {
    pub activity: ActivityKind,
    pub risk_level: RiskLevel,
    /// Fractional position within the containing segment, in [0, 1).
    pub progress: f64,
}

/// An ordered, immutable loop of activity segments.
///
/// Invariant established at construction: non-empty, every entry has a
/// positive duration. The resolver relies on segments being contiguous and
/// covering `[0, D)` exactly once, which follows directly from running
/// accumulation over those durations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivitySchedule {
    entries: Vec<ScheduleEntry>,
    total_ms: u64,
}

impl ActivitySchedule {
    /// Builds a schedule from an ordered list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::EmptySchedule`] for an empty list and
    /// [`SimError::ZeroDurationEntry`] if any entry has zero duration.
    pub fn new(entries: Vec<ScheduleEntry>) -> SimResult<Self> {
        if entries.is_empty() {
            return Err(SimError::EmptySchedule);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.duration_ms == 0 {
                return Err(SimError::ZeroDurationEntry { index });
            }
        }
        let total_ms = entries.iter().map(|e| e.duration_ms).sum();
        Ok(Self { entries, total_ms })
    }

    /// The scripted day-in-the-life loop the demo ships with: twelve
    /// segments totalling 33.5 seconds, including one fall event.
    #[must_use]
    pub fn default_loop() -> Self {
        use ActivityKind::*;
        use RiskLevel::*;
        let entries = vec![
            ScheduleEntry::new(Standing, 3000, Safe),
            ScheduleEntry::new(Walking, 5000, Safe),
            ScheduleEntry::new(Walking, 2000, Caution),
            ScheduleEntry::new(Standing, 2000, Safe),
            ScheduleEntry::new(Sitting, 4000, Safe),
            ScheduleEntry::new(Standing, 2000, Caution),
            ScheduleEntry::new(Walking, 3000, Safe),
            ScheduleEntry::new(Falling, 1500, Danger),
            ScheduleEntry::new(Lying, 3000, Caution),
            ScheduleEntry::new(Sitting, 2000, Safe),
            ScheduleEntry::new(Standing, 2000, Safe),
            ScheduleEntry::new(Walking, 4000, Safe),
        ];
        // Construction over literal positive durations cannot fail.
        Self::new(entries).expect("default schedule is well-formed")
    }

    /// Total loop duration `D` in milliseconds.
    #[must_use]
    pub fn total_duration_ms(&self) -> u64 {
        self.total_ms
    }

    /// The schedule entries in loop order.
    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Resolves an absolute query time to its containing segment.
    ///
    /// The time wraps modulo `D`, then a linear scan accumulates elapsed
    /// durations until the containing segment is found. A time landing
    /// exactly on a boundary belongs to the segment that starts there, so
    /// `progress` is always in `[0, 1)`.
    ///
    /// The trailing fallback (idle, safe, progress 0) is unreachable while
    /// the coverage invariant holds, but is kept as a safety net rather
    /// than a panic path.
    #[must_use]
    pub fn resolve(&self, time_ms: u64) -> ActivityAt {
        let normalized = time_ms % self.total_ms;
        let mut elapsed: u64 = 0;

        for entry in &self.entries {
            if normalized < elapsed + entry.duration_ms {
                let progress = (normalized - elapsed) as f64 / entry.duration_ms as f64;
                return ActivityAt {
                    activity: entry.activity,
                    risk_level: entry.risk_level,
                    progress,
                };
            }
            elapsed += entry.duration_ms;
        }

        ActivityAt {
            activity: ActivityKind::Idle,
            risk_level: RiskLevel::Safe,
            progress: 0.0,
        }
    }
}
