//! Composite risk scoring.

use crate::types::{ActivityKind, TimelineSegment};

/// The three weighted components of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskComponents {
    /// Falling segments x 20.
    pub fall_risk: u32,
    /// Idle segments x 10.
    pub mobility_decline: u32,
    /// Sitting-or-lying segments x 5.
    pub inactivity_risk: u32,
}

/// Composite risk score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskScore {
    /// Component sum clamped to 100.
    pub overall: u32,
    pub components: RiskComponents,
}

/// Counts segments matching each predicate, applies the fixed weights
/// (20/10/5), and clamps the sum to 100.
#[must_use]
pub fn generate_risk_score(timeline: &[TimelineSegment]) -> RiskScore {
    let count = |pred: fn(&TimelineSegment) -> bool| -> u32 {
        timeline.iter().filter(|seg| pred(seg)).count() as u32
    };

    let components = RiskComponents {
        fall_risk: count(|seg| seg.activity.is_fall()) * 20,
        mobility_decline: count(|seg| seg.activity == ActivityKind::Idle) * 10,
        inactivity_risk: count(|seg| seg.activity.is_sedentary()) * 5,
    };

    let overall = (components.fall_risk + components.mobility_decline + components.inactivity_risk)
        .min(100);

    RiskScore {
        overall,
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ActivitySchedule;
    use crate::timeline::build_timeline;
    use crate::types::RiskLevel;

    #[test]
    fn default_timeline_score() {
        let timeline = build_timeline(&ActivitySchedule::default_loop());
        let score = generate_risk_score(&timeline);

        // One fall, no idle segments, three sitting/lying segments.
        assert_eq!(score.components.fall_risk, 20);
        assert_eq!(score.components.mobility_decline, 0);
        assert_eq!(score.components.inactivity_risk, 15);
        assert_eq!(score.overall, 35);
    }

    #[test]
    fn overall_is_clamped_component_sum() {
        let mut timeline = Vec::new();
        for i in 0..10 {
            timeline.push(TimelineSegment {
                start_ms: i * 1000,
                end_ms: (i + 1) * 1000,
                activity: ActivityKind::Falling,
                risk_level: RiskLevel::Danger,
                predictions: Vec::new(),
            });
        }
        let score = generate_risk_score(&timeline);
        assert_eq!(score.components.fall_risk, 200);
        assert_eq!(score.overall, 100);
    }

    #[test]
    fn empty_timeline_scores_zero() {
        let score = generate_risk_score(&[]);
        assert_eq!(score.overall, 0);
        assert_eq!(score.components.fall_risk, 0);
    }
}
