//! The monitoring session: simulator plus cached view data.
//!
//! A rendering consumer polls the session every animation frame. The
//! session owns the simulator, applies the playback reducer, and caches
//! the latest prediction, the expanded timeline, and whichever analysis
//! summary the active panel needs, so the renderer only ever reads.

use tracing::{debug, info};

use eldermotion_sim::analysis::{
    generate_baseline_drift, generate_caregiver_alerts, generate_motion_biography,
    generate_risk_score, BaselineDrift, CaregiverAlerts, MotionBiography, RiskScore,
};
use eldermotion_sim::{JointRotations, MotionPrediction, MotionSimulator, TimelineSegment};

use crate::error::{PlaybackError, PlaybackResult};
use crate::state::{reduce, AnalysisMode, PlaybackAction, PlaybackState};

/// Session state for one monitored (simulated) subject.
pub struct MonitorSession {
    simulator: MotionSimulator,
    state: PlaybackState,
    timeline: Vec<TimelineSegment>,
    current_prediction: MotionPrediction,
    motion_biography: Option<MotionBiography>,
    baseline_drift: Option<BaselineDrift>,
    caregiver_alerts: Option<CaregiverAlerts>,
    risk_score: Option<RiskScore>,
}

impl MonitorSession {
    /// Opens a session over the given simulator, primed with the
    /// prediction and timeline for time zero.
    #[must_use]
    pub fn new(mut simulator: MotionSimulator) -> Self {
        let timeline = simulator.timeline();
        let current_prediction = simulator.prediction_at(0);
        Self {
            simulator,
            state: PlaybackState::default(),
            timeline,
            current_prediction,
            motion_biography: None,
            baseline_drift: None,
            caregiver_alerts: None,
            risk_score: None,
        }
    }

    /// Session over the scripted demo loop.
    #[must_use]
    pub fn default_loop() -> Self {
        Self::new(MotionSimulator::default_loop())
    }

    /// Applies a playback action and refreshes the affected caches.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidSpeed`] for a non-finite or
    /// non-positive speed; the state is left unchanged in that case.
    pub fn dispatch(&mut self, action: PlaybackAction) -> PlaybackResult<()> {
        if let PlaybackAction::SetSpeed { speed } = action {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(PlaybackError::InvalidSpeed { speed });
            }
        }

        let total_ms = self.simulator.total_duration_ms();
        let previous = self.state;
        self.state = reduce(&previous, &action, total_ms);

        if self.state.current_time_ms != previous.current_time_ms {
            self.current_prediction = self.simulator.prediction_at(self.state.current_time_ms);
            if matches!(action, PlaybackAction::Seek { .. }) {
                debug!(time_ms = self.state.current_time_ms, "seeked playback");
            }
        }

        if self.state.analysis_mode != previous.analysis_mode {
            info!(mode = ?self.state.analysis_mode, "analysis panel changed");
            self.refresh_analysis();
        }

        Ok(())
    }

    /// Recomputes the summary backing the active analysis panel.
    ///
    /// The timeline is static, so each summary is computed at most once
    /// per panel activation rather than reactively.
    fn refresh_analysis(&mut self) {
        match self.state.analysis_mode {
            Some(AnalysisMode::MotionBiography) => {
                self.motion_biography = Some(generate_motion_biography(&self.timeline));
            }
            Some(AnalysisMode::BaselineDrift) => {
                self.baseline_drift = Some(generate_baseline_drift(&self.timeline));
            }
            Some(AnalysisMode::CaregiverAlerts) => {
                self.caregiver_alerts = Some(generate_caregiver_alerts(&self.timeline));
            }
            Some(AnalysisMode::RiskScore) => {
                self.risk_score = Some(generate_risk_score(&self.timeline));
            }
            None => {}
        }
    }

    /// Avatar pose for the current playback position.
    #[must_use]
    pub fn current_pose(&self) -> JointRotations {
        let at = self.simulator.current_activity(self.state.current_time_ms);
        self.simulator
            .joint_rotations(at.activity, self.state.current_time_ms, at.progress)
    }

    /// Current playback state.
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Latest cached prediction.
    #[must_use]
    pub fn current_prediction(&self) -> &MotionPrediction {
        &self.current_prediction
    }

    /// The expanded timeline (cached once; the schedule never changes).
    #[must_use]
    pub fn timeline(&self) -> &[TimelineSegment] {
        &self.timeline
    }

    /// Total loop duration in milliseconds.
    #[must_use]
    pub fn total_duration_ms(&self) -> u64 {
        self.simulator.total_duration_ms()
    }

    /// Cached biography, present after that panel has been activated.
    #[must_use]
    pub fn motion_biography(&self) -> Option<&MotionBiography> {
        self.motion_biography.as_ref()
    }

    /// Cached drift summary, present after that panel has been activated.
    #[must_use]
    pub fn baseline_drift(&self) -> Option<&BaselineDrift> {
        self.baseline_drift.as_ref()
    }

    /// Cached caregiver alerts, present after that panel has been activated.
    #[must_use]
    pub fn caregiver_alerts(&self) -> Option<&CaregiverAlerts> {
        self.caregiver_alerts.as_ref()
    }

    /// Cached risk score, present after that panel has been activated.
    #[must_use]
    pub fn risk_score(&self) -> Option<&RiskScore> {
        self.risk_score.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eldermotion_sim::{ActivityKind, ActivitySchedule};

    fn seeded_session() -> MonitorSession {
        MonitorSession::new(MotionSimulator::with_seed(
            ActivitySchedule::default_loop(),
            7,
        ))
    }

    #[test]
    fn new_session_is_primed() {
        let session = seeded_session();
        assert_eq!(session.state().current_time_ms, 0);
        assert_eq!(session.current_prediction().timestamp_ms, 0);
        assert_eq!(session.timeline().len(), 12);
    }

    #[test]
    fn tick_refreshes_prediction() {
        let mut session = seeded_session();
        session
            .dispatch(PlaybackAction::Tick { delta_ms: 4000 })
            .unwrap();
        assert_eq!(session.state().current_time_ms, 4000);
        assert_eq!(session.current_prediction().timestamp_ms, 4000);
        assert_eq!(
            session.current_prediction().activity,
            ActivityKind::Walking
        );
    }

    #[test]
    fn seek_past_loop_end_wraps() {
        let mut session = seeded_session();
        let total = session.total_duration_ms();
        session
            .dispatch(PlaybackAction::Seek { time_ms: total + 100 })
            .unwrap();
        assert_eq!(session.state().current_time_ms, 100);
    }

    #[test]
    fn invalid_speed_rejected_without_state_change() {
        let mut session = seeded_session();
        let before = *session.state();
        let err = session
            .dispatch(PlaybackAction::SetSpeed { speed: f64::NAN })
            .unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidSpeed { .. }));
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn activating_panel_populates_only_its_cache() {
        let mut session = seeded_session();
        session
            .dispatch(PlaybackAction::SetAnalysisMode(Some(AnalysisMode::RiskScore)))
            .unwrap();

        let risk = session.risk_score().expect("risk score cached");
        assert_eq!(risk.overall, 35);
        assert!(session.motion_biography().is_none());
        assert!(session.baseline_drift().is_none());
        assert!(session.caregiver_alerts().is_none());
    }

    #[test]
    fn clearing_panel_keeps_previous_cache() {
        let mut session = seeded_session();
        session
            .dispatch(PlaybackAction::SetAnalysisMode(Some(
                AnalysisMode::CaregiverAlerts,
            )))
            .unwrap();
        session
            .dispatch(PlaybackAction::SetAnalysisMode(None))
            .unwrap();
        assert!(session.caregiver_alerts().is_some());
    }

    #[test]
    fn current_pose_tracks_playback_position() {
        let mut session = seeded_session();
        session
            .dispatch(PlaybackAction::Seek { time_ms: 10_000 })
            .unwrap();
        // 10_000 ms sits in the sitting segment; sitting pins knee flexion.
        let pose = session.current_pose();
        assert_eq!(pose.left_knee.x, 1.5);
    }

    #[test]
    fn pause_freezes_prediction() {
        let mut session = seeded_session();
        session.dispatch(PlaybackAction::Pause).unwrap();
        session
            .dispatch(PlaybackAction::Tick { delta_ms: 1000 })
            .unwrap();
        assert_eq!(session.current_prediction().timestamp_ms, 0);
    }
}
