//! End-to-end checks of the simulator surface: periodicity, timeline
//! coverage, the fall collapse, and the analysis reducers over the default
//! schedule.

use eldermotion_sim::analysis::{
    generate_baseline_drift, generate_caregiver_alerts, generate_motion_biography,
    generate_risk_score, AlertKind, DriftLevel,
};
use eldermotion_sim::{
    build_timeline, ActivityKind, ActivitySchedule, MotionSimulator, RiskLevel,
};

#[test]
fn progress_always_in_unit_interval() {
    let sim = MotionSimulator::default_loop();
    let d = sim.total_duration_ms();
    for time in (0..3 * d).step_by(113) {
        let at = sim.current_activity(time);
        assert!(at.progress >= 0.0 && at.progress < 1.0, "t={time}");
    }
}

#[test]
fn activity_is_periodic_in_loop_duration() {
    let sim = MotionSimulator::default_loop();
    let d = sim.total_duration_ms();
    for time in (0..d).step_by(251) {
        let a = sim.current_activity(time);
        let b = sim.current_activity(time + d);
        let c = sim.current_activity(time + 7 * d);
        assert_eq!(a.activity, b.activity);
        assert_eq!(a.risk_level, b.risk_level);
        assert_eq!(a.activity, c.activity);
    }
}

#[test]
fn scripted_opening_is_standing_safe() {
    let sim = MotionSimulator::default_loop();
    let at = sim.current_activity(0);
    assert_eq!(at.activity, ActivityKind::Standing);
    assert_eq!(at.risk_level, RiskLevel::Safe);
    assert_eq!(at.progress, 0.0);
}

#[test]
fn fall_begins_exactly_at_segment_boundary() {
    let sim = MotionSimulator::default_loop();
    // Seven segments precede the fall: 3000 + 5000 + 2000 + 2000 + 4000
    // + 2000 + 3000 = 21_000 ms.
    assert_eq!(sim.current_activity(20_999).activity, ActivityKind::Walking);
    assert_eq!(sim.current_activity(21_000).activity, ActivityKind::Falling);
}

#[test]
fn timeline_tiles_the_loop() {
    let schedule = ActivitySchedule::default_loop();
    let timeline = build_timeline(&schedule);

    assert_eq!(timeline[0].start_ms, 0);
    assert_eq!(
        timeline.last().unwrap().end_ms,
        schedule.total_duration_ms()
    );
    for pair in timeline.windows(2) {
        assert_eq!(pair[0].end_ms, pair[1].start_ms);
    }
    // Structural idempotence.
    assert_eq!(timeline, build_timeline(&schedule));
}

#[test]
fn fall_pose_collapse_monotone_then_saturated() {
    let sim = MotionSimulator::default_loop();

    // At time 0 the chaos term vanishes, isolating the collapse blend.
    let mut prev_hip = -1.0;
    let mut prev_shoulder = -1.0;
    for step in 0..=10 {
        let progress = step as f64 * 0.05;
        let pose = sim.joint_rotations(ActivityKind::Falling, 0, progress);
        assert!(pose.hip.x >= prev_hip);
        assert!(pose.left_shoulder.x >= prev_shoulder);
        prev_hip = pose.hip.x;
        prev_shoulder = pose.left_shoulder.x;
    }

    // Beyond half progress the collapse has fully saturated.
    let half = sim.joint_rotations(ActivityKind::Falling, 0, 0.5);
    let late = sim.joint_rotations(ActivityKind::Falling, 0, 0.99);
    assert_eq!(half, late);
    assert_eq!(half.hip.x, 1.2);
    assert_eq!(half.left_shoulder.x, 1.5);
}

#[test]
fn analysis_suite_over_default_timeline() {
    let timeline = build_timeline(&ActivitySchedule::default_loop());

    let bio = generate_motion_biography(&timeline);
    assert!(!bio.narratives.is_empty());

    let drift = generate_baseline_drift(&timeline);
    assert!(drift.drift_score <= 3);
    assert_eq!(drift.drift_level, DriftLevel::Stable);

    let alerts = generate_caregiver_alerts(&timeline);
    assert!(!alerts.alerts.is_empty());
    assert!(alerts
        .alerts
        .iter()
        .any(|a| a.kind == AlertKind::AssistanceNeeded));

    let risk = generate_risk_score(&timeline);
    assert_eq!(
        risk.overall,
        (risk.components.fall_risk
            + risk.components.mobility_decline
            + risk.components.inactivity_risk)
            .min(100)
    );
    assert_eq!(risk.overall, 35);
}

#[test]
fn seeded_simulators_agree() {
    let mut a = MotionSimulator::with_seed(ActivitySchedule::default_loop(), 123);
    let mut b = MotionSimulator::with_seed(ActivitySchedule::default_loop(), 123);
    for time in (0..10_000).step_by(333) {
        assert_eq!(a.prediction_at(time), b.prediction_at(time));
    }
}
