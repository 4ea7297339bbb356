use navigator_analytics::recovery::{RECOVERY_PHASES, pain_projection, recovery_timeline};

fn weeks(pain: u8) -> Vec<u32> {
    recovery_timeline(pain).phases.iter().map(|p| p.weeks).collect()
}

#[test]
fn remainder_goes_to_last_phase() {
    let timeline = recovery_timeline(6);
    assert_eq!(timeline.total_weeks, 9);
    assert_eq!(weeks(6), vec![1, 1, 1, 1, 5]);
    let starts: Vec<_> = timeline.phases.iter().map(|p| p.start_week).collect();
    assert_eq!(starts, vec![0, 1, 2, 3, 4]);
    assert_eq!(timeline.end_week(), 9);
}

#[test]
fn total_is_clamped() {
    assert_eq!(recovery_timeline(10).total_weeks, 12);
    assert_eq!(weeks(10), vec![2, 2, 2, 2, 4]);
    assert_eq!(recovery_timeline(1).total_weeks, 3);
}

#[test]
fn short_timelines_keep_one_week_per_phase() {
    let timeline = recovery_timeline(2);
    assert_eq!(timeline.total_weeks, 3);
    assert_eq!(weeks(2), vec![1, 1, 1, 1, 1]);
    assert_eq!(timeline.end_week(), 5);
}

#[test]
fn phases_are_named_in_order() {
    let names: Vec<_> = recovery_timeline(7).phases.into_iter().map(|p| p.name).collect();
    assert_eq!(names, RECOVERY_PHASES.map(String::from).to_vec());
}

#[test]
fn pain_projection_falls_over_time() {
    let projection = pain_projection(6, None);
    assert_eq!(projection.weeks, 9);
    assert_eq!(projection.pain_by_week.len(), 10);
    assert!(projection.pain_by_week[0] < 6.0);
    assert!(projection.pain_by_week.windows(2).all(|w| w[1] < w[0]));

    let milestone_weeks: Vec<_> = projection.milestones.iter().map(|m| m.week).collect();
    assert_eq!(milestone_weeks, vec![1, 3, 6, 9]);
}

#[test]
fn half_week_milestones_round_to_even() {
    let projection = pain_projection(10, None);
    assert_eq!(projection.weeks, 15);
    let milestone_weeks: Vec<_> = projection.milestones.iter().map(|m| m.week).collect();
    assert_eq!(milestone_weeks, vec![1, 4, 10, 15]);
}

#[test]
fn chronic_projection_is_at_least_twelve_weeks() {
    assert_eq!(pain_projection(2, None).weeks, 4);
    assert_eq!(pain_projection(2, Some(100)).weeks, 12);
    assert_eq!(pain_projection(10, Some(100)).weeks, 15);
}
