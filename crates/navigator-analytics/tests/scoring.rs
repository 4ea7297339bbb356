use navigator_analytics::scoring::{
    HealthDimensions, RiskLevel, ScoreInputs, health_dimensions, risk_score, treatment_response,
};

#[test]
fn baseline_risk_is_fifty() {
    assert_eq!(risk_score(&ScoreInputs::default()), 50);
    assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
}

#[test]
fn risk_adds_every_factor() {
    let inputs = ScoreInputs {
        pain_level: Some(9),
        duration_days: Some(21),
        age: Some(70),
        complaints: "Chest pain",
    };
    assert_eq!(risk_score(&inputs), 93);
    assert_eq!(RiskLevel::from_score(93), RiskLevel::High);
}

#[test]
fn moderate_pain_and_duration_use_lower_steps() {
    let inputs = ScoreInputs {
        pain_level: Some(5),
        duration_days: Some(10),
        age: Some(30),
        complaints: "back ache",
    };
    assert_eq!(risk_score(&inputs), 62);
}

#[test]
fn age_bounds_are_exclusive() {
    let at = |age| {
        risk_score(&ScoreInputs {
            age: Some(age),
            ..ScoreInputs::default()
        })
    };
    assert_eq!(at(11), 58);
    assert_eq!(at(12), 50);
    assert_eq!(at(65), 50);
    assert_eq!(at(66), 58);
}

#[test]
fn high_risk_terms_count_once() {
    let inputs = ScoreInputs {
        complaints: "short of breath, breathing hard, fever",
        ..ScoreInputs::default()
    };
    assert_eq!(risk_score(&inputs), 60);
}

#[test]
fn risk_levels_split_at_forty_and_seventy() {
    assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
}

#[test]
fn treatment_response_needs_pain() {
    assert!(treatment_response(None, Some(200)).is_none());
}

#[test]
fn treatment_response_at_mid_pain() {
    let r = treatment_response(Some(5), None).unwrap();
    assert_eq!(
        (r.medication, r.physical_therapy, r.surgery, r.lifestyle, r.counseling),
        (60, 50, 80, 40, 45)
    );
}

#[test]
fn chronic_duration_shifts_response() {
    let r = treatment_response(Some(8), Some(120)).unwrap();
    assert_eq!(r.medication, 42);
    assert_eq!(r.physical_therapy, 45);
    assert_eq!(r.lifestyle, 30);
    assert_eq!(r.counseling, 54);
    assert_eq!(r.surgery, 80);
}

#[test]
fn health_dimensions_without_data() {
    let dims = health_dimensions(&ScoreInputs::default(), false);
    assert_eq!(dims.values(), [5, 7, 8, 7, 6, 5]);
    assert_eq!(health_dimensions(&ScoreInputs::default(), true).treatment_response, 7);
    assert_eq!(HealthDimensions::LABELS.len(), dims.values().len());
}

#[test]
fn health_dimensions_drop_with_pain_and_complaints() {
    let inputs = ScoreInputs {
        pain_level: Some(8),
        duration_days: Some(20),
        age: None,
        complaints: "Trouble sleeping, leg stress",
    };
    let dims = health_dimensions(&inputs, false);
    assert_eq!(dims.pain_management, 2);
    assert_eq!(dims.mobility, 2);
    assert_eq!(dims.daily_function, 3);
    assert_eq!(dims.mental_health, 4);
    assert_eq!(dims.sleep_quality, 1);
}
