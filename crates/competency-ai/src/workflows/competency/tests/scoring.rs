use std::sync::Arc;

use super::common::*;
use crate::workflows::competency::domain::{
    CertificationSummary, EmployeeSnapshot, EnrollmentSummary, FactorKind, LearningHours,
    PerformanceLevel, SkillAssignment,
};
use crate::workflows::competency::scoring::{
    ConstantSignal, DemandTable, FactorScores, FactorSignal, FactorWeights, RecommendationPolicy,
    ScoringConfig, ScoringConfigError, ScoringEngine, SeniorityLadder,
};

#[test]
fn weighted_skill_example_matches_hand_calculation() {
    let mut snapshot = blank_snapshot("Engineer");
    snapshot.skills = vec![
        SkillAssignment::new("AI/ML", 90),
        SkillAssignment::new("Programming", 70),
    ];

    let scores = engine().factor_scores(&snapshot);

    assert!(approx(scores.skill_proficiency, 194.0 / 2.4));
    assert!(approx(scores.industry_relevance, 97.0));

    let score = engine().score(&snapshot);
    assert_eq!(score.factor(FactorKind::SkillProficiency), Some(80.8));
}

#[test]
fn empty_record_degrades_to_low_score_with_all_recommendations() {
    let score = engine().score(&blank_snapshot("Analyst"));

    assert_eq!(score.factor(FactorKind::SkillProficiency), Some(0.0));
    assert_eq!(score.factor(FactorKind::IndustryRelevance), Some(0.0));
    assert_eq!(score.factor(FactorKind::PracticalApplication), Some(30.0));
    assert_eq!(score.factor(FactorKind::PeerCollaboration), Some(65.0));
    assert_eq!(score.overall, 7);
    assert_eq!(score.performance_level, PerformanceLevel::NeedsImprovement);
    assert_eq!(score.recommendations.len(), 5);
}

#[test]
fn breakdown_lists_every_factor_in_declaration_order() {
    let score = engine().score(&blank_snapshot("Analyst"));
    let factors: Vec<FactorKind> = score.breakdown.keys().copied().collect();
    assert_eq!(factors, FactorKind::ALL.to_vec());
}

#[test]
fn aggregate_clamps_when_relevance_overflows() {
    let scores = FactorScores {
        skill_proficiency: 100.0,
        certifications: 100.0,
        learning_velocity: 100.0,
        practical_application: 100.0,
        industry_relevance: 130.0,
        peer_collaboration: 100.0,
    };
    assert_eq!(scores.aggregate(&FactorWeights::default()), 100);

    let broken = FactorScores {
        learning_velocity: f64::NAN,
        ..scores
    };
    assert_eq!(broken.aggregate(&FactorWeights::default()), 0);
}

#[test]
fn aggregate_truncates_rather_than_rounds() {
    let scores = FactorScores {
        skill_proficiency: 79.99,
        certifications: 79.99,
        learning_velocity: 79.99,
        practical_application: 79.99,
        industry_relevance: 79.99,
        peer_collaboration: 79.99,
    };
    assert_eq!(scores.aggregate(&FactorWeights::default()), 79);
}

#[test]
fn alternate_weights_change_only_the_aggregate() {
    let snapshot = EmployeeSnapshot {
        certifications: CertificationSummary {
            active_count: 7,
            expiring_count: 0,
        },
        ..blank_snapshot("Analyst")
    };
    let config = ScoringConfig {
        weights: FactorWeights {
            skill_proficiency: 0.0,
            certifications: 1.0,
            learning_velocity: 0.0,
            practical_application: 0.0,
            industry_relevance: 0.0,
            peer_collaboration: 0.0,
        },
        ..ScoringConfig::default()
    };

    let default_score = engine().score(&snapshot);
    let certification_only = ScoringEngine::new(config)
        .expect("config is valid")
        .score(&snapshot);

    assert_eq!(certification_only.overall, 100);
    assert_eq!(certification_only.performance_level, PerformanceLevel::Exceptional);
    assert_eq!(certification_only.breakdown, default_score.breakdown);
    assert_eq!(certification_only.recommendations, default_score.recommendations);
}

#[test]
fn learning_velocity_flows_into_breakdown() {
    let snapshot = EmployeeSnapshot {
        learning: LearningHours { recent_hours: 25.0 },
        enrollments: EnrollmentSummary {
            total_enrollments: 3,
            completed_count: 3,
            average_progress: 100.0,
        },
        ..blank_snapshot("Analyst")
    };

    let score = engine().score(&snapshot);
    assert_eq!(score.factor(FactorKind::LearningVelocity), Some(80.0));
    assert!(!score
        .recommendations
        .iter()
        .any(|message| message.starts_with("Increase learning activity")));
}

struct TelemetrySignal;

impl FactorSignal for TelemetrySignal {
    fn score(&self, snapshot: &EmployeeSnapshot) -> f64 {
        if snapshot.employee_id.as_str() == "snap-1" {
            100.0
        } else {
            0.0
        }
    }
}

#[test]
fn signals_can_be_substituted() {
    let engine = ScoringEngine::with_signals(
        ScoringConfig::default(),
        Arc::new(ConstantSignal(0.0)),
        Arc::new(TelemetrySignal),
    )
    .expect("default config is valid");

    let score = engine.score(&blank_snapshot("Analyst"));

    assert_eq!(score.factor(FactorKind::PracticalApplication), Some(0.0));
    assert_eq!(score.factor(FactorKind::PeerCollaboration), Some(100.0));
    assert!(!score
        .recommendations
        .iter()
        .any(|message| message.starts_with("Engage more in team activities")));
}

#[test]
fn custom_seniority_ladder_is_honored() {
    let ladder = SeniorityLadder::new([("Principal", 95.0)], 50.0);
    let engine = ScoringEngine::with_signals(
        ScoringConfig::default(),
        Arc::new(ConstantSignal::default()),
        Arc::new(ladder),
    )
    .expect("default config is valid");

    let principal = engine.score(&blank_snapshot("Principal Engineer"));
    let senior = engine.score(&blank_snapshot("Senior Engineer"));

    assert_eq!(principal.factor(FactorKind::PeerCollaboration), Some(95.0));
    assert_eq!(senior.factor(FactorKind::PeerCollaboration), Some(50.0));
}

#[test]
fn practical_application_recommendation_requires_opt_in() {
    let snapshot = blank_snapshot("Analyst");
    let default_score = engine().score(&snapshot);

    let config = ScoringConfig {
        recommendations: RecommendationPolicy {
            include_practical_application: true,
        },
        ..ScoringConfig::default()
    };
    let opted_in = ScoringEngine::new(config)
        .expect("config is valid")
        .score(&snapshot);

    assert_eq!(default_score.recommendations.len(), 5);
    assert_eq!(opted_in.recommendations.len(), 6);
    assert_eq!(
        opted_in.recommendations[3],
        "Seek project assignments that put your experience into practice"
    );
}

#[test]
fn identical_snapshots_produce_identical_output() {
    let mut snapshot = blank_snapshot("Senior Engineer");
    snapshot.experience_years = 7.5;
    snapshot.skills = vec![
        SkillAssignment::new("Cloud", 82),
        SkillAssignment::new("Design", 64),
        SkillAssignment::new("Unlisted", 40),
    ];

    let first = serde_json::to_string(&engine().score(&snapshot)).expect("serialize");
    let second = serde_json::to_string(&engine().score(&snapshot.clone())).expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn engine_rejects_weights_that_do_not_sum_to_one() {
    let config = ScoringConfig {
        weights: FactorWeights {
            skill_proficiency: 1.0,
            certifications: 1.0,
            learning_velocity: 1.0,
            practical_application: 1.0,
            industry_relevance: 1.0,
            peer_collaboration: 1.0,
        },
        ..ScoringConfig::default()
    };

    match ScoringEngine::new(config.clone()) {
        Err(ScoringConfigError::WeightSum { sum }) => assert!(approx(sum, 6.0)),
        Err(other) => panic!("expected weight sum error, got {other:?}"),
        Ok(_) => panic!("inflated weights must not build an engine"),
    }
    assert!(ScoringEngine::with_signals(
        config,
        Arc::new(ConstantSignal::default()),
        Arc::new(SeniorityLadder::default()),
    )
    .is_err());
}

#[test]
fn engine_rejects_discounted_demand_multipliers() {
    let config = ScoringConfig {
        demand: DemandTable::from_entries([("Cloud", 1.25), ("Legacy", 0.4)]),
        ..ScoringConfig::default()
    };

    assert!(matches!(
        ScoringEngine::new(config),
        Err(ScoringConfigError::InvalidMultiplier { .. })
    ));
}
