use super::super::domain::FactorKind;
use super::config::RecommendationPolicy;
use super::FactorScores;

pub(crate) const FALLBACK_RECOMMENDATION: &str =
    "Maintain your excellent performance and consider leadership opportunities";

/// A sub-score strictly below `threshold` emits `message`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RecommendationRule {
    pub factor: FactorKind,
    pub threshold: f64,
    pub message: &'static str,
}

static RULES: [RecommendationRule; 6] = [
    RecommendationRule {
        factor: FactorKind::SkillProficiency,
        threshold: 75.0,
        message: "Focus on improving core technical skills through hands-on practice",
    },
    RecommendationRule {
        factor: FactorKind::Certifications,
        threshold: 60.0,
        message: "Consider pursuing industry-recognized certifications in your field",
    },
    RecommendationRule {
        factor: FactorKind::LearningVelocity,
        threshold: 70.0,
        message: "Increase learning activity by enrolling in more courses or training programs",
    },
    RecommendationRule {
        factor: FactorKind::PracticalApplication,
        threshold: 70.0,
        message: "Seek project assignments that put your experience into practice",
    },
    RecommendationRule {
        factor: FactorKind::IndustryRelevance,
        threshold: 80.0,
        message: "Focus on high-demand skills like AI/ML, Cloud Computing, or DevOps",
    },
    RecommendationRule {
        factor: FactorKind::PeerCollaboration,
        threshold: 75.0,
        message: "Engage more in team activities, mentoring, and knowledge sharing",
    },
];

/// Rules active under `policy`, in factor declaration order.
pub(crate) fn active_rules(
    policy: &RecommendationPolicy,
) -> impl Iterator<Item = &'static RecommendationRule> {
    let include_practical = policy.include_practical_application;
    RULES.iter().filter(move |rule| {
        rule.factor != FactorKind::PracticalApplication || include_practical
    })
}

pub(crate) fn recommend(scores: &FactorScores, policy: &RecommendationPolicy) -> Vec<String> {
    let mut recommendations: Vec<String> = active_rules(policy)
        .filter(|rule| scores.get(rule.factor) < rule.threshold)
        .map(|rule| rule.message.to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(FALLBACK_RECOMMENDATION.to_string());
    }

    recommendations
}
