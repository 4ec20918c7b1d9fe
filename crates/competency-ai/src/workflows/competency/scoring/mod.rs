mod classifier;
mod collectors;
mod config;
mod recommendations;

pub use collectors::{ConstantSignal, FactorSignal, SeniorityLadder, DEFAULT_PROJECT_SCORE};
pub use config::{
    DemandTable, FactorWeights, RecommendationPolicy, ScoringConfig, ScoringConfigError,
    DEFAULT_DEMAND_MULTIPLIER,
};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{EmployeeId, EmployeeSnapshot, FactorKind, PerformanceLevel};

/// Stateless scorer applying an immutable [`ScoringConfig`] to employee snapshots.
#[derive(Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    project_signal: Arc<dyn FactorSignal>,
    collaboration_signal: Arc<dyn FactorSignal>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        Self::with_signals(
            config,
            Arc::new(ConstantSignal::default()),
            Arc::new(SeniorityLadder::default()),
        )
    }

    /// Rejects configurations whose weights or demand multipliers fail validation.
    ///
    /// Swap in real project and collaboration telemetry without touching aggregation.
    pub fn with_signals(
        config: ScoringConfig,
        project_signal: Arc<dyn FactorSignal>,
        collaboration_signal: Arc<dyn FactorSignal>,
    ) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            project_signal,
            collaboration_signal,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn factor_scores(&self, snapshot: &EmployeeSnapshot) -> FactorScores {
        let demand = &self.config.demand;

        FactorScores {
            skill_proficiency: collectors::skill_proficiency(&snapshot.skills, demand),
            certifications: collectors::certification(&snapshot.certifications),
            learning_velocity: collectors::learning_velocity(
                &snapshot.learning,
                &snapshot.enrollments,
            ),
            practical_application: collectors::practical_application(
                snapshot.experience_years,
                self.project_signal.score(snapshot),
            ),
            industry_relevance: collectors::industry_relevance(&snapshot.skills, demand),
            peer_collaboration: self.collaboration_signal.score(snapshot),
        }
    }

    pub fn score(&self, snapshot: &EmployeeSnapshot) -> CompetencyScore {
        let scores = self.factor_scores(snapshot);
        let overall = scores.aggregate(&self.config.weights);

        CompetencyScore {
            employee_id: snapshot.employee_id.clone(),
            overall,
            breakdown: scores.breakdown(),
            performance_level: classifier::classify(overall),
            recommendations: recommendations::recommend(&scores, &self.config.recommendations),
        }
    }
}

/// Unrounded sub-scores for a single computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub skill_proficiency: f64,
    pub certifications: f64,
    pub learning_velocity: f64,
    pub practical_application: f64,
    pub industry_relevance: f64,
    pub peer_collaboration: f64,
}

impl FactorScores {
    pub fn get(&self, factor: FactorKind) -> f64 {
        match factor {
            FactorKind::SkillProficiency => self.skill_proficiency,
            FactorKind::Certifications => self.certifications,
            FactorKind::LearningVelocity => self.learning_velocity,
            FactorKind::PracticalApplication => self.practical_application,
            FactorKind::IndustryRelevance => self.industry_relevance,
            FactorKind::PeerCollaboration => self.peer_collaboration,
        }
    }

    /// Weighted total truncated toward zero and clamped to [0,100].
    pub fn aggregate(&self, weights: &FactorWeights) -> u8 {
        let total: f64 = FactorKind::ALL
            .iter()
            .map(|factor| self.get(*factor) * weights.weight(*factor))
            .sum();

        if !total.is_finite() {
            return 0;
        }
        total.floor().clamp(0.0, 100.0) as u8
    }

    /// Sub-scores rounded to one decimal place for reporting.
    pub fn breakdown(&self) -> BTreeMap<FactorKind, f64> {
        FactorKind::ALL
            .iter()
            .map(|factor| (*factor, round_tenths(self.get(*factor))))
            .collect()
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Map an overall score onto the performance ladder.
pub fn performance_level(overall: u8) -> PerformanceLevel {
    classifier::classify(overall)
}

/// Recommendations for a set of sub-scores under `policy`.
pub fn recommendations_for(scores: &FactorScores, policy: &RecommendationPolicy) -> Vec<String> {
    recommendations::recommend(scores, policy)
}

/// Final scoring result handed to dashboards and analytics consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyScore {
    pub employee_id: EmployeeId,
    pub overall: u8,
    pub breakdown: BTreeMap<FactorKind, f64>,
    pub performance_level: PerformanceLevel,
    pub recommendations: Vec<String>,
}

impl CompetencyScore {
    pub fn factor(&self, factor: FactorKind) -> Option<f64> {
        self.breakdown.get(&factor).copied()
    }
}
