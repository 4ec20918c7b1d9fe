use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::FactorKind;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Multiplier applied to categories missing from the demand table.
pub const DEFAULT_DEMAND_MULTIPLIER: f64 = 1.0;

/// Immutable tables driving a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: FactorWeights,
    #[serde(default)]
    pub demand: DemandTable,
    #[serde(default)]
    pub recommendations: RecommendationPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            demand: DemandTable::default(),
            recommendations: RecommendationPolicy::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        self.weights.validate()?;
        self.demand.validate()
    }
}

/// Share of the overall score contributed by each factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub skill_proficiency: f64,
    pub certifications: f64,
    pub learning_velocity: f64,
    pub practical_application: f64,
    pub industry_relevance: f64,
    pub peer_collaboration: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            skill_proficiency: 0.35,
            certifications: 0.20,
            learning_velocity: 0.15,
            practical_application: 0.15,
            industry_relevance: 0.10,
            peer_collaboration: 0.05,
        }
    }
}

impl FactorWeights {
    pub fn weight(&self, factor: FactorKind) -> f64 {
        match factor {
            FactorKind::SkillProficiency => self.skill_proficiency,
            FactorKind::Certifications => self.certifications,
            FactorKind::LearningVelocity => self.learning_velocity,
            FactorKind::PracticalApplication => self.practical_application,
            FactorKind::IndustryRelevance => self.industry_relevance,
            FactorKind::PeerCollaboration => self.peer_collaboration,
        }
    }

    pub fn sum(&self) -> f64 {
        FactorKind::ALL
            .iter()
            .map(|factor| self.weight(*factor))
            .sum()
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for factor in FactorKind::ALL {
            let weight = self.weight(factor);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringConfigError::NegativeWeight { factor, weight });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringConfigError::WeightSum { sum });
        }

        Ok(())
    }
}

/// Market demand multiplier per skill category. Lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandTable {
    multipliers: BTreeMap<String, f64>,
}

impl Default for DemandTable {
    fn default() -> Self {
        Self::from_entries([
            ("AI/ML", 1.3),
            ("Cloud", 1.25),
            ("Programming", 1.1),
            ("Frontend", 1.05),
            ("Backend", 1.1),
            ("DevOps", 1.2),
            ("Design", 1.0),
            ("Management", 1.15),
            ("Leadership", 1.2),
        ])
    }
}

impl DemandTable {
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            multipliers: entries
                .into_iter()
                .map(|(category, multiplier)| (category.into(), multiplier))
                .collect(),
        }
    }

    pub fn multiplier(&self, category: &str) -> f64 {
        self.multipliers
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_DEMAND_MULTIPLIER)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.multipliers
            .iter()
            .map(|(category, multiplier)| (category.as_str(), *multiplier))
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for (category, multiplier) in &self.multipliers {
            if !multiplier.is_finite() || *multiplier < DEFAULT_DEMAND_MULTIPLIER {
                return Err(ScoringConfigError::InvalidMultiplier {
                    category: category.clone(),
                    multiplier: *multiplier,
                });
            }
        }
        Ok(())
    }
}

/// Controls which factors the recommendation generator inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    /// Practical application has no advisory rule unless this is set.
    #[serde(default)]
    pub include_practical_application: bool,
}

/// Rejections raised when a scoring profile is inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("factor weights must sum to 1.0 (got {sum:.4})")]
    WeightSum { sum: f64 },
    #[error("weight for {factor:?} must be a non-negative number (got {weight})")]
    NegativeWeight { factor: FactorKind, weight: f64 },
    #[error("demand multiplier for '{category}' must be at least 1.0 (got {multiplier})")]
    InvalidMultiplier { category: String, multiplier: f64 },
}
