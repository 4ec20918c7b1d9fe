use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{EmployeeId, PerformanceLevel};
use super::provider::{EmployeeDataProvider, EmployeeRoster, ProviderError};
use super::scoring::{CompetencyScore, ScoringConfig, ScoringConfigError, ScoringEngine};

/// Service composing a data provider with the scoring engine.
pub struct CompetencyService<P> {
    provider: Arc<P>,
    engine: Arc<ScoringEngine>,
}

impl<P> Clone for CompetencyService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<P> CompetencyService<P>
where
    P: EmployeeDataProvider + 'static,
{
    pub fn new(provider: Arc<P>, config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        Ok(Self::with_engine(provider, ScoringEngine::new(config)?))
    }

    pub fn with_engine(provider: Arc<P>, engine: ScoringEngine) -> Self {
        Self {
            provider,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Score a single employee.
    pub fn compute_score(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<CompetencyScore, CompetencyServiceError> {
        let snapshot = self.provider.snapshot_of(employee_id)?;
        let score = self.engine.score(&snapshot);

        debug!(
            employee_id = %employee_id,
            overall = score.overall,
            level = score.performance_level.label(),
            recommendations = score.recommendations.len(),
            "computed competency score"
        );

        Ok(score)
    }
}

impl<P> CompetencyService<P>
where
    P: EmployeeDataProvider + EmployeeRoster + 'static,
{
    /// Score every employee the provider can enumerate, in id order.
    ///
    /// Employees that disappear between enumeration and lookup are skipped.
    pub fn score_all(&self) -> Result<Vec<CompetencyScore>, CompetencyServiceError> {
        let mut scores = Vec::new();
        for employee_id in self.provider.employee_ids()? {
            match self.compute_score(&employee_id) {
                Ok(score) => scores.push(score),
                Err(CompetencyServiceError::Provider(ProviderError::EmployeeNotFound(id))) => {
                    warn!(employee_id = %id, "employee vanished during batch scoring");
                }
                Err(other) => return Err(other),
            }
        }
        Ok(scores)
    }

    pub fn summary(&self) -> Result<CompetencySummary, CompetencyServiceError> {
        let scores = self.score_all()?;
        Ok(CompetencySummary::from_scores(&scores))
    }
}

/// Headcount, mean score, and tier distribution across a set of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencySummary {
    pub headcount: usize,
    pub average_overall: f64,
    pub level_distribution: BTreeMap<PerformanceLevel, usize>,
}

impl CompetencySummary {
    pub fn from_scores(scores: &[CompetencyScore]) -> Self {
        let mut level_distribution: BTreeMap<PerformanceLevel, usize> = PerformanceLevel::ALL
            .iter()
            .map(|level| (*level, 0))
            .collect();
        for score in scores {
            *level_distribution.entry(score.performance_level).or_insert(0) += 1;
        }

        let headcount = scores.len();
        let average_overall = if headcount == 0 {
            0.0
        } else {
            let total: u32 = scores.iter().map(|score| u32::from(score.overall)).sum();
            f64::from(total) / headcount as f64
        };

        Self {
            headcount,
            average_overall,
            level_distribution,
        }
    }
}

/// Error raised by the competency service.
#[derive(Debug, thiserror::Error)]
pub enum CompetencyServiceError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl CompetencyServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CompetencyServiceError::Provider(ProviderError::EmployeeNotFound(_))
        )
    }
}
