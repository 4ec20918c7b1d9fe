//! Employee competency scoring: factor collectors, weighted aggregation, performance tiers,
//! and rule-based improvement recommendations.
//!
//! Raw facts arrive through [`EmployeeDataProvider`]; the [`ScoringEngine`] is a pure function of
//! those facts and its immutable [`ScoringConfig`], so results for different employees can be
//! computed concurrently without coordination.

pub mod directory;
pub mod domain;
pub mod provider;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use directory::{
    CertificationRecord, CertificationStatus, EmployeeDirectory, EmployeeRecord,
    EnrollmentRecord, EnrollmentStatus, LearningActivity,
};
pub use domain::{
    CertificationSummary, EmployeeId, EmployeeSnapshot, EnrollmentSummary, FactorKind,
    LearningHours, PerformanceLevel, SkillAssignment,
};
pub use provider::{EmployeeDataProvider, EmployeeRoster, ProviderError, LEARNING_WINDOW_MONTHS};
pub use router::competency_router;
pub use scoring::{
    CompetencyScore, ConstantSignal, DemandTable, FactorScores, FactorSignal, FactorWeights,
    RecommendationPolicy, ScoringConfig, ScoringConfigError, ScoringEngine, SeniorityLadder,
};
pub use service::{CompetencyService, CompetencyServiceError, CompetencySummary};
