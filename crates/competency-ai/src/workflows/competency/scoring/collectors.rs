use super::super::domain::{
    CertificationSummary, EmployeeSnapshot, EnrollmentSummary, LearningHours, SkillAssignment,
};
use super::config::DemandTable;

const POINTS_PER_CERTIFICATION: u32 = 15;
const EXPIRY_PENALTY_POINTS: u32 = 5;
const POINTS_PER_LEARNING_HOUR: f64 = 2.0;
const EXPERIENCE_LOG_SCALE: f64 = 20.0;
const MAX_SUBSCORE: f64 = 100.0;

/// Project contribution stand-in until delivery metrics are wired in.
pub const DEFAULT_PROJECT_SCORE: f64 = 75.0;

/// Supplies a [0,100] score for a factor that has no first-class telemetry yet.
pub trait FactorSignal: Send + Sync {
    fn score(&self, snapshot: &EmployeeSnapshot) -> f64;
}

/// Returns the same score for every employee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Default for ConstantSignal {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_SCORE)
    }
}

impl FactorSignal for ConstantSignal {
    fn score(&self, _snapshot: &EmployeeSnapshot) -> f64 {
        self.0
    }
}

/// Collaboration proxy keyed on seniority keywords in the position title.
///
/// Rungs are checked in order and the first case-sensitive substring match wins, so
/// "Senior Manager" lands on the "Senior" rung.
#[derive(Debug, Clone, PartialEq)]
pub struct SeniorityLadder {
    rungs: Vec<(String, f64)>,
    fallback: f64,
}

impl Default for SeniorityLadder {
    fn default() -> Self {
        Self::new([("Senior", 80.0), ("Lead", 90.0), ("Manager", 90.0)], 65.0)
    }
}

impl SeniorityLadder {
    pub fn new<I, K>(rungs: I, fallback: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            rungs: rungs
                .into_iter()
                .map(|(keyword, score)| (keyword.into(), score))
                .collect(),
            fallback,
        }
    }

    pub fn score_position(&self, position: &str) -> f64 {
        self.rungs
            .iter()
            .find(|(keyword, _)| position.contains(keyword.as_str()))
            .map(|(_, score)| *score)
            .unwrap_or(self.fallback)
    }
}

impl FactorSignal for SeniorityLadder {
    fn score(&self, snapshot: &EmployeeSnapshot) -> f64 {
        self.score_position(&snapshot.position)
    }
}

/// Demand-weighted average skill level.
pub(crate) fn skill_proficiency(skills: &[SkillAssignment], demand: &DemandTable) -> f64 {
    let (weighted, total_weight) =
        skills
            .iter()
            .fold((0.0_f64, 0.0_f64), |(weighted, total), assignment| {
                let weight = demand.multiplier(&assignment.category);
                (
                    weighted + f64::from(assignment.current_level) * weight,
                    total + weight,
                )
            });

    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    }
}

pub(crate) fn certification(summary: &CertificationSummary) -> f64 {
    let base = summary
        .active_count
        .saturating_mul(POINTS_PER_CERTIFICATION)
        .min(100);
    let penalty = summary.expiring_count.saturating_mul(EXPIRY_PENALTY_POINTS);
    f64::from(base.saturating_sub(penalty))
}

pub(crate) fn learning_velocity(hours: &LearningHours, enrollments: &EnrollmentSummary) -> f64 {
    let hours_score = (hours.recent_hours.max(0.0) * POINTS_PER_LEARNING_HOUR).min(MAX_SUBSCORE);

    let (completion_rate, progress_score) = if enrollments.total_enrollments > 0 {
        (
            f64::from(enrollments.completed_count) / f64::from(enrollments.total_enrollments)
                * 100.0,
            enrollments.average_progress,
        )
    } else {
        (0.0, 0.0)
    };

    hours_score * 0.4 + completion_rate * 0.3 + progress_score * 0.3
}

pub(crate) fn practical_application(experience_years: f64, project_score: f64) -> f64 {
    let years = experience_years.max(0.0);
    let experience_score = (EXPERIENCE_LOG_SCALE * (years + 1.0).ln()).min(MAX_SUBSCORE);
    experience_score * 0.6 + project_score * 0.4
}

/// Mean of demand-weighted levels. Unlike [`skill_proficiency`] the multiplier is not divided
/// back out, so scores above 100 are expected for high-demand portfolios.
pub(crate) fn industry_relevance(skills: &[SkillAssignment], demand: &DemandTable) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let total: f64 = skills
        .iter()
        .map(|assignment| {
            f64::from(assignment.current_level) * demand.multiplier(&assignment.category)
        })
        .sum();
    total / skills.len() as f64
}
