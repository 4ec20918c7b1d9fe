use super::domain::{
    CertificationSummary, EmployeeId, EmployeeSnapshot, EnrollmentSummary, LearningHours,
    SkillAssignment,
};

/// Trailing window, in months, used when summing recent learning hours.
pub const LEARNING_WINDOW_MONTHS: u32 = 3;

/// Source of the raw employee facts consumed by the scoring engine.
///
/// Implementations own all storage access; the engine only ever reads through this trait so it
/// can be exercised against in-memory fixtures.
pub trait EmployeeDataProvider: Send + Sync {
    fn skills_of(&self, id: &EmployeeId) -> Result<Vec<SkillAssignment>, ProviderError>;
    fn certification_summary_of(
        &self,
        id: &EmployeeId,
    ) -> Result<CertificationSummary, ProviderError>;
    fn recent_learning_hours_of(
        &self,
        id: &EmployeeId,
        window_months: u32,
    ) -> Result<f64, ProviderError>;
    fn enrollment_summary_of(&self, id: &EmployeeId) -> Result<EnrollmentSummary, ProviderError>;
    fn experience_years_of(&self, id: &EmployeeId) -> Result<f64, ProviderError>;
    fn position_of(&self, id: &EmployeeId) -> Result<String, ProviderError>;

    /// Collect every fact for one employee. The position lookup runs first so an unknown id
    /// fails before any aggregate query is issued.
    fn snapshot_of(&self, id: &EmployeeId) -> Result<EmployeeSnapshot, ProviderError> {
        let position = self.position_of(id)?;
        let experience_years = self.experience_years_of(id)?;
        let skills = self.skills_of(id)?;
        let certifications = self.certification_summary_of(id)?;
        let recent_hours = self.recent_learning_hours_of(id, LEARNING_WINDOW_MONTHS)?;
        let enrollments = self.enrollment_summary_of(id)?;

        Ok(EmployeeSnapshot {
            employee_id: id.clone(),
            position,
            experience_years,
            skills,
            certifications,
            learning: LearningHours { recent_hours },
            enrollments,
        })
    }
}

/// Providers that can enumerate the employees they hold.
pub trait EmployeeRoster {
    fn employee_ids(&self) -> Result<Vec<EmployeeId>, ProviderError>;
}

/// Error enumeration for data provider failures.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),
    #[error("data provider unavailable: {0}")]
    Unavailable(String),
}
