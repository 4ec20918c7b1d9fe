use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::competency::directory::{
    CertificationRecord, CertificationStatus, EmployeeDirectory, EmployeeRecord,
    EnrollmentRecord, EnrollmentStatus, LearningActivity,
};
use crate::workflows::competency::domain::{
    CertificationSummary, EmployeeId, EmployeeSnapshot, EnrollmentSummary, LearningHours,
    SkillAssignment,
};
use crate::workflows::competency::provider::{
    EmployeeDataProvider, EmployeeRoster, ProviderError,
};
use crate::workflows::competency::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::competency::{competency_router, CompetencyService};

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default()).expect("default config is valid")
}

pub(super) fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-6
}

/// Snapshot with nothing on record.
pub(super) fn blank_snapshot(position: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        employee_id: EmployeeId::new("snap-1"),
        position: position.to_string(),
        experience_years: 0.0,
        skills: Vec::new(),
        certifications: CertificationSummary::default(),
        learning: LearningHours::default(),
        enrollments: EnrollmentSummary::default(),
    }
}

/// Mid-career engineer whose score lands at 70 (Good).
pub(super) fn senior_engineer() -> EmployeeRecord {
    let mut record = EmployeeRecord::new(
        EmployeeId::new("E-100"),
        "Priya Raman",
        "Senior ML Engineer",
    );
    record.years_experience = 5.0;
    record.skills = vec![
        SkillAssignment::named("PyTorch", "AI/ML", 90),
        SkillAssignment::named("Python", "Programming", 70),
    ];
    record.certifications = vec![
        certification("AWS ML Specialty", CertificationStatus::Active),
        certification("TensorFlow Developer", CertificationStatus::Active),
        certification("GCP Data Engineer", CertificationStatus::Active),
        certification("Azure AI Engineer", CertificationStatus::ExpiringSoon),
        certification("Scrum Master", CertificationStatus::Expired),
    ];
    record.enrollments = vec![
        enrollment("Deep Learning", EnrollmentStatus::Completed, 100.0),
        enrollment("MLOps", EnrollmentStatus::InProgress, 60.0),
    ];
    record.learning = vec![
        learning(date(2025, 9, 10), 18.0),
        learning(date(2025, 8, 2), 12.0),
        learning(date(2025, 3, 1), 40.0),
    ];
    record
}

/// New hire with no recorded activity.
pub(super) fn new_analyst() -> EmployeeRecord {
    EmployeeRecord::new(EmployeeId::new("E-200"), "Jordan Lee", "Analyst")
}

/// Experienced manager whose score lands at 90 (Exceptional).
pub(super) fn engineering_manager() -> EmployeeRecord {
    let mut record = EmployeeRecord::new(
        EmployeeId::new("E-300"),
        "Sam Okafor",
        "Engineering Manager",
    );
    record.years_experience = 10.0;
    record.skills = vec![
        SkillAssignment::named("AWS", "Cloud", 95),
        SkillAssignment::named("Kubernetes", "DevOps", 90),
        SkillAssignment::named("Team Leadership", "Leadership", 85),
    ];
    record.certifications = (0..7)
        .map(|index| certification(&format!("Cert {index}"), CertificationStatus::Active))
        .collect();
    record.enrollments = (0..4)
        .map(|index| enrollment(&format!("Course {index}"), EnrollmentStatus::Completed, 100.0))
        .collect();
    record.learning = vec![learning(date(2025, 9, 1), 50.0)];
    record
}

pub(super) fn certification(name: &str, status: CertificationStatus) -> CertificationRecord {
    CertificationRecord {
        name: name.to_string(),
        status,
    }
}

pub(super) fn enrollment(course: &str, status: EnrollmentStatus, progress: f64) -> EnrollmentRecord {
    EnrollmentRecord {
        course: course.to_string(),
        status,
        progress,
    }
}

pub(super) fn learning(date: NaiveDate, hours: f64) -> LearningActivity {
    LearningActivity {
        date,
        hours,
        activity: "course".to_string(),
    }
}

pub(super) fn directory() -> EmployeeDirectory {
    let mut directory = EmployeeDirectory::new(as_of());
    directory.insert(senior_engineer());
    directory.insert(new_analyst());
    directory.insert(engineering_manager());
    directory
}

pub(super) fn build_service() -> CompetencyService<EmployeeDirectory> {
    CompetencyService::new(Arc::new(directory()), ScoringConfig::default())
        .expect("default config is valid")
}

pub(super) fn router_with_service<P>(service: CompetencyService<P>) -> axum::Router
where
    P: EmployeeDataProvider + EmployeeRoster + 'static,
{
    competency_router(Arc::new(service))
}

pub(super) struct UnavailableProvider;

impl UnavailableProvider {
    fn offline<T>(&self) -> Result<T, ProviderError> {
        Err(ProviderError::Unavailable("database offline".to_string()))
    }
}

impl EmployeeDataProvider for UnavailableProvider {
    fn skills_of(&self, _id: &EmployeeId) -> Result<Vec<SkillAssignment>, ProviderError> {
        self.offline()
    }

    fn certification_summary_of(
        &self,
        _id: &EmployeeId,
    ) -> Result<CertificationSummary, ProviderError> {
        self.offline()
    }

    fn recent_learning_hours_of(
        &self,
        _id: &EmployeeId,
        _window_months: u32,
    ) -> Result<f64, ProviderError> {
        self.offline()
    }

    fn enrollment_summary_of(&self, _id: &EmployeeId) -> Result<EnrollmentSummary, ProviderError> {
        self.offline()
    }

    fn experience_years_of(&self, _id: &EmployeeId) -> Result<f64, ProviderError> {
        self.offline()
    }

    fn position_of(&self, _id: &EmployeeId) -> Result<String, ProviderError> {
        self.offline()
    }
}

impl EmployeeRoster for UnavailableProvider {
    fn employee_ids(&self) -> Result<Vec<EmployeeId>, ProviderError> {
        self.offline()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
