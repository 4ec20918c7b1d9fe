use chrono::{Days, NaiveDate};
use competency_ai::error::AppError;
use competency_ai::workflows::competency::{
    CertificationRecord, CertificationStatus, EmployeeDirectory, EmployeeId, EmployeeRecord,
    EnrollmentRecord, EnrollmentStatus, LearningActivity, SkillAssignment,
};
use competency_ai::workflows::roster::RosterImporter;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Import `roster` when given, otherwise fall back to the sample directory.
pub(crate) fn load_directory(
    roster: Option<&Path>,
    as_of: NaiveDate,
) -> Result<EmployeeDirectory, AppError> {
    match roster {
        Some(path) => RosterImporter::from_path(path, as_of).map_err(AppError::from),
        None => Ok(demo_directory(as_of)),
    }
}

/// Four sample employees spanning the performance ladder.
pub(crate) fn demo_directory(as_of: NaiveDate) -> EmployeeDirectory {
    let days_ago = |days: u64| as_of.checked_sub_days(Days::new(days)).unwrap_or(as_of);

    let mut ml_engineer = EmployeeRecord::new(
        EmployeeId::new("EMP-001"),
        "Priya Raman",
        "Senior ML Engineer",
    );
    ml_engineer.years_experience = 5.0;
    ml_engineer.skills = vec![
        SkillAssignment::named("PyTorch", "AI/ML", 90),
        SkillAssignment::named("Python", "Programming", 70),
    ];
    ml_engineer.certifications = vec![
        certification("AWS Machine Learning Specialty", CertificationStatus::Active),
        certification("TensorFlow Developer", CertificationStatus::Active),
        certification("Google Professional Data Engineer", CertificationStatus::Active),
        certification("Azure AI Engineer", CertificationStatus::ExpiringSoon),
    ];
    ml_engineer.enrollments = vec![
        enrollment("Deep Learning Specialization", EnrollmentStatus::Completed, 100.0),
        enrollment("MLOps Fundamentals", EnrollmentStatus::InProgress, 60.0),
    ];
    ml_engineer.learning = vec![
        learning(days_ago(21), 18.0, "course"),
        learning(days_ago(60), 12.0, "workshop"),
        learning(days_ago(210), 40.0, "conference"),
    ];

    let mut manager = EmployeeRecord::new(
        EmployeeId::new("EMP-002"),
        "Sam Okafor",
        "Engineering Manager",
    );
    manager.years_experience = 10.0;
    manager.skills = vec![
        SkillAssignment::named("AWS", "Cloud", 95),
        SkillAssignment::named("Kubernetes", "DevOps", 90),
        SkillAssignment::named("Team Leadership", "Leadership", 85),
    ];
    manager.certifications = [
        "AWS Solutions Architect Professional",
        "Certified Kubernetes Administrator",
        "PMP",
        "Google Cloud Architect",
        "Azure Solutions Architect",
        "HashiCorp Terraform Associate",
        "Certified ScrumMaster",
    ]
    .into_iter()
    .map(|name| certification(name, CertificationStatus::Active))
    .collect();
    manager.enrollments = ["Leading Teams", "Cloud FinOps", "Platform Strategy", "Coaching"]
        .into_iter()
        .map(|course| enrollment(course, EnrollmentStatus::Completed, 100.0))
        .collect();
    manager.learning = vec![learning(days_ago(30), 50.0, "course")];

    let mut designer = EmployeeRecord::new(
        EmployeeId::new("EMP-003"),
        "Lena Fischer",
        "Product Designer",
    );
    designer.years_experience = 3.0;
    designer.skills = vec![
        SkillAssignment::named("Figma", "Design", 85),
        SkillAssignment::named("React", "Frontend", 60),
    ];
    designer.certifications = vec![certification(
        "Google UX Design",
        CertificationStatus::Active,
    )];
    designer.enrollments = vec![
        enrollment("Accessibility Basics", EnrollmentStatus::Completed, 100.0),
        enrollment("Design Systems", EnrollmentStatus::Enrolled, 20.0),
        enrollment("Motion Design", EnrollmentStatus::Dropped, 10.0),
    ];
    designer.learning = vec![learning(days_ago(45), 10.0, "course")];

    let analyst = EmployeeRecord::new(EmployeeId::new("EMP-004"), "Jordan Lee", "Analyst");

    let mut directory = EmployeeDirectory::new(as_of);
    for record in [ml_engineer, manager, designer, analyst] {
        directory.insert(record);
    }
    directory
}

fn certification(name: &str, status: CertificationStatus) -> CertificationRecord {
    CertificationRecord {
        name: name.to_string(),
        status,
    }
}

fn enrollment(course: &str, status: EnrollmentStatus, progress: f64) -> EnrollmentRecord {
    EnrollmentRecord {
        course: course.to_string(),
        status,
        progress,
    }
}

fn learning(date: NaiveDate, hours: f64, activity: &str) -> LearningActivity {
    LearningActivity {
        date,
        hours,
        activity: activity.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use competency_ai::workflows::competency::{
        CompetencyService, CompetencySummary, PerformanceLevel, ScoringConfig,
    };

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date(" 2025-10-01 "), Ok(as_of()));
        assert!(parse_date("2025/10/01").is_err());
    }

    #[test]
    fn demo_directory_spans_the_ladder() {
        let service =
            CompetencyService::new(Arc::new(demo_directory(as_of())), ScoringConfig::default())
                .expect("default config is valid");

        let scores = service.score_all().expect("demo roster scores");
        assert_eq!(scores.len(), 4);

        let level_of = |id: &str| {
            scores
                .iter()
                .find(|score| score.employee_id.as_str() == id)
                .map(|score| (score.overall, score.performance_level))
        };
        assert_eq!(level_of("EMP-001"), Some((70, PerformanceLevel::Good)));
        assert_eq!(level_of("EMP-002"), Some((90, PerformanceLevel::Exceptional)));
        assert_eq!(
            level_of("EMP-004"),
            Some((7, PerformanceLevel::NeedsImprovement))
        );

        let summary = CompetencySummary::from_scores(&scores);
        assert_eq!(summary.headcount, 4);
        assert_eq!(Some(summary), service.summary().ok());
    }

    #[test]
    fn load_directory_reports_missing_roster() {
        let result = load_directory(Some(Path::new("./missing-roster.json")), as_of());
        assert!(matches!(result, Err(AppError::Import(_))));
    }
}
