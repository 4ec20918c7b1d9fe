use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for employees known to a data provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current proficiency for one employee/skill pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    pub category: String,
    pub current_level: u8,
}

impl SkillAssignment {
    pub fn new(category: impl Into<String>, current_level: u8) -> Self {
        Self {
            skill: None,
            category: category.into(),
            current_level,
        }
    }

    pub fn named(skill: impl Into<String>, category: impl Into<String>, current_level: u8) -> Self {
        Self {
            skill: Some(skill.into()),
            category: category.into(),
            current_level,
        }
    }
}

/// Counts of certifications still in force. `active_count` includes the expiring subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationSummary {
    pub active_count: u32,
    pub expiring_count: u32,
}

/// Hours logged over the trailing learning window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningHours {
    pub recent_hours: f64,
}

/// Aggregate view over an employee's course enrollments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentSummary {
    pub total_enrollments: u32,
    pub completed_count: u32,
    pub average_progress: f64,
}

/// Every raw fact the engine needs for one employee, fetched once per computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    pub employee_id: EmployeeId,
    pub position: String,
    pub experience_years: f64,
    pub skills: Vec<SkillAssignment>,
    pub certifications: CertificationSummary,
    pub learning: LearningHours,
    pub enrollments: EnrollmentSummary,
}

/// The six factors feeding the overall score, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    SkillProficiency,
    Certifications,
    LearningVelocity,
    PracticalApplication,
    IndustryRelevance,
    PeerCollaboration,
}

impl FactorKind {
    pub const ALL: [FactorKind; 6] = [
        FactorKind::SkillProficiency,
        FactorKind::Certifications,
        FactorKind::LearningVelocity,
        FactorKind::PracticalApplication,
        FactorKind::IndustryRelevance,
        FactorKind::PeerCollaboration,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::SkillProficiency => "Skill Proficiency",
            FactorKind::Certifications => "Certifications",
            FactorKind::LearningVelocity => "Learning Velocity",
            FactorKind::PracticalApplication => "Practical Application",
            FactorKind::IndustryRelevance => "Industry Relevance",
            FactorKind::PeerCollaboration => "Peer Collaboration",
        }
    }
}

/// Ordinal tier assigned to an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Exceptional,
    Excellent,
    Good,
    Satisfactory,
    NeedsImprovement,
}

impl PerformanceLevel {
    pub const ALL: [PerformanceLevel; 5] = [
        PerformanceLevel::Exceptional,
        PerformanceLevel::Excellent,
        PerformanceLevel::Good,
        PerformanceLevel::Satisfactory,
        PerformanceLevel::NeedsImprovement,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Exceptional => "Exceptional",
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Satisfactory => "Satisfactory",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}
