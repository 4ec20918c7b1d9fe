use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{CertificationSummary, EmployeeId, EnrollmentSummary, SkillAssignment};
use super::provider::{EmployeeDataProvider, EmployeeRoster, ProviderError};

/// Everything the directory knows about one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub years_experience: f64,
    #[serde(default)]
    pub skills: Vec<SkillAssignment>,
    #[serde(default)]
    pub certifications: Vec<CertificationRecord>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRecord>,
    #[serde(default)]
    pub learning: Vec<LearningActivity>,
}

impl EmployeeRecord {
    pub fn new(id: EmployeeId, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            years_experience: 0.0,
            skills: Vec::new(),
            certifications: Vec::new(),
            enrollments: Vec::new(),
            learning: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub name: String,
    #[serde(default)]
    pub status: CertificationStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationStatus {
    #[default]
    Active,
    ExpiringSoon,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub course: String,
    #[serde(default)]
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Enrolled,
    InProgress,
    Completed,
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningActivity {
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub activity: String,
}

/// In-memory [`EmployeeDataProvider`] evaluated against a fixed reporting date.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDirectory {
    as_of: NaiveDate,
    employees: BTreeMap<EmployeeId, EmployeeRecord>,
}

impl EmployeeDirectory {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            employees: BTreeMap::new(),
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Insert or replace a record, returning the previous one.
    pub fn insert(&mut self, record: EmployeeRecord) -> Option<EmployeeRecord> {
        self.employees.insert(record.id.clone(), record)
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&EmployeeRecord> {
        self.employees.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &EmployeeId) -> Option<&mut EmployeeRecord> {
        self.employees.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.employees.values()
    }

    fn record(&self, id: &EmployeeId) -> Result<&EmployeeRecord, ProviderError> {
        self.employees
            .get(id)
            .ok_or_else(|| ProviderError::EmployeeNotFound(id.clone()))
    }

    fn window_start(&self, window_months: u32) -> NaiveDate {
        self.as_of
            .checked_sub_months(Months::new(window_months))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl EmployeeDataProvider for EmployeeDirectory {
    fn skills_of(&self, id: &EmployeeId) -> Result<Vec<SkillAssignment>, ProviderError> {
        Ok(self.record(id)?.skills.clone())
    }

    fn certification_summary_of(
        &self,
        id: &EmployeeId,
    ) -> Result<CertificationSummary, ProviderError> {
        let record = self.record(id)?;
        let mut summary = CertificationSummary::default();
        for certification in &record.certifications {
            match certification.status {
                CertificationStatus::Active => summary.active_count += 1,
                CertificationStatus::ExpiringSoon => {
                    summary.active_count += 1;
                    summary.expiring_count += 1;
                }
                CertificationStatus::Expired => {}
            }
        }
        Ok(summary)
    }

    fn recent_learning_hours_of(
        &self,
        id: &EmployeeId,
        window_months: u32,
    ) -> Result<f64, ProviderError> {
        let record = self.record(id)?;
        let start = self.window_start(window_months);
        Ok(record
            .learning
            .iter()
            .filter(|activity| activity.date >= start && activity.date <= self.as_of)
            .map(|activity| activity.hours)
            .sum())
    }

    fn enrollment_summary_of(&self, id: &EmployeeId) -> Result<EnrollmentSummary, ProviderError> {
        let record = self.record(id)?;
        let total_enrollments = record.enrollments.len() as u32;
        if total_enrollments == 0 {
            return Ok(EnrollmentSummary::default());
        }

        let completed_count = record
            .enrollments
            .iter()
            .filter(|enrollment| enrollment.status == EnrollmentStatus::Completed)
            .count() as u32;
        let progress_total: f64 = record
            .enrollments
            .iter()
            .map(|enrollment| enrollment.progress)
            .sum();

        Ok(EnrollmentSummary {
            total_enrollments,
            completed_count,
            average_progress: progress_total / f64::from(total_enrollments),
        })
    }

    fn experience_years_of(&self, id: &EmployeeId) -> Result<f64, ProviderError> {
        Ok(self.record(id)?.years_experience)
    }

    fn position_of(&self, id: &EmployeeId) -> Result<String, ProviderError> {
        Ok(self.record(id)?.position.clone())
    }
}

impl EmployeeRoster for EmployeeDirectory {
    fn employee_ids(&self) -> Result<Vec<EmployeeId>, ProviderError> {
        Ok(self.employees.keys().cloned().collect())
    }
}
