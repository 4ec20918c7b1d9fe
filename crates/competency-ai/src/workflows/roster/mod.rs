mod normalizer;
mod parser;

use crate::workflows::competency::{
    EmployeeDirectory, EmployeeId, EmployeeRecord, SkillAssignment,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use parser::{RowError, SkillMatrixRecord};

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    InvalidRow { line: u64, reason: String },
    InvalidRecord { employee_id: String, reason: String },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::Json(err) => write!(f, "invalid roster JSON data: {}", err),
            RosterImportError::InvalidRow { line, reason } => {
                write!(f, "roster row on line {}: {}", line, reason)
            }
            RosterImportError::InvalidRecord {
                employee_id,
                reason,
            } => write!(f, "roster entry for {}: {}", employee_id, reason),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Json(err) => Some(err),
            RosterImportError::InvalidRow { .. } | RosterImportError::InvalidRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for RosterImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<RowError> for RosterImportError {
    fn from(err: RowError) -> Self {
        match err {
            RowError::Csv(err) => Self::Csv(err),
            RowError::Invalid { line, reason } => Self::InvalidRow { line, reason },
        }
    }
}

/// Serialized roster snapshot: a reporting date plus full employee records.
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    as_of: Option<NaiveDate>,
    employees: Vec<EmployeeRecord>,
}

/// Builds an [`EmployeeDirectory`] from roster exports.
pub struct RosterImporter;

impl RosterImporter {
    /// Import by file extension: `.json` rosters or CSV skill matrices.
    ///
    /// `as_of` is used when the roster does not carry its own reporting date.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        as_of: NaiveDate,
    ) -> Result<EmployeeDirectory, RosterImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::json_from_reader(file, as_of)
        } else {
            Self::csv_from_reader(file, as_of)
        }
    }

    pub fn json_from_reader<R: Read>(
        reader: R,
        as_of: NaiveDate,
    ) -> Result<EmployeeDirectory, RosterImportError> {
        let roster: RosterFile = serde_json::from_reader(reader)?;
        let mut directory = EmployeeDirectory::new(roster.as_of.unwrap_or(as_of));

        for record in roster.employees {
            validate_record(&record)?;
            if directory.get(&record.id).is_some() {
                return Err(RosterImportError::InvalidRecord {
                    employee_id: record.id.0,
                    reason: "duplicate employee id".to_string(),
                });
            }
            directory.insert(record);
        }

        Ok(directory)
    }

    /// Import a skill matrix with one row per employee/skill pair.
    pub fn csv_from_reader<R: Read>(
        reader: R,
        as_of: NaiveDate,
    ) -> Result<EmployeeDirectory, RosterImportError> {
        let mut directory = EmployeeDirectory::new(as_of);
        let mut years_seen = HashSet::new();

        for row in parser::parse_records(reader)? {
            apply_row(row, &mut directory, &mut years_seen)?;
        }

        Ok(directory)
    }
}

fn apply_row(
    row: SkillMatrixRecord,
    directory: &mut EmployeeDirectory,
    years_seen: &mut HashSet<EmployeeId>,
) -> Result<(), RosterImportError> {
    let id = EmployeeId::new(row.employee_id.clone());
    if directory.get(&id).is_none() {
        directory.insert(EmployeeRecord::new(id.clone(), "", ""));
    }
    let record = directory
        .get_mut(&id)
        .ok_or_else(|| RosterImportError::InvalidRow {
            line: row.line,
            reason: format!("employee {} could not be staged", row.employee_id),
        })?;

    let conflict = |field: &str| RosterImportError::InvalidRow {
        line: row.line,
        reason: format!("conflicting {field} for employee {}", row.employee_id),
    };

    if !merge_text(&mut record.name, &row.name) {
        return Err(conflict("name"));
    }
    if !merge_text(&mut record.position, &row.position) {
        return Err(conflict("position"));
    }
    if let Some(years) = row.years_experience {
        // Zero is a real value once a row has stated it.
        if !years_seen.insert(id.clone()) && record.years_experience != years {
            return Err(conflict("years experience"));
        }
        record.years_experience = years;
    }

    if let Some(cell) = row.skill {
        let duplicate = record
            .skills
            .iter()
            .any(|existing| existing.skill.as_deref() == Some(cell.name.as_str()));
        if duplicate {
            return Err(RosterImportError::InvalidRow {
                line: row.line,
                reason: format!(
                    "duplicate skill '{}' for employee {}",
                    cell.name, row.employee_id
                ),
            });
        }
        record
            .skills
            .push(SkillAssignment::named(cell.name, cell.category, cell.level));
    }

    Ok(())
}

/// Fill a blank field from `incoming`; false when both are set and disagree.
fn merge_text(current: &mut String, incoming: &str) -> bool {
    if incoming.is_empty() || current.as_str() == incoming {
        return true;
    }
    if current.is_empty() {
        *current = incoming.to_string();
        return true;
    }
    false
}

fn validate_record(record: &EmployeeRecord) -> Result<(), RosterImportError> {
    let invalid = |reason: String| RosterImportError::InvalidRecord {
        employee_id: record.id.0.clone(),
        reason,
    };

    if record.id.0.trim().is_empty() {
        return Err(invalid("missing employee id".to_string()));
    }
    if !record.years_experience.is_finite() || record.years_experience < 0.0 {
        return Err(invalid(format!(
            "years experience {} must be zero or more",
            record.years_experience
        )));
    }
    if let Some(skill) = record.skills.iter().find(|skill| skill.current_level > 100) {
        return Err(invalid(format!(
            "skill level {} exceeds 100",
            skill.current_level
        )));
    }
    if let Some(enrollment) = record
        .enrollments
        .iter()
        .find(|enrollment| !(0.0..=100.0).contains(&enrollment.progress))
    {
        return Err(invalid(format!(
            "progress {} for '{}' must be between 0 and 100",
            enrollment.progress, enrollment.course
        )));
    }
    if let Some(activity) = record
        .learning
        .iter()
        .find(|activity| !activity.hours.is_finite() || activity.hours < 0.0)
    {
        return Err(invalid(format!(
            "learning hours {} on {} must be zero or more",
            activity.hours, activity.date
        )));
    }

    Ok(())
}
