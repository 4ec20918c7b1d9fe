use super::normalizer::{categorize_skill, normalize_text};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct SkillMatrixRecord {
    pub(crate) line: u64,
    pub(crate) employee_id: String,
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) years_experience: Option<f64>,
    pub(crate) skill: Option<SkillCell>,
}

#[derive(Debug)]
pub(crate) struct SkillCell {
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) level: u8,
}

#[derive(Debug)]
pub(crate) enum RowError {
    Csv(csv::Error),
    Invalid { line: u64, reason: String },
}

impl From<csv::Error> for RowError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SkillMatrixRecord>, RowError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(normalize_text)
        .collect::<csv::StringRecord>();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        let row: SkillMatrixRow = record.deserialize(Some(&headers))?;
        records.push(row.into_record(line)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SkillMatrixRow {
    #[serde(rename = "Employee ID")]
    employee_id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Position", default)]
    position: String,
    #[serde(
        rename = "Years Experience",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    years_experience: Option<String>,
    #[serde(rename = "Skill", default, deserialize_with = "empty_string_as_none")]
    skill: Option<String>,
    #[serde(rename = "Level", default, deserialize_with = "empty_string_as_none")]
    level: Option<String>,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
}

impl SkillMatrixRow {
    fn into_record(self, line: u64) -> Result<SkillMatrixRecord, RowError> {
        let invalid = |reason: String| RowError::Invalid { line, reason };

        let employee_id = normalize_text(&self.employee_id);
        if employee_id.is_empty() {
            return Err(invalid("missing employee id".to_string()));
        }

        let years_experience = match self.years_experience.as_deref() {
            Some(raw) => {
                let years = raw
                    .parse::<f64>()
                    .map_err(|_| invalid(format!("years experience '{raw}' is not a number")))?;
                if !years.is_finite() || years < 0.0 {
                    return Err(invalid(format!(
                        "years experience '{raw}' must be zero or more"
                    )));
                }
                Some(years)
            }
            None => None,
        };

        let skill = match (self.skill.as_deref(), self.level.as_deref()) {
            (Some(skill), Some(raw_level)) => {
                let level = raw_level
                    .parse::<u8>()
                    .ok()
                    .filter(|level| *level <= 100)
                    .ok_or_else(|| {
                        invalid(format!("skill level '{raw_level}' must be between 0 and 100"))
                    })?;
                let name = normalize_text(skill);
                let category = self
                    .category
                    .as_deref()
                    .map(normalize_text)
                    .unwrap_or_else(|| categorize_skill(&name).to_string());
                Some(SkillCell {
                    name,
                    category,
                    level,
                })
            }
            (Some(skill), None) => {
                return Err(invalid(format!("skill '{skill}' is missing a level")));
            }
            (None, Some(_)) => {
                return Err(invalid("level provided without a skill".to_string()));
            }
            (None, None) => None,
        };

        Ok(SkillMatrixRecord {
            line,
            employee_id,
            name: normalize_text(&self.name),
            position: normalize_text(&self.position),
            years_experience,
            skill,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
