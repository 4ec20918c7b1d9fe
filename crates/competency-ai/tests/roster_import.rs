use std::path::PathBuf;

use chrono::NaiveDate;
use competency_ai::workflows::competency::{
    EmployeeDataProvider, EmployeeId, EmployeeRoster,
};
use competency_ai::workflows::roster::{RosterImportError, RosterImporter};

fn reporting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid reporting date")
}

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "competency-ai-roster-{}-{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).expect("fixture written");
    path
}

#[test]
fn csv_skill_matrix_loads_from_disk() {
    let path = write_fixture(
        "matrix.csv",
        "Employee ID , Name , Position , Years Experience , Skill , Level , Category\n\
  E-2 , Mei Tan , Senior Designer , 7 , Figma , 85 , Design\n\
  E-1 , Ola Berg , Backend Developer , 2 , Django , 65 ,\n\
  E-1 , Ola Berg , Backend Developer , 2 , PostgreSQL , 70 ,\n",
    );

    let directory = RosterImporter::from_path(&path, reporting_date()).expect("import succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(directory.as_of(), reporting_date());
    assert_eq!(
        directory.employee_ids().expect("ids"),
        vec![EmployeeId::new("E-1"), EmployeeId::new("E-2")]
    );

    let skills = directory
        .skills_of(&EmployeeId::new("E-1"))
        .expect("known employee");
    let categories: Vec<&str> = skills.iter().map(|skill| skill.category.as_str()).collect();
    assert_eq!(categories, vec!["Backend", "Database"]);
    assert_eq!(
        directory
            .experience_years_of(&EmployeeId::new("E-2"))
            .expect("known employee"),
        7.0
    );
}

#[test]
fn json_roster_loads_from_disk_and_uses_fallback_date() {
    let path = write_fixture(
        "roster.json",
        r#"{ "employees": [ { "id": "E-7", "position": "Data Analyst", "years_experience": 1.5 } ] }"#,
    );

    let directory = RosterImporter::from_path(&path, reporting_date()).expect("import succeeds");
    std::fs::remove_file(&path).ok();

    assert_eq!(directory.as_of(), reporting_date());
    assert_eq!(directory.len(), 1);
    assert_eq!(
        directory
            .position_of(&EmployeeId::new("E-7"))
            .expect("known employee"),
        "Data Analyst"
    );
}

#[test]
fn malformed_json_is_reported() {
    let path = write_fixture("broken.json", r#"{ "employees": [ { "id": "E-1" "#);

    let error = RosterImporter::from_path(&path, reporting_date()).expect_err("invalid json");
    std::fs::remove_file(&path).ok();

    assert!(matches!(error, RosterImportError::Json(_)));
    assert!(error.to_string().starts_with("invalid roster JSON data"));
}

#[test]
fn csv_missing_employee_id_reports_line() {
    let csv = "Employee ID,Name,Position,Years Experience,Skill,Level\n\
E-1,Ola Berg,Developer,2,Rust,70\n\
,Nameless,Developer,2,Go,60\n";

    let error = RosterImporter::csv_from_reader(csv.as_bytes(), reporting_date())
        .expect_err("row without id");

    match error {
        RosterImportError::InvalidRow { line, reason } => {
            assert_eq!(line, 3);
            assert_eq!(reason, "missing employee id");
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn csv_rejects_non_numeric_experience() {
    let csv = "Employee ID,Name,Position,Years Experience,Skill,Level\n\
E-1,Ola Berg,Developer,two,Rust,70\n";

    let error = RosterImporter::csv_from_reader(csv.as_bytes(), reporting_date())
        .expect_err("bad experience");

    assert!(error.to_string().contains("is not a number"));
}
