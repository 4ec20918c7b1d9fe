use crate::infra::{demo_directory, load_directory};
use chrono::{Local, NaiveDate};
use clap::Args;
use competency_ai::config::AppConfig;
use competency_ai::error::AppError;
use competency_ai::workflows::competency::{
    CompetencyScore, CompetencyService, CompetencySummary, EmployeeDirectory, EmployeeId,
    FactorKind, PerformanceLevel,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Roster export to score (JSON roster or CSV skill matrix)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Only score this employee id
    #[arg(long)]
    pub(crate) employee: Option<String>,
    /// Reporting date when the roster does not carry one (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Emit JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting date for the sample roster (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        roster,
        employee,
        as_of,
        json,
    } = args;

    let config = AppConfig::load()?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let directory = load_directory(Some(roster.as_path()), as_of)?;
    let service = CompetencyService::new(Arc::new(directory), config.scoring)?;

    let scores = match employee {
        Some(id) => vec![service.compute_score(&EmployeeId::new(id))?],
        None => service.score_all()?,
    };

    if json {
        print_json(&scores);
        return Ok(());
    }

    println!(
        "Competency scores as of {} ({} employees)",
        service.provider().as_of(),
        scores.len()
    );
    for score in &scores {
        render_score(service.provider(), score);
    }
    if scores.len() > 1 {
        render_summary(&CompetencySummary::from_scores(&scores));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let service = CompetencyService::new(Arc::new(demo_directory(as_of)), config.scoring)?;

    println!("Competency scoring demo (as of {})", as_of);
    println!("Factor weights:");
    let weights = &service.engine().config().weights;
    for factor in FactorKind::ALL {
        println!("  - {}: {:.0}%", factor.label(), weights.weight(factor) * 100.0);
    }

    let scores = service.score_all()?;
    for score in &scores {
        render_score(service.provider(), score);
    }
    render_summary(&CompetencySummary::from_scores(&scores));

    Ok(())
}

fn print_json(scores: &[CompetencyScore]) {
    let rendered = match scores {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(err) => println!("JSON output unavailable: {}", err),
    }
}

fn render_score(directory: &EmployeeDirectory, score: &CompetencyScore) {
    let (name, position) = directory
        .get(&score.employee_id)
        .map(|record| (record.name.as_str(), record.position.as_str()))
        .unwrap_or(("", ""));

    println!();
    if name.is_empty() {
        println!("{} ({})", score.employee_id, position);
    } else {
        println!("{} - {} ({})", score.employee_id, name, position);
    }
    println!(
        "  Overall: {}/100 ({})",
        score.overall,
        score.performance_level.label()
    );
    println!("  Breakdown:");
    for factor in FactorKind::ALL {
        if let Some(value) = score.factor(factor) {
            println!("    - {}: {:.1}", factor.label(), value);
        }
    }
    println!("  Recommendations:");
    for recommendation in &score.recommendations {
        println!("    - {}", recommendation);
    }
}

fn render_summary(summary: &CompetencySummary) {
    println!();
    println!(
        "Summary: {} employees | average overall {:.1}",
        summary.headcount, summary.average_overall
    );
    for level in PerformanceLevel::ALL {
        let count = summary.level_distribution.get(&level).copied().unwrap_or(0);
        println!("  - {}: {}", level.label(), count);
    }
}
