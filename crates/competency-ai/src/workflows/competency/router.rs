use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::EmployeeId;
use super::provider::{EmployeeDataProvider, EmployeeRoster, ProviderError};
use super::service::{CompetencyService, CompetencyServiceError};

/// Router builder exposing competency scores over HTTP.
pub fn competency_router<P>(service: Arc<CompetencyService<P>>) -> Router
where
    P: EmployeeDataProvider + EmployeeRoster + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees/:employee_id/competency",
            get(score_handler::<P>),
        )
        .route("/api/v1/competency/summary", get(summary_handler::<P>))
        .with_state(service)
}

pub(crate) async fn score_handler<P>(
    State(service): State<Arc<CompetencyService<P>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    P: EmployeeDataProvider + EmployeeRoster + 'static,
{
    let id = EmployeeId(employee_id);
    match service.compute_score(&id) {
        Ok(score) => (StatusCode::OK, axum::Json(score)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<P>(State(service): State<Arc<CompetencyService<P>>>) -> Response
where
    P: EmployeeDataProvider + EmployeeRoster + 'static,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CompetencyServiceError) -> Response {
    match error {
        CompetencyServiceError::Provider(ProviderError::EmployeeNotFound(id)) => {
            let payload = json!({
                "error": format!("employee {id} not found"),
                "employee_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        CompetencyServiceError::Provider(ProviderError::Unavailable(detail)) => {
            let payload = json!({
                "error": format!("data provider unavailable: {detail}"),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
