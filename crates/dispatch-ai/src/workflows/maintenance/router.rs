use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{Category, CostRange};
use super::domain::{Vendor, WorkOrderId};
use super::lifecycle::TransitionRequest;
use super::repository::{AuditLog, RepositoryError, WorkOrderRepository};
use super::service::{
    DirectIntake, DispatchServiceError, EscalationIntake, MaintenanceDispatchService,
};
use super::triage::TriageError;

/// Router builder exposing the dispatch engine over HTTP.
pub fn maintenance_router<R, L>(service: Arc<MaintenanceDispatchService<R, L>>) -> Router
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    Router::new()
        .route("/api/v1/maintenance/categories", get(categories_handler))
        .route(
            "/api/v1/maintenance/triage",
            post(triage_handler::<R, L>),
        )
        .route(
            "/api/v1/maintenance/orders",
            post(create_order_handler::<R, L>),
        )
        .route(
            "/api/v1/maintenance/orders/direct",
            post(direct_order_handler::<R, L>),
        )
        .route(
            "/api/v1/maintenance/orders/:order_id",
            get(get_order_handler::<R, L>),
        )
        .route(
            "/api/v1/maintenance/orders/:order_id/match",
            post(match_handler::<R, L>),
        )
        .route(
            "/api/v1/maintenance/orders/:order_id/transition",
            post(transition_handler::<R, L>),
        )
        .route(
            "/api/v1/maintenance/orders/:order_id/history",
            get(history_handler::<R, L>),
        )
        .route("/api/v1/maintenance/board", get(board_handler::<R, L>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TriageRequestBody {
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchRequestBody {
    pub(crate) vendors: Vec<Vendor>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) base_cost: CostRange,
}

pub(crate) async fn categories_handler() -> Response {
    let catalog: Vec<CategoryView> = Category::all()
        .into_iter()
        .map(|category| CategoryView {
            key: category.key(),
            label: category.label(),
            icon: category.icon(),
            base_cost: category.base_cost(),
        })
        .collect();
    (StatusCode::OK, axum::Json(catalog)).into_response()
}

pub(crate) async fn triage_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    axum::Json(body): axum::Json<TriageRequestBody>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    match service.triage(&body.category, &body.answers) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_order_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    axum::Json(intake): axum::Json<EscalationIntake>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    match service.create_escalated_ticket(intake, Local::now()) {
        Ok(order) => (StatusCode::CREATED, axum::Json(order)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn direct_order_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    axum::Json(intake): axum::Json<DirectIntake>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    match service.submit_direct(intake, Local::now()) {
        Ok(order) => (StatusCode::CREATED, axum::Json(order)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_order_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    Path(order_id): Path<String>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    let id = WorkOrderId(order_id);
    match service.fetch(&id) {
        Ok(order) => (StatusCode::OK, axum::Json(order)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn match_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    Path(order_id): Path<String>,
    axum::Json(body): axum::Json<MatchRequestBody>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    let id = WorkOrderId(order_id);
    match service.match_vendors(&id, &body.vendors) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn transition_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    Path(order_id): Path<String>,
    axum::Json(request): axum::Json<TransitionRequest>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    let id = WorkOrderId(order_id);
    match service.transition(&id, request, Local::now()) {
        Ok(order) => (StatusCode::OK, axum::Json(order)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn history_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
    Path(order_id): Path<String>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    let id = WorkOrderId(order_id);
    match service.history(&id) {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn board_handler<R, L>(
    State(service): State<Arc<MaintenanceDispatchService<R, L>>>,
) -> Response
where
    R: WorkOrderRepository + 'static,
    L: AuditLog + 'static,
{
    match service.board() {
        Ok(board) => (StatusCode::OK, axum::Json(board)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: DispatchServiceError) -> Response {
    let status = match &err {
        DispatchServiceError::Triage(TriageError::InvalidCategory(_))
        | DispatchServiceError::Triage(TriageError::InvalidAnswer { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DispatchServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DispatchServiceError::Repository(RepositoryError::Conflict)
        | DispatchServiceError::Repository(RepositoryError::StaleVersion { .. })
        | DispatchServiceError::Lifecycle(_) => StatusCode::CONFLICT,
        DispatchServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = axum::Json(json!({ "error": err.to_string() }));
    (status, body).into_response()
}
