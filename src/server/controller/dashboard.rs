use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        dashboard::{DashboardSummaryDto, TopProductDto},
        order::OrderDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{dashboard::TopProduct, order},
        service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

#[derive(Deserialize)]
pub struct LimitParams {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Get the back-office summary: sales figures, order counts, recent orders.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = DashboardService::new(&state.db);

    let summary = service.summary().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Summary retrieved", summary.into_dto()?)),
    ))
}

/// Rank products by quantity sold across non-cancelled orders.
#[utoipa::path(
    get,
    path = "/api/dashboard/top-products",
    tag = DASHBOARD_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum products returned (default 10)")
    ),
    responses(
        (status = 200, description = "Top products by quantity sold", body = ApiResponse<Vec<TopProductDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn top_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = DashboardService::new(&state.db);

    let products: Vec<TopProductDto> = service
        .top_products(params.limit as usize)
        .await?
        .into_iter()
        .map(TopProduct::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Top products retrieved", products)),
    ))
}

/// List the newest pending orders.
#[utoipa::path(
    get,
    path = "/api/dashboard/pending-orders",
    tag = DASHBOARD_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum orders returned (default 10)")
    ),
    responses(
        (status = 200, description = "Newest pending orders", body = ApiResponse<Vec<OrderDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pending_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = DashboardService::new(&state.db);

    let orders = service
        .pending_orders(params.limit)
        .await?
        .into_iter()
        .map(order::to_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Pending orders retrieved", orders)),
    ))
}
