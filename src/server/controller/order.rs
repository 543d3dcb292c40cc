use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::net::SocketAddr;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        order::{OrderDto, PlaceOrderDto, UpdateOrderDto},
    },
    server::{
        controller::cart::resolve_owner,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{self, OrderFilter, PlaceOrderParams, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

#[derive(Deserialize)]
pub struct OrderListParams {
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct MyOrdersParams {
    pub status: Option<String>,
}

fn parse_date(raw: &str, name: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest(format!("Invalid {} date: {}", name, raw)))
}

/// Place an order from the caller's active cart.
///
/// Checkout is all-or-nothing: every line's stock is atomically decremented
/// inside one transaction, the amount is recomputed from the cart's
/// snapshotted prices, and the cart is marked converted. A line that lost the
/// race for stock aborts the whole placement.
///
/// Contact details default to the authenticated user's own; anonymous
/// checkouts must supply them.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = PlaceOrderDto,
    params(
        ("X-Cart-Session" = Option<String>, Header, description = "Anonymous cart session token")
    ),
    responses(
        (status = 201, description = "The created order", body = ApiResponse<OrderDto>),
        (status = 400, description = "Empty cart, missing contact details, or a line out of stock", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<PlaceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).current_user().await?;
    let owner = resolve_owner(&state, &session, &headers, addr).await?;

    let service = OrderService::new(&state.db, state.cart);

    let placed = service
        .place(
            &owner,
            current.as_ref(),
            PlaceOrderParams {
                customer_name: payload.customer_name,
                customer_email: payload.customer_email,
                shipping_address: payload.shipping_address,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Order placed", order::to_dto(placed)?)),
    ))
}

/// List all orders (staff).
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by order status"),
        ("date_from" = Option<String>, Query, description = "Placed at or after (RFC 3339)"),
        ("date_to" = Option<String>, Query, description = "Placed at or before (RFC 3339)"),
        ("search" = Option<String>, Query, description = "Match order number, customer name, or email"),
        ("limit" = Option<u64>, Query, description = "Maximum rows returned")
    ),
    responses(
        (status = 200, description = "Orders, newest placement first", body = ApiResponse<Vec<OrderDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<OrderListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let filter = OrderFilter {
        status: params
            .status
            .as_deref()
            .map(order::status_from_str)
            .transpose()?,
        date_from: params
            .date_from
            .as_deref()
            .map(|raw| parse_date(raw, "from"))
            .transpose()?,
        date_to: params
            .date_to
            .as_deref()
            .map(|raw| parse_date(raw, "to"))
            .transpose()?,
        search: params.search,
        limit: params.limit,
    };

    let service = OrderService::new(&state.db, state.cart);

    let orders = service
        .list(filter)
        .await?
        .into_iter()
        .map(order::to_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Orders retrieved", orders)),
    ))
}

/// List the authenticated customer's own orders.
#[utoipa::path(
    get,
    path = "/api/my-orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by order status")
    ),
    responses(
        (status = 200, description = "The caller's orders, newest first", body = ApiResponse<Vec<OrderDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MyOrdersParams>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = params
        .status
        .as_deref()
        .map(order::status_from_str)
        .transpose()?;

    let service = OrderService::new(&state.db, state.cart);

    let orders = service
        .list_for_user(current.id, status)
        .await?
        .into_iter()
        .map(order::to_dto)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Orders retrieved", orders)),
    ))
}

/// Get one order. Customers see their own orders; staff see any.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "The order", body = ApiResponse<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = OrderService::new(&state.db, state.cart);

    match service.get_visible(id, &current).await? {
        Some(found) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Order retrieved", order::to_dto(found)?)),
        )),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Update an order's status or shipping details (staff).
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    request_body = UpdateOrderDto,
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "The updated order", body = ApiResponse<OrderDto>),
        (status = 400, description = "Unknown order status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let params = UpdateOrderParams {
        status: payload
            .status
            .as_deref()
            .map(order::status_from_str)
            .transpose()?,
        customer_name: payload.customer_name,
        customer_email: payload.customer_email,
        shipping_address: payload.shipping_address,
    };

    let service = OrderService::new(&state.db, state.cart);

    match service.update(id, params).await? {
        Some(updated) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Order updated", order::to_dto(updated)?)),
        )),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Cancel an order (staff). The record stays; stock is not restored.
#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "The cancelled order", body = ApiResponse<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = OrderService::new(&state.db, state.cart);

    match service.cancel(id).await? {
        Some(cancelled) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Order cancelled", order::to_dto(cancelled)?)),
        )),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}
