use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::net::SocketAddr;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        cart::{AddToCartDto, CartDto, UpdateCartItemDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::cart::OwnerKey,
        service::cart::CartService, state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Header carrying an anonymous caller's cart session token.
pub static CART_SESSION_HEADER: &str = "X-Cart-Session";

/// Resolves the cart owner key for this request.
///
/// Resolution is deterministic: an authenticated user always resolves by user
/// id, regardless of any session header the request also carries. Anonymous
/// callers resolve by the `X-Cart-Session` header, falling back to the peer
/// network address when the header is absent. The resolved key is passed down
/// into every cart service call; nothing below this layer reads request
/// state.
pub async fn resolve_owner(
    state: &AppState,
    session: &Session,
    headers: &HeaderMap,
    addr: SocketAddr,
) -> Result<OwnerKey, AppError> {
    if let Some(current) = AuthGuard::new(&state.db, session).current_user().await? {
        return Ok(OwnerKey::User(current.id));
    }

    if let Some(token) = headers
        .get(CART_SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
    {
        return Ok(OwnerKey::Session(token.to_string()));
    }

    Ok(OwnerKey::Session(addr.ip().to_string()))
}

/// Get the caller's cart.
///
/// Creates the cart lazily on first access. Totals are derived on read from
/// the snapshotted line prices.
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    params(
        ("X-Cart-Session" = Option<String>, Header, description = "Anonymous cart session token")
    ),
    responses(
        (status = 200, description = "The caller's cart with derived totals", body = ApiResponse<CartDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let owner = resolve_owner(&state, &session, &headers, addr).await?;

    let service = CartService::new(&state.db, state.cart);

    let cart = service.get_or_create(&owner).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Cart retrieved", cart.into_dto())),
    ))
}

/// Add a product to the cart.
///
/// Merges into an existing line for the same product rather than duplicating
/// it, and re-snapshots the line's unit price from the product's current
/// discounted price. The stock check is advisory: nothing is reserved until
/// checkout.
///
/// # Returns
/// - `200 OK` - Full cart after the addition
/// - `400 Bad Request` - Insufficient stock (`available_stock`, and
///   `current_in_cart` when merging) or invalid quantity
/// - `404 Not Found` - Unknown or deactivated product
#[utoipa::path(
    post,
    path = "/api/cart/items",
    tag = CART_TAG,
    request_body = AddToCartDto,
    params(
        ("X-Cart-Session" = Option<String>, Header, description = "Anonymous cart session token")
    ),
    responses(
        (status = 200, description = "Full cart after the addition", body = ApiResponse<CartDto>),
        (status = 400, description = "Insufficient stock or invalid quantity", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<AddToCartDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = resolve_owner(&state, &session, &headers, addr).await?;

    let service = CartService::new(&state.db, state.cart);

    let cart = service
        .add_item(&owner, payload.product_id, payload.quantity)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Item added to cart", cart.into_dto())),
    ))
}

/// Set a cart line to an absolute quantity.
///
/// The line must belong to the caller's cart; a foreign line id reads as not
/// found. The unit price is re-snapshotted.
#[utoipa::path(
    put,
    path = "/api/cart/items/{item_id}",
    tag = CART_TAG,
    request_body = UpdateCartItemDto,
    params(
        ("item_id" = i32, Path, description = "Cart line id"),
        ("X-Cart-Session" = Option<String>, Header, description = "Anonymous cart session token")
    ),
    responses(
        (status = 200, description = "Full cart after the update", body = ApiResponse<CartDto>),
        (status = 400, description = "Insufficient stock or invalid quantity", body = ErrorDto),
        (status = 404, description = "Cart item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = resolve_owner(&state, &session, &headers, addr).await?;

    let service = CartService::new(&state.db, state.cart);

    let cart = service
        .update_item(&owner, item_id, payload.quantity)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Cart item updated", cart.into_dto())),
    ))
}

/// Remove a line from the cart.
#[utoipa::path(
    delete,
    path = "/api/cart/items/{item_id}",
    tag = CART_TAG,
    params(
        ("item_id" = i32, Path, description = "Cart line id"),
        ("X-Cart-Session" = Option<String>, Header, description = "Anonymous cart session token")
    ),
    responses(
        (status = 200, description = "Full cart after the removal", body = ApiResponse<CartDto>),
        (status = 404, description = "Cart item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = resolve_owner(&state, &session, &headers, addr).await?;

    let service = CartService::new(&state.db, state.cart);

    let cart = service.remove_item(&owner, item_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Item removed from cart", cart.into_dto())),
    ))
}

/// Empty the cart. Idempotent on an already-empty cart.
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    params(
        ("X-Cart-Session" = Option<String>, Header, description = "Anonymous cart session token")
    ),
    responses(
        (status = 200, description = "The emptied cart", body = ApiResponse<CartDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let owner = resolve_owner(&state, &session, &headers, addr).await?;

    let service = CartService::new(&state.db, state.cart);

    let cart = service.clear(&owner).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Cart cleared", cart.into_dto())),
    ))
}
