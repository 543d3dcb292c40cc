use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        collection::{
            AssignProductsDto, CollectionDto, CreateCollectionDto, UpdateCollectionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::collection::{
            CollectionWithProducts, CreateCollectionParams, UpdateCollectionParams,
        },
        service::collection::CollectionService,
        state::AppState,
    },
};

use entity::user::UserRole;

/// Tag for grouping collection endpoints in OpenAPI documentation
pub static COLLECTION_TAG: &str = "collection";

#[derive(Deserialize)]
pub struct CollectionListParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// List collections with their assigned products.
///
/// Public callers see active collections only; `include_inactive` is honored
/// for staff sessions.
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = COLLECTION_TAG,
    params(
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated collections (staff only)")
    ),
    responses(
        (status = 200, description = "Collections, newest first", body = ApiResponse<Vec<CollectionDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_collections(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CollectionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).current_user().await?;
    let is_staff = current
        .map(|user| matches!(user.role, UserRole::Admin | UserRole::Editor))
        .unwrap_or(false);

    let service = CollectionService::new(&state.db);

    let collections: Vec<CollectionDto> = service
        .list(params.include_inactive && is_staff)
        .await?
        .into_iter()
        .map(CollectionWithProducts::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Collections retrieved", collections)),
    ))
}

/// Get one collection with its products in position order.
#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "The collection", body = ApiResponse<CollectionDto>),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CollectionService::new(&state.db);

    match service.get(id).await? {
        Some(found) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Collection retrieved", found.into_dto())),
        )),
        None => Err(AppError::NotFound("Collection not found".to_string())),
    }
}

/// Create a collection (staff).
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = COLLECTION_TAG,
    request_body = CreateCollectionDto,
    responses(
        (status = 201, description = "The created collection", body = ApiResponse<CollectionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_collection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCollectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CollectionService::new(&state.db);

    let created = service
        .create(CreateCollectionParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Collection created", created.into_dto())),
    ))
}

/// Update a collection (staff).
#[utoipa::path(
    put,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    request_body = UpdateCollectionDto,
    params(
        ("id" = i32, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "The updated collection", body = ApiResponse<CollectionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCollectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CollectionService::new(&state.db);

    match service
        .update(id, UpdateCollectionParams::from_dto(payload))
        .await?
    {
        Some(updated) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Collection updated", updated.into_dto())),
        )),
        None => Err(AppError::NotFound("Collection not found".to_string())),
    }
}

/// Deactivate a collection (staff).
#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "Collection deactivated"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CollectionService::new(&state.db);

    if service.deactivate(id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::message("Collection deactivated")),
        ))
    } else {
        Err(AppError::NotFound("Collection not found".to_string()))
    }
}

/// Restore a deactivated collection (staff).
#[utoipa::path(
    post,
    path = "/api/collections/{id}/restore",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "Collection restored"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn restore_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CollectionService::new(&state.db);

    if service.restore(id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::message("Collection restored")),
        ))
    } else {
        Err(AppError::NotFound("Collection not found".to_string()))
    }
}

/// Replace a collection's product list (staff). Positions follow list order.
#[utoipa::path(
    put,
    path = "/api/collections/{id}/products",
    tag = COLLECTION_TAG,
    request_body = AssignProductsDto,
    params(
        ("id" = i32, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "The collection after reassignment", body = ApiResponse<CollectionDto>),
        (status = 400, description = "A referenced product does not exist", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_products(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignProductsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CollectionService::new(&state.db);

    match service.assign_products(id, &payload.product_ids).await? {
        Some(updated) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Products assigned", updated.into_dto())),
        )),
        None => Err(AppError::NotFound("Collection not found".to_string())),
    }
}

/// Remove one product from a collection (staff).
#[utoipa::path(
    delete,
    path = "/api/collections/{id}/products/{product_id}",
    tag = COLLECTION_TAG,
    params(
        ("id" = i32, Path, description = "Collection id"),
        ("product_id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product removed from collection"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Product not in this collection", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_product(
    State(state): State<AppState>,
    session: Session,
    Path((id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CollectionService::new(&state.db);

    if service.remove_product(id, product_id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::message("Product removed from collection")),
        ))
    } else {
        Err(AppError::NotFound(
            "Product not in this collection".to_string(),
        ))
    }
}
