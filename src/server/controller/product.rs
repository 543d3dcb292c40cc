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
        product::{
            AddProductImageDto, CreateProductDto, ProductDto, ProductImageDto, UpdateProductDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{
            self, CreateProductParams, ProductFilter, ProductWithImages, UpdateProductParams,
        },
        service::product::ProductService,
        state::AppState,
    },
};

use entity::user::UserRole;

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize)]
pub struct ProductListParams {
    pub search: Option<String>,
    pub collection_id: Option<i32>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub include_inactive: bool,
}

/// List catalog products.
///
/// Public callers see active products only; the `include_inactive` flag is
/// honored for staff sessions and silently ignored otherwise.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("search" = Option<String>, Query, description = "Match name, description, or SKU"),
        ("collection_id" = Option<i32>, Query, description = "Restrict to one collection"),
        ("in_stock" = Option<bool>, Query, description = "Only products with stock > 0"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated products (staff only)")
    ),
    responses(
        (status = 200, description = "Matching products, newest first", body = ApiResponse<Vec<ProductDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ProductListParams>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).current_user().await?;
    let is_staff = current
        .map(|user| matches!(user.role, UserRole::Admin | UserRole::Editor))
        .unwrap_or(false);

    let filter = ProductFilter {
        search: params.search,
        collection_id: params.collection_id,
        in_stock: params.in_stock,
        include_inactive: params.include_inactive && is_staff,
    };

    let service = ProductService::new(&state.db);

    let products: Vec<ProductDto> = service
        .list(filter)
        .await?
        .into_iter()
        .map(ProductWithImages::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Products retrieved", products)),
    ))
}

/// Get one product with its image gallery.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product", body = ApiResponse<ProductDto>),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    match service.get(id).await? {
        Some(found) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Product retrieved", found.into_dto())),
        )),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Create a catalog product (staff). The slug is generated from the name
/// when absent.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "The created product", body = ApiResponse<ProductDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = ProductService::new(&state.db);

    let created = service.create(CreateProductParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Product created", created.into_dto())),
    ))
}

/// Update a product (staff).
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    request_body = UpdateProductDto,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The updated product", body = ApiResponse<ProductDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = ProductService::new(&state.db);

    match service
        .update(id, UpdateProductParams::from_dto(payload))
        .await?
    {
        Some(updated) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Product updated", updated.into_dto())),
        )),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Deactivate a product (staff).
///
/// Existing cart lines keep their snapshot; the product just stops being
/// listable and addable. This is the explicit availability flag, not a
/// deletion.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deactivated"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = ProductService::new(&state.db);

    if service.deactivate(id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::message("Product deactivated")),
        ))
    } else {
        Err(AppError::NotFound("Product not found".to_string()))
    }
}

/// Restore a deactivated product (staff).
#[utoipa::path(
    post,
    path = "/api/products/{id}/restore",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product restored"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn restore_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = ProductService::new(&state.db);

    if service.restore(id).await? {
        Ok((
            StatusCode::OK,
            Json(ApiResponse::message("Product restored")),
        ))
    } else {
        Err(AppError::NotFound("Product not found".to_string()))
    }
}

/// Attach an image record to a product (staff). Images are URL records;
/// uploads are handled elsewhere.
#[utoipa::path(
    post,
    path = "/api/products/{id}/images",
    tag = PRODUCT_TAG,
    request_body = AddProductImageDto,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 201, description = "The created image record", body = ApiResponse<ProductImageDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_product_image(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AddProductImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = ProductService::new(&state.db);

    match service
        .add_image(id, payload.filename, payload.url, payload.position)
        .await?
    {
        Some(image) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok("Image added", product::image_to_dto(image))),
        )),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Remove an image record from a product's gallery (staff).
#[utoipa::path(
    delete,
    path = "/api/products/{id}/images/{image_id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product id"),
        ("image_id" = i32, Path, description = "Image id")
    ),
    responses(
        (status = 200, description = "Image removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Image not found for this product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product_image(
    State(state): State<AppState>,
    session: Session,
    Path((id, image_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = ProductService::new(&state.db);

    if service.delete_image(id, image_id).await? {
        Ok((StatusCode::OK, Json(ApiResponse::message("Image removed"))))
    } else {
        Err(AppError::NotFound("Image not found".to_string()))
    }
}
