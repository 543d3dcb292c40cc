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
        banner::{BannerDto, CreateBannerDto, UpdateBannerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::banner::{self, CreateBannerParams, UpdateBannerParams},
        service::banner::BannerService,
        state::AppState,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

#[derive(Deserialize)]
pub struct BannerListParams {
    #[serde(default)]
    pub active_only: bool,
}

/// List banners in position order.
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    params(
        ("active_only" = Option<bool>, Query, description = "Only active banners")
    ),
    responses(
        (status = 200, description = "Banners in position order", body = ApiResponse<Vec<BannerDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_banners(
    State(state): State<AppState>,
    Query(params): Query<BannerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    let banners: Vec<BannerDto> = service
        .list(params.active_only)
        .await?
        .into_iter()
        .map(banner::to_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Banners retrieved", banners)),
    ))
}

/// Get one banner.
#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner id")
    ),
    responses(
        (status = 200, description = "The banner", body = ApiResponse<BannerDto>),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    match service.get(id).await? {
        Some(found) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Banner retrieved", banner::to_dto(found))),
        )),
        None => Err(AppError::NotFound("Banner not found".to_string())),
    }
}

/// Create a banner (staff).
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body = CreateBannerDto,
    responses(
        (status = 201, description = "The created banner", body = ApiResponse<BannerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = BannerService::new(&state.db);

    let created = service
        .create(CreateBannerParams {
            title: payload.title,
            tagline: payload.tagline,
            image: payload.image,
            position: payload.position.unwrap_or(0),
            is_active: payload.is_active.unwrap_or(true),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Banner created", banner::to_dto(created))),
    ))
}

/// Update a banner (staff).
#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    request_body = UpdateBannerDto,
    params(
        ("id" = i32, Path, description = "Banner id")
    ),
    responses(
        (status = 200, description = "The updated banner", body = ApiResponse<BannerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = BannerService::new(&state.db);

    match service
        .update(
            id,
            UpdateBannerParams {
                title: payload.title,
                tagline: payload.tagline,
                image: payload.image,
                position: payload.position,
                is_active: payload.is_active,
            },
        )
        .await?
    {
        Some(updated) => Ok((
            StatusCode::OK,
            Json(ApiResponse::ok("Banner updated", banner::to_dto(updated))),
        )),
        None => Err(AppError::NotFound("Banner not found".to_string())),
    }
}

/// Delete a banner (staff). Banners hard-delete; there is no trash state.
#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner id")
    ),
    responses(
        (status = 200, description = "Banner deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = BannerService::new(&state.db);

    if service.delete(id).await? {
        Ok((StatusCode::OK, Json(ApiResponse::message("Banner deleted"))))
    } else {
        Err(AppError::NotFound("Banner not found".to_string()))
    }
}
