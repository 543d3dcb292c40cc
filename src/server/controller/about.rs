use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        about::{AboutDto, UpdateAboutDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::about,
        service::about::AboutService,
        state::AppState,
    },
};

/// Tag for grouping about-page endpoints in OpenAPI documentation
pub static ABOUT_TAG: &str = "about";

/// Get the public about page. An unpublished page reads as empty.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = ABOUT_TAG,
    responses(
        (status = 200, description = "The about page", body = ApiResponse<AboutDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_about(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AboutService::new(&state.db);

    let page = service.get().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("About page retrieved", about::to_dto(page))),
    ))
}

/// Publish or rewrite the about page (staff). Records the editing user.
#[utoipa::path(
    put,
    path = "/api/about",
    tag = ABOUT_TAG,
    request_body = UpdateAboutDto,
    responses(
        (status = 200, description = "The published about page", body = ApiResponse<AboutDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Staff access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_about(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateAboutDto>,
) -> Result<impl IntoResponse, AppError> {
    let editor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = AboutService::new(&state.db);

    let page = service
        .upsert(payload.content, payload.milestones, editor.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "About page updated",
            about::to_dto(Some(page)),
        )),
    ))
}
