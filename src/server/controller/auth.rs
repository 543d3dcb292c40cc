use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{LoginDto, RegisterDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{self, UpdateProfileParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Session key holding the authenticated user id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// Register a new customer account and log it in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let created = service
        .register(
            payload.name,
            payload.email,
            &payload.password,
            payload.phone,
            payload.address,
        )
        .await?;

    session.insert(SESSION_AUTH_USER_ID, created.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Registration successful",
            user::to_dto(created),
        )),
    ))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<UserDto>),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let logged_in = service.login(&payload.email, &payload.password).await?;

    session.insert(SESSION_AUTH_USER_ID, logged_in.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Login successful", user::to_dto(logged_in))),
    ))
}

/// Log out, destroying the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Logged out"))))
}

/// Get the authenticated account.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated account", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User retrieved", user::to_dto(current))),
    ))
}

/// Update the authenticated account's profile.
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AuthService::new(&state.db);

    let updated = service
        .update_profile(
            current.id,
            UpdateProfileParams {
                name: payload.name,
                phone: payload.phone,
                address: payload.address,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Profile updated", user::to_dto(updated))),
    ))
}
