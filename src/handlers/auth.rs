// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
    },
    config::AppState,
    middleware::{
        auth::{AuthenticatedUser, TOKEN_COOKIE},
        i18n::Locale,
    },
    models::auth::{
        AuthResponse, LoginPayload, MessageResponse, OnboardingPayload, OnboardingResponse, User,
    },
};

// POST /api/onboarding
#[utoipa::path(
    post,
    path = "/api/onboarding",
    tag = "Auth",
    request_body = OnboardingPayload,
    responses(
        (status = 201, description = "Conta criada", body = OnboardingResponse),
        (status = 400, description = "Dados inválidos ou e-mail já cadastrado")
    )
)]
pub async fn onboarding(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<OnboardingPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .auth_service
        .onboard(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(OnboardingResponse { usuario })))
}

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login realizado; o token também vai no cookie 'token'", body = AuthResponse),
        (status = 400, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let token = app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let cookie = Cookie::build((TOKEN_COOKIE, token.clone()))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(AuthResponse { success: true, token })))
}

// POST /api/logout
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Cookie de sessão removido", body = MessageResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));
    (
        jar,
        Json(MessageResponse { message: "Logout realizado com sucesso".to_string() }),
    )
}

// GET /api/me
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuário da sessão", body = User),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
