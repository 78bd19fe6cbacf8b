// src/handlers/crm.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
    },
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::crm::{Cliente, CreateClientePayload, CreateMembroPayload, MembroEquipe},
};

// =============================================================================
//  CLIENTES
// =============================================================================

// GET /api/clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Clientes do negócio", body = Vec<Cliente>),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_clientes(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let clientes = app_state
        .crm_service
        .list_clientes(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(clientes)))
}

// POST /api/clientes
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = CreateClientePayload,
    responses(
        (status = 201, description = "Cliente criado", body = Cliente),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_cliente(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateClientePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let cliente = app_state
        .crm_service
        .create_cliente(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

// =============================================================================
//  EQUIPE
// =============================================================================

// GET /api/equipe
#[utoipa::path(
    get,
    path = "/api/equipe",
    tag = "Equipe",
    responses(
        (status = 200, description = "Membros da equipe", body = Vec<MembroEquipe>),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_equipe(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let equipe = app_state
        .crm_service
        .list_equipe(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(equipe)))
}

// POST /api/equipe
#[utoipa::path(
    post,
    path = "/api/equipe",
    tag = "Equipe",
    request_body = CreateMembroPayload,
    responses(
        (status = 201, description = "Membro adicionado", body = MembroEquipe),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_membro(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateMembroPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let membro = app_state
        .crm_service
        .create_membro(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(membro)))
}
