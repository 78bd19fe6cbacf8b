// src/handlers/catalog.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
    },
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::catalog::{CreateProdutoPayload, CreateServicoPayload, Produto, Servico},
};

// GET /api/servicos
#[utoipa::path(
    get,
    path = "/api/servicos",
    tag = "Serviços",
    responses(
        (status = 200, description = "Serviços oferecidos", body = Vec<Servico>)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_servicos(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let servicos = app_state
        .catalog_service
        .list_servicos(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(servicos)))
}

// POST /api/servicos
#[utoipa::path(
    post,
    path = "/api/servicos",
    tag = "Serviços",
    request_body = CreateServicoPayload,
    responses(
        (status = 201, description = "Serviço criado", body = Servico),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_servico(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateServicoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let servico = app_state
        .catalog_service
        .create_servico(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(servico)))
}

// GET /api/produtos
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    responses(
        (status = 200, description = "Produtos em estoque", body = Vec<Produto>)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_produtos(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let produtos = app_state
        .catalog_service
        .list_produtos(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(produtos)))
}

// POST /api/produtos
#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Produtos",
    request_body = CreateProdutoPayload,
    responses(
        (status = 201, description = "Produto cadastrado", body = Produto),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_produto(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateProdutoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let produto = app_state
        .catalog_service
        .create_produto(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(produto)))
}
