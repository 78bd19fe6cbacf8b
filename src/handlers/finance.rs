// src/handlers/finance.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
    },
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::finance::{
        CreateMetaPayload, CreatePagamentoPayload, CreateTransactionPayload, MetaFinanceira,
        Pagamento, Transaction, UpdateMetaPayload,
    },
};

// =============================================================================
//  PAGAMENTOS
// =============================================================================

// GET /api/pagamentos
#[utoipa::path(
    get,
    path = "/api/pagamentos",
    tag = "Financeiro",
    responses(
        (status = 200, description = "Pagamentos, mais recentes primeiro", body = Vec<Pagamento>)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_pagamentos(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let pagamentos = app_state
        .finance_service
        .list_payments(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(pagamentos)))
}

// POST /api/pagamentos
#[utoipa::path(
    post,
    path = "/api/pagamentos",
    tag = "Financeiro",
    request_body = CreatePagamentoPayload,
    responses(
        (status = 201, description = "Pagamento registrado", body = Pagamento),
        (status = 400, description = "Dados inválidos ou agendamento inexistente")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_pagamento(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreatePagamentoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let pagamento = app_state
        .finance_service
        .record_payment(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(pagamento)))
}

// =============================================================================
//  TRANSAÇÕES
// =============================================================================

// GET /api/transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Financeiro",
    responses(
        (status = 200, description = "Pagamentos no formato da tela de transações", body = Vec<Transaction>)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = app_state
        .finance_service
        .list_transactions(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(transactions)))
}

// POST /api/transactions
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Financeiro",
    request_body = CreateTransactionPayload,
    responses(
        (status = 201, description = "Receita registrada", body = Transaction),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateTransactionPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let transaction = app_state
        .finance_service
        .create_transaction(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// =============================================================================
//  METAS
// =============================================================================

// GET /api/metas
#[utoipa::path(
    get,
    path = "/api/metas",
    tag = "Financeiro",
    responses(
        (status = 200, description = "Metas financeiras", body = Vec<MetaFinanceira>)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_metas(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let metas = app_state
        .finance_service
        .list_goals(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(metas)))
}

// POST /api/metas
#[utoipa::path(
    post,
    path = "/api/metas",
    tag = "Financeiro",
    request_body = CreateMetaPayload,
    responses(
        (status = 201, description = "Meta criada", body = MetaFinanceira),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_meta(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateMetaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let meta = app_state
        .finance_service
        .create_goal(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(meta)))
}

// PUT /api/metas/{id}
#[utoipa::path(
    put,
    path = "/api/metas/{id}",
    tag = "Financeiro",
    request_body = UpdateMetaPayload,
    params(("id" = i32, Path, description = "ID da meta")),
    responses(
        (status = 200, description = "Meta atualizada", body = MetaFinanceira),
        (status = 400, description = "Dados inválidos ou meta não encontrada")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn update_meta(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateMetaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let meta = app_state
        .finance_service
        .update_goal(user.id, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(meta)))
}
