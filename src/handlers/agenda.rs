// src/handlers/agenda.rs

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
    models::agenda::{
        AgendaDados, Agendamento, AgendamentoDetalhe, CreateAgendamentoPayload,
        UpdateAgendamentoPayload,
    },
};

// GET /api/agenda
#[utoipa::path(
    get,
    path = "/api/agenda",
    tag = "Agenda",
    responses(
        (status = 200, description = "Agendamentos com cliente, serviço e colaborador", body = Vec<AgendamentoDetalhe>)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn list_agenda(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let agenda = app_state
        .agenda_service
        .list(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(agenda)))
}

// POST /api/agenda
#[utoipa::path(
    post,
    path = "/api/agenda",
    tag = "Agenda",
    request_body = CreateAgendamentoPayload,
    responses(
        (status = 201, description = "Atendimento agendado", body = Agendamento),
        (status = 400, description = "Dados inválidos ou cliente/serviço/colaborador inexistente")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn create_agendamento(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppJson(payload): AppJson<CreateAgendamentoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let agendamento = app_state
        .agenda_service
        .book(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(agendamento)))
}

// PATCH /api/agenda/{id}
#[utoipa::path(
    patch,
    path = "/api/agenda/{id}",
    tag = "Agenda",
    request_body = UpdateAgendamentoPayload,
    params(("id" = i32, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento atualizado", body = Agendamento),
        (status = 400, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn update_agendamento(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateAgendamentoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let agendamento = app_state
        .agenda_service
        .update(user.id, id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(agendamento)))
}

// GET /api/agenda/dados
#[utoipa::path(
    get,
    path = "/api/agenda/dados",
    tag = "Agenda",
    responses(
        (status = 200, description = "Opções do formulário de agendamento", body = AgendaDados)
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn get_form_options(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let dados = app_state
        .agenda_service
        .form_options(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(dados)))
}
