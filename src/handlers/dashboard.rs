// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    common::{
        error::{invalid_field, ApiError},
        extract::AppQuery,
    },
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::dashboard::{DashboardQuery, DashboardResponse},
    reporting::window::ReportWindow,
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Faturamento, atendimentos, meta, gráfico e agenda do dia", body = DashboardResponse),
        (status = 400, description = "Data inválida"),
        (status = 401, description = "Não autenticado"),
        (status = 500, description = "Falha ao ler os dados")
    ),
    security(("api_jwt" = []), ("cookie_token" = []))
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    AppQuery(query): AppQuery<DashboardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // Sem data, o dia de referência é hoje no fuso do negócio
    let window = match query.data {
        Some(date) => ReportWindow::for_date(date, app_state.timezone),
        None => ReportWindow::at(Utc::now().with_timezone(&app_state.timezone)),
    }
    .ok_or_else(|| {
        invalid_field("data", "range", "Data fora do intervalo suportado.")
            .to_api_error(&locale, &app_state.i18n_store)
    })?;

    let dashboard = app_state
        .dashboard_service
        .get_dashboard(user.id, &window, &locale.0)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(dashboard)))
}
