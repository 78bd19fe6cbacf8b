// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::models::{
    agenda::AppointmentStatus,
    finance::{GoalPeriod, PaymentStatus},
};

// --- Linhas brutas lidas pelo repositório do dashboard ---

#[derive(Debug, Clone, FromRow)]
pub struct PaymentRecord {
    pub amount: Option<Decimal>,
    pub paid_at: DateTime<Utc>,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct AppointmentRecord {
    pub scheduled_at: DateTime<Utc>,
    pub procedure: Option<String>,
    pub service_name: Option<String>,
    pub amount: Option<Decimal>,
    pub service_price: Option<Decimal>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct GoalRecord {
    pub target_amount: Option<Decimal>,
    pub period: GoalPeriod,
    pub achieved: bool,
    pub created_at: DateTime<Utc>,
}

/// Tudo o que o agregador precisa para um dono e uma janela.
#[derive(Debug, Clone, Default)]
pub struct ReportRows {
    pub payments: Vec<PaymentRecord>,
    pub appointments: Vec<AppointmentRecord>,
    pub goals: Vec<GoalRecord>,
}

// --- Contrato JSON do dashboard ---

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Dia de referência (YYYY-MM-DD). Sem ele, vale o dia de hoje.
    #[param(value_type = Option<String>, format = Date, example = "2026-10-19")]
    pub data: Option<chrono::NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[schema(value_type = f64, example = 4231.89)]
    pub faturamento: Decimal,
    #[schema(example = 32)]
    pub atendimentos: u32,
    #[schema(value_type = f64, example = 132.25)]
    pub ticket_medio: Decimal,
    #[schema(value_type = f64, example = 5000.0)]
    pub meta_mensal: Decimal,
    #[schema(value_type = f64, example = 84.64)]
    pub progresso_meta: Decimal,
    pub chart_data: Vec<ChartEntry>,
    pub daily_agenda: Vec<AgendaEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChartEntry {
    #[schema(example = "Out")]
    pub month: String,
    #[schema(value_type = f64, example = 1860.0)]
    pub revenue: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AgendaEntry {
    #[schema(example = "09:00")]
    pub time: String,
    #[schema(example = "Limpeza de Pele")]
    pub procedure: String,
    #[schema(value_type = f64, example = 180.0)]
    pub value: Decimal,
}
