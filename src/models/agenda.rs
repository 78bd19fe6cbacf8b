// src/models/agenda.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::money::deserialize_amount, models::crm::OpcaoSelect};

// Mapeia o CREATE TYPE status_agendamento do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_agendamento")]
pub enum AppointmentStatus {
    #[sqlx(rename = "agendado")]
    #[serde(rename = "agendado")]
    Scheduled,
    #[sqlx(rename = "concluido")]
    #[serde(rename = "concluido")]
    Done,
    #[sqlx(rename = "cancelado")]
    #[serde(rename = "cancelado")]
    Canceled,
}

impl AppointmentStatus {
    /// Agendado ou concluído conta como atendimento; cancelado não.
    pub fn counts_as_attendance(self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Done)
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Agendamento {
    pub id: i32,
    #[schema(ignore)]
    pub usuario_id: i32,
    pub cliente_id: i32,
    pub servico_id: i32,
    pub colaborador_id: i32,
    pub data_hora: DateTime<Utc>,
    #[schema(example = "Limpeza de Pele Profunda")]
    pub procedimento: Option<String>,
    #[schema(value_type = Option<f64>, example = 180.0)]
    pub valor: Option<Decimal>,
    pub status: AppointmentStatus,
    pub pago: bool,
    pub criado_em: DateTime<Utc>,
}

// Agendamento com os nomes já resolvidos, para a listagem
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgendamentoDetalhe {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub agendamento: Agendamento,
    pub cliente_nome: Option<String>,
    pub servico_nome: Option<String>,
    pub colaborador_nome: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgendamentoPayload {
    #[validate(required(message = "O cliente é obrigatório."))]
    pub cliente_id: Option<i32>,

    #[validate(required(message = "O serviço é obrigatório."))]
    pub servico_id: Option<i32>,

    #[validate(required(message = "O colaborador é obrigatório."))]
    pub colaborador_id: Option<i32>,

    #[validate(required(message = "A data e hora são obrigatórias."))]
    #[schema(value_type = String, format = DateTime, example = "2026-10-19T14:30:00-03:00")]
    pub data_hora: Option<DateTime<Utc>>,

    pub procedimento: Option<String>,

    // Sem valor, o preço do serviço é usado
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schema(value_type = Option<f64>, example = 180.0)]
    pub valor: Option<Decimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgendamentoPayload {
    pub status: Option<AppointmentStatus>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schema(value_type = Option<f64>, example = 200.0)]
    pub valor: Option<Decimal>,

    pub pago: Option<bool>,
}

// Opções para montar o formulário de agendamento
#[derive(Debug, Serialize, ToSchema)]
pub struct AgendaDados {
    pub clientes: Vec<OpcaoSelect>,
    pub servicos: Vec<OpcaoSelect>,
    pub colaboradores: Vec<OpcaoSelect>,
}
