// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::money::deserialize_amount;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_pagamento")]
pub enum PaymentStatus {
    #[sqlx(rename = "pendente")]
    #[serde(rename = "pendente")]
    Pending,
    // Só pagamentos confirmados entram no faturamento
    #[sqlx(rename = "confirmado")]
    #[serde(rename = "confirmado")]
    Confirmed,
    #[sqlx(rename = "estornado")]
    #[serde(rename = "estornado")]
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "periodo_meta")]
pub enum GoalPeriod {
    #[sqlx(rename = "semanal")]
    #[serde(rename = "semanal")]
    Weekly,
    #[sqlx(rename = "mensal")]
    #[serde(rename = "mensal")]
    Monthly,
    #[sqlx(rename = "anual")]
    #[serde(rename = "anual")]
    Yearly,
}

// --- Pagamentos ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagamento {
    pub id: i32,
    #[schema(ignore)]
    pub usuario_id: i32,
    pub agendamento_id: Option<i32>,
    #[schema(value_type = Option<f64>, example = 180.0)]
    pub valor: Option<Decimal>,
    #[schema(example = "pix")]
    pub metodo_pagamento: String,
    pub data_pagamento: DateTime<Utc>,
    pub status: PaymentStatus,
    pub criado_em: DateTime<Utc>,
}

// Pagamento com o procedimento e o cliente do agendamento (se houver)
#[derive(Debug, Clone, FromRow)]
pub struct PagamentoDetalhe {
    #[sqlx(flatten)]
    pub pagamento: Pagamento,
    pub procedimento: Option<String>,
    pub cliente_nome: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePagamentoPayload {
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[validate(required(message = "O valor é obrigatório."))]
    #[schema(value_type = f64, example = 180.0)]
    pub valor: Option<Decimal>,

    #[validate(length(min = 1, message = "O método de pagamento é obrigatório."))]
    #[schema(example = "pix")]
    pub metodo_pagamento: String,

    #[validate(required(message = "A data do pagamento é obrigatória."))]
    #[schema(value_type = String, format = DateTime)]
    pub data_pagamento: Option<DateTime<Utc>>,

    pub agendamento_id: Option<i32>,

    // Sem status, o pagamento já entra como confirmado
    pub status: Option<PaymentStatus>,
}

// Formato usado pela tela de transações do financeiro
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPayload {
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[validate(required(message = "O valor é obrigatório."))]
    #[schema(value_type = f64, example = 250.0)]
    pub valor: Option<Decimal>,

    #[validate(length(min = 1, message = "O método de pagamento é obrigatório."))]
    #[schema(example = "cartao")]
    pub metodo: String,

    #[validate(required(message = "A data é obrigatória."))]
    #[schema(value_type = String, format = DateTime)]
    pub data: Option<DateTime<Utc>>,

    pub agendamento_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Receita,
    Despesa,
    Retirada,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    pub tipo: TransactionKind,
    #[schema(example = "Limpeza de Pele")]
    pub descricao: String,
    #[schema(value_type = f64, example = 180.0)]
    pub valor: Decimal,
    #[schema(example = "pix")]
    pub metodo: String,
    pub data: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<String>,
}

// --- Metas financeiras ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetaFinanceira {
    pub id: i32,
    #[schema(ignore)]
    pub usuario_id: i32,
    #[schema(example = "Faturar 5 mil em outubro")]
    pub descricao: String,
    #[schema(value_type = f64, example = 5000.0)]
    pub valor_meta: Decimal,
    pub periodo: GoalPeriod,
    pub atingida: bool,
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetaPayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub descricao: String,

    #[serde(default, deserialize_with = "deserialize_amount")]
    #[validate(required(message = "O valor da meta é obrigatório."))]
    #[schema(value_type = f64, example = 5000.0)]
    pub valor_meta: Option<Decimal>,

    #[validate(required(message = "O período é obrigatório."))]
    pub periodo: Option<GoalPeriod>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetaPayload {
    #[validate(length(min = 1, message = "A descrição não pode ficar vazia."))]
    pub descricao: Option<String>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schema(value_type = Option<f64>)]
    pub valor_meta: Option<Decimal>,

    pub periodo: Option<GoalPeriod>,
    pub atingida: Option<bool>,
}
