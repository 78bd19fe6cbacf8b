// src/models/catalog.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::money::deserialize_amount;

// --- SERVIÇOS (procedimentos oferecidos) ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Servico {
    pub id: i32,
    #[schema(ignore)]
    pub usuario_id: i32,
    #[schema(example = "Limpeza de Pele")]
    pub nome: String,
    pub descricao: Option<String>,
    #[schema(value_type = f64, example = 180.0)]
    pub preco: Decimal,
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicoPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Limpeza de Pele")]
    pub nome: String,

    pub descricao: Option<String>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    #[validate(required(message = "O preço é obrigatório."))]
    #[schema(value_type = f64, example = 180.0)]
    pub preco: Option<Decimal>,
}

// --- PRODUTOS (estoque) ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    pub id: i32,
    #[schema(ignore)]
    pub usuario_id: i32,
    #[schema(example = "Sérum Vitamina C")]
    pub nome: String,
    pub categoria: Option<String>,
    #[schema(example = 10)]
    pub estoque: i32,
    #[schema(value_type = Option<String>, format = Date, example = "2026-12-31")]
    pub validade: Option<NaiveDate>,
    #[schema(value_type = f64, example = 45.0)]
    pub custo: Decimal,
    #[schema(value_type = f64, example = 89.9)]
    pub preco_venda: Decimal,
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProdutoPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    pub categoria: Option<String>,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    pub estoque: Option<i32>,

    #[schema(value_type = Option<String>, format = Date, example = "2026-12-31")]
    pub validade: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schema(value_type = Option<f64>, example = 45.0)]
    pub custo: Option<Decimal>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    #[validate(required(message = "O preço de venda é obrigatório."))]
    #[schema(value_type = f64, example = 89.9)]
    pub preco_venda: Option<Decimal>,
}
