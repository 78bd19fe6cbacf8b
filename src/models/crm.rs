// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- CLIENTES ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[schema(example = 12)]
    pub id: i32,
    #[schema(ignore)] // O dono vem da sessão
    pub usuario_id: i32,
    #[schema(example = "Maria da Silva")]
    pub nome: String,
    #[schema(example = "(11) 99999-8888")]
    pub telefone: Option<String>,
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    pub telefone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
}

// --- EQUIPE ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_membro", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Ativo,
    Inativo,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembroEquipe {
    pub id: i32,
    #[schema(ignore)]
    pub usuario_id: i32,
    #[schema(example = "Carla Mendes")]
    pub nome: String,
    pub email: String,
    #[schema(example = "Esteticista")]
    pub funcao: String,
    pub status: MemberStatus,
    pub ultima_atividade: Option<DateTime<Utc>>,
    pub criado_em: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembroPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(min = 1, message = "A função é obrigatória."))]
    #[schema(example = "Esteticista")]
    pub funcao: String,

    // Sem status, o membro entra como ativo
    pub status: Option<MemberStatus>,
}

// Item simples para os selects do formulário de agendamento
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OpcaoSelect {
    pub id: i32,
    pub nome: String,
}
