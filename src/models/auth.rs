// src/models/auth.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::money::deserialize_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_usuario", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Esteticista,
    Colaborador,
}

// Representa um usuário (dono do negócio) vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana Souza")]
    pub nome: String,
    #[schema(example = "ana@studio.com")]
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub senha_hash: String,

    pub tipo: UserKind,
    #[schema(example = "Studio Ana Estética")]
    pub nome_negocio: Option<String>,
    #[schema(value_type = Option<f64>, example = 5000.0)]
    pub faturamento_mensal: Option<Decimal>,
    pub principais_metas: Option<String>,
    #[schema(example = "#9b5de5")]
    pub cor_app: Option<String>,
    pub criado_em: DateTime<Utc>,
}

// Dados do onboarding (cadastro do dono do negócio)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Ana Souza")]
    pub full_name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "ana@studio.com")]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,

    pub business_name: Option<String>,

    // Vira também a meta mensal inicial
    #[serde(default, deserialize_with = "deserialize_amount")]
    #[schema(value_type = Option<f64>, example = 5000.0)]
    pub monthly_goal: Option<Decimal>,

    pub business_goals: Option<String>,
    pub app_color: Option<String>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OnboardingResponse {
    pub usuario: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,   // Subject (ID do usuário)
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued At
}
