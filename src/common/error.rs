use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{common::i18n::{I18nStore, DEFAULT_LANG}, middleware::i18n::Locale};

// Erros de domínio. Viram `ApiError` na borda da requisição.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Referência para um registro que não existe (ou é de outro dono)
    #[error("Registro não encontrado: {0}")]
    NotFound(&'static str),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// O envelope de erro que sai para o cliente: `{ error, detalhes? }`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, error: error.into(), detalhes: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::NotFound(_)
            | AppError::EmailAlreadyExists
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::UserNotFound => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Traduz o erro para o idioma do cliente.
    /// Erros 500 são logados aqui e nunca expõem o detalhe interno.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let status = self.status();
        let lang = locale.0.as_str();

        match self {
            AppError::ValidationError(errors) => ApiError {
                status,
                error: store.translate(lang, "validation_failed"),
                detalhes: Some(describe_validation(errors)),
            },
            AppError::NotFound(entity) => {
                ApiError::new(status, store.translate(lang, &format!("not_found.{}", entity)))
            }
            AppError::EmailAlreadyExists => {
                ApiError::new(status, store.translate(lang, "email_already_exists"))
            }
            AppError::InvalidCredentials => {
                ApiError::new(status, store.translate(lang, "invalid_credentials"))
            }
            AppError::InvalidToken => ApiError::new(status, store.translate(lang, "unauthenticated")),
            AppError::UserNotFound => ApiError::new(status, store.translate(lang, "user_not_found")),
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError::new(status, store.translate(lang, "internal_error"))
            }
        }
    }
}

// "campo: mensagem; campo: mensagem", em ordem alfabética para ser estável
fn describe_validation(errors: &validator::ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect();
    lines.sort();
    lines.join("; ")
}

/// Valor de um campo obrigatório; ausente vira erro de validação do próprio campo.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| field_error(field, validator::ValidationError::new("required")))
}

/// Erro de validação de um único campo, com mensagem para o cliente.
pub fn invalid_field(field: &'static str, code: &'static str, message: &'static str) -> AppError {
    field_error(field, validator::ValidationError::new(code).with_message(message.into()))
}

fn field_error(field: &'static str, error: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::ValidationError(errors)
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let store = I18nStore::new();
        ApiError {
            status: StatusCode::BAD_REQUEST,
            error: store.translate(DEFAULT_LANG, "invalid_body"),
            detalhes: Some(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let store = I18nStore::new();
        ApiError {
            status: StatusCode::BAD_REQUEST,
            error: store.translate(DEFAULT_LANG, "invalid_query"),
            detalhes: Some(rejection.body_text()),
        }
    }
}
