// src/db/user_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::auth::User};

const USER_COLUMNS: &str = r#"
    id, nome, email, senha_hash, tipo, nome_negocio,
    faturamento_mensal, principais_metas, cor_app, criado_em
"#;

// Dados de um novo dono de negócio, já com a senha em hash
pub struct NewUser<'a> {
    pub nome: &'a str,
    pub email: &'a str,
    pub senha_hash: &'a str,
    pub nome_negocio: Option<&'a str>,
    pub faturamento_mensal: Option<Decimal>,
    pub principais_metas: Option<&'a str>,
    pub cor_app: Option<&'a str>,
}

// O repositório de usuários, responsável por todas as interações com a tabela 'usuarios'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM usuarios WHERE email = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM usuarios WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn create_user<'e, E>(&self, executor: E, new_user: NewUser<'_>) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO usuarios (
                nome, email, senha_hash, tipo, nome_negocio,
                faturamento_mensal, principais_metas, cor_app
            )
            VALUES ($1, $2, $3, 'esteticista', $4, $5, $6, $7)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(new_user.nome)
            .bind(new_user.email)
            .bind(new_user.senha_hash)
            .bind(new_user.nome_negocio)
            .bind(new_user.faturamento_mensal)
            .bind(new_user.principais_metas)
            .bind(new_user.cor_app)
            .fetch_one(executor)
            .await
            .map_err(|e| {
                // Converte erro de violação de chave única em um erro mais amigável
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppError::EmailAlreadyExists;
                    }
                }
                e.into()
            })
    }
}
