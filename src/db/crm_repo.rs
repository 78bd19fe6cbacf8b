// src/db/crm_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::crm::{Cliente, MemberStatus, MembroEquipe, OpcaoSelect},
};

#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn create_cliente(
        &self,
        usuario_id: i32,
        nome: &str,
        telefone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (usuario_id, nome, telefone, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, usuario_id, nome, telefone, email, criado_em
            "#,
        )
        .bind(usuario_id)
        .bind(nome)
        .bind(telefone)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    /// Mais recentes primeiro, como a tela mostra
    pub async fn list_clientes(&self, usuario_id: i32) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id, usuario_id, nome, telefone, email, criado_em
            FROM clientes
            WHERE usuario_id = $1
            ORDER BY criado_em DESC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn cliente_exists<'e, E>(&self, executor: E, usuario_id: i32, id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM clientes WHERE id = $1 AND usuario_id = $2)",
        )
        .bind(id)
        .bind(usuario_id)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn cliente_options<'e, E>(&self, executor: E, usuario_id: i32) -> Result<Vec<OpcaoSelect>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let options = sqlx::query_as::<_, OpcaoSelect>(
            "SELECT id, nome FROM clientes WHERE usuario_id = $1 ORDER BY nome ASC",
        )
        .bind(usuario_id)
        .fetch_all(executor)
        .await?;

        Ok(options)
    }

    // =========================================================================
    //  EQUIPE
    // =========================================================================

    pub async fn create_membro(
        &self,
        usuario_id: i32,
        nome: &str,
        email: &str,
        funcao: &str,
        status: MemberStatus,
    ) -> Result<MembroEquipe, AppError> {
        let membro = sqlx::query_as::<_, MembroEquipe>(
            r#"
            INSERT INTO equipe (usuario_id, nome, email, funcao, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, usuario_id, nome, email, funcao, status, ultima_atividade, criado_em
            "#,
        )
        .bind(usuario_id)
        .bind(nome)
        .bind(email)
        .bind(funcao)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(membro)
    }

    pub async fn list_equipe(&self, usuario_id: i32) -> Result<Vec<MembroEquipe>, AppError> {
        let equipe = sqlx::query_as::<_, MembroEquipe>(
            r#"
            SELECT id, usuario_id, nome, email, funcao, status, ultima_atividade, criado_em
            FROM equipe
            WHERE usuario_id = $1
            ORDER BY criado_em DESC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(equipe)
    }

    /// Só membros ativos podem receber agendamentos
    pub async fn colaborador_exists<'e, E>(&self, executor: E, usuario_id: i32, id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM equipe
                WHERE id = $1 AND usuario_id = $2 AND status = 'ativo'
            )
            "#,
        )
        .bind(id)
        .bind(usuario_id)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn colaborador_options<'e, E>(&self, executor: E, usuario_id: i32) -> Result<Vec<OpcaoSelect>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let options = sqlx::query_as::<_, OpcaoSelect>(
            r#"
            SELECT id, nome FROM equipe
            WHERE usuario_id = $1 AND status = 'ativo'
            ORDER BY nome ASC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(executor)
        .await?;

        Ok(options)
    }
}
