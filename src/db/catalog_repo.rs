// src/db/catalog_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::{
        catalog::{Produto, Servico},
        crm::OpcaoSelect,
    },
};

const SERVICO_COLUMNS: &str = "id, usuario_id, nome, descricao, preco, criado_em";
const PRODUTO_COLUMNS: &str =
    "id, usuario_id, nome, categoria, estoque, validade, custo, preco_venda, criado_em";

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  SERVIÇOS
    // =========================================================================

    pub async fn create_servico(
        &self,
        usuario_id: i32,
        nome: &str,
        descricao: Option<&str>,
        preco: Decimal,
    ) -> Result<Servico, AppError> {
        let sql = format!(
            "INSERT INTO servicos (usuario_id, nome, descricao, preco) VALUES ($1, $2, $3, $4) RETURNING {}",
            SERVICO_COLUMNS
        );
        let servico = sqlx::query_as::<_, Servico>(&sql)
            .bind(usuario_id)
            .bind(nome)
            .bind(descricao)
            .bind(preco)
            .fetch_one(&self.pool)
            .await?;

        Ok(servico)
    }

    pub async fn list_servicos(&self, usuario_id: i32) -> Result<Vec<Servico>, AppError> {
        let sql = format!(
            "SELECT {} FROM servicos WHERE usuario_id = $1 ORDER BY nome ASC",
            SERVICO_COLUMNS
        );
        let servicos = sqlx::query_as::<_, Servico>(&sql)
            .bind(usuario_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(servicos)
    }

    /// Busca o serviço do dono; usado para validar e precificar agendamentos
    pub async fn find_servico<'e, E>(&self, executor: E, usuario_id: i32, id: i32) -> Result<Option<Servico>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {} FROM servicos WHERE id = $1 AND usuario_id = $2",
            SERVICO_COLUMNS
        );
        let servico = sqlx::query_as::<_, Servico>(&sql)
            .bind(id)
            .bind(usuario_id)
            .fetch_optional(executor)
            .await?;

        Ok(servico)
    }

    pub async fn servico_options<'e, E>(&self, executor: E, usuario_id: i32) -> Result<Vec<OpcaoSelect>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let options = sqlx::query_as::<_, OpcaoSelect>(
            "SELECT id, nome FROM servicos WHERE usuario_id = $1 ORDER BY nome ASC",
        )
        .bind(usuario_id)
        .fetch_all(executor)
        .await?;

        Ok(options)
    }

    // =========================================================================
    //  PRODUTOS
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn create_produto(
        &self,
        usuario_id: i32,
        nome: &str,
        categoria: Option<&str>,
        estoque: i32,
        validade: Option<NaiveDate>,
        custo: Decimal,
        preco_venda: Decimal,
    ) -> Result<Produto, AppError> {
        let sql = format!(
            r#"
            INSERT INTO produtos (usuario_id, nome, categoria, estoque, validade, custo, preco_venda)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PRODUTO_COLUMNS
        );
        let produto = sqlx::query_as::<_, Produto>(&sql)
            .bind(usuario_id)
            .bind(nome)
            .bind(categoria)
            .bind(estoque)
            .bind(validade)
            .bind(custo)
            .bind(preco_venda)
            .fetch_one(&self.pool)
            .await?;

        Ok(produto)
    }

    pub async fn list_produtos(&self, usuario_id: i32) -> Result<Vec<Produto>, AppError> {
        let sql = format!(
            "SELECT {} FROM produtos WHERE usuario_id = $1 ORDER BY criado_em DESC",
            PRODUTO_COLUMNS
        );
        let produtos = sqlx::query_as::<_, Produto>(&sql)
            .bind(usuario_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(produtos)
    }
}
