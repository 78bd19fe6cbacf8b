// src/db/finance_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::finance::{GoalPeriod, MetaFinanceira, Pagamento, PagamentoDetalhe, PaymentStatus},
};

const PAGAMENTO_COLUMNS: &str = r#"
    id, usuario_id, agendamento_id, valor, metodo_pagamento,
    data_pagamento, status, criado_em
"#;

const META_COLUMNS: &str = "id, usuario_id, descricao, valor_meta, periodo, atingida, criado_em";

pub struct NewPagamento<'a> {
    pub agendamento_id: Option<i32>,
    pub valor: Decimal,
    pub metodo_pagamento: &'a str,
    pub data_pagamento: DateTime<Utc>,
    pub status: PaymentStatus,
}

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  PAGAMENTOS
    // =========================================================================

    pub async fn create_pagamento<'e, E>(
        &self,
        executor: E,
        usuario_id: i32,
        new: NewPagamento<'_>,
    ) -> Result<Pagamento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO pagamentos (
                usuario_id, agendamento_id, valor, metodo_pagamento, data_pagamento, status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            PAGAMENTO_COLUMNS
        );

        let pagamento = sqlx::query_as::<_, Pagamento>(&sql)
            .bind(usuario_id)
            .bind(new.agendamento_id)
            .bind(new.valor)
            .bind(new.metodo_pagamento)
            .bind(new.data_pagamento)
            .bind(new.status)
            .fetch_one(executor)
            .await?;

        Ok(pagamento)
    }

    pub async fn list_pagamentos(&self, usuario_id: i32) -> Result<Vec<Pagamento>, AppError> {
        let sql = format!(
            "SELECT {} FROM pagamentos WHERE usuario_id = $1 ORDER BY data_pagamento DESC",
            PAGAMENTO_COLUMNS
        );
        let pagamentos = sqlx::query_as::<_, Pagamento>(&sql)
            .bind(usuario_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(pagamentos)
    }

    /// Pagamentos com procedimento e cliente do agendamento, para a tela de transações
    pub async fn list_pagamento_details(&self, usuario_id: i32) -> Result<Vec<PagamentoDetalhe>, AppError> {
        let details = sqlx::query_as::<_, PagamentoDetalhe>(
            r#"
            SELECT
                p.id, p.usuario_id, p.agendamento_id, p.valor, p.metodo_pagamento,
                p.data_pagamento, p.status, p.criado_em,
                COALESCE(a.procedimento, s.nome) AS procedimento,
                c.nome AS cliente_nome
            FROM pagamentos p
            LEFT JOIN agendamentos a ON a.id = p.agendamento_id
            LEFT JOIN servicos s ON s.id = a.servico_id
            LEFT JOIN clientes c ON c.id = a.cliente_id
            WHERE p.usuario_id = $1
            ORDER BY p.data_pagamento DESC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    pub async fn find_pagamento_detail<'e, E>(
        &self,
        executor: E,
        usuario_id: i32,
        id: i32,
    ) -> Result<Option<PagamentoDetalhe>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let detail = sqlx::query_as::<_, PagamentoDetalhe>(
            r#"
            SELECT
                p.id, p.usuario_id, p.agendamento_id, p.valor, p.metodo_pagamento,
                p.data_pagamento, p.status, p.criado_em,
                COALESCE(a.procedimento, s.nome) AS procedimento,
                c.nome AS cliente_nome
            FROM pagamentos p
            LEFT JOIN agendamentos a ON a.id = p.agendamento_id
            LEFT JOIN servicos s ON s.id = a.servico_id
            LEFT JOIN clientes c ON c.id = a.cliente_id
            WHERE p.id = $1 AND p.usuario_id = $2
            "#,
        )
        .bind(id)
        .bind(usuario_id)
        .fetch_optional(executor)
        .await?;

        Ok(detail)
    }

    // =========================================================================
    //  METAS
    // =========================================================================

    pub async fn create_meta<'e, E>(
        &self,
        executor: E,
        usuario_id: i32,
        descricao: &str,
        valor_meta: Decimal,
        periodo: GoalPeriod,
    ) -> Result<MetaFinanceira, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO metas_financeiras (usuario_id, descricao, valor_meta, periodo)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            META_COLUMNS
        );

        let meta = sqlx::query_as::<_, MetaFinanceira>(&sql)
            .bind(usuario_id)
            .bind(descricao)
            .bind(valor_meta)
            .bind(periodo)
            .fetch_one(executor)
            .await?;

        Ok(meta)
    }

    pub async fn list_metas(&self, usuario_id: i32) -> Result<Vec<MetaFinanceira>, AppError> {
        let sql = format!(
            "SELECT {} FROM metas_financeiras WHERE usuario_id = $1 ORDER BY criado_em DESC",
            META_COLUMNS
        );
        let metas = sqlx::query_as::<_, MetaFinanceira>(&sql)
            .bind(usuario_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(metas)
    }

    pub async fn update_meta(
        &self,
        usuario_id: i32,
        id: i32,
        descricao: Option<&str>,
        valor_meta: Option<Decimal>,
        periodo: Option<GoalPeriod>,
        atingida: Option<bool>,
    ) -> Result<Option<MetaFinanceira>, AppError> {
        let sql = format!(
            r#"
            UPDATE metas_financeiras
            SET descricao  = COALESCE($3, descricao),
                valor_meta = COALESCE($4, valor_meta),
                periodo    = COALESCE($5, periodo),
                atingida   = COALESCE($6, atingida)
            WHERE id = $1 AND usuario_id = $2
            RETURNING {}
            "#,
            META_COLUMNS
        );

        let meta = sqlx::query_as::<_, MetaFinanceira>(&sql)
            .bind(id)
            .bind(usuario_id)
            .bind(descricao)
            .bind(valor_meta)
            .bind(periodo)
            .bind(atingida)
            .fetch_optional(&self.pool)
            .await?;

        Ok(meta)
    }
}
