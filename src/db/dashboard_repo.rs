// src/db/dashboard_repo.rs

use async_trait::async_trait;
use sqlx::{Acquire, PgPool};

use crate::{
    common::error::AppError,
    models::dashboard::{AppointmentRecord, GoalRecord, PaymentRecord, ReportRows},
    reporting::window::ReportWindow,
    services::dashboard_service::ReportSource,
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportSource for DashboardRepository {
    async fn load(&self, owner_id: i32, window: &ReportWindow) -> Result<ReportRows, AppError> {
        // Uma conexão por leitura; devolvida ao pool no drop, inclusive em erro
        let mut conn = self.pool.acquire().await?;

        // Snapshot consistente das três consultas
        let mut tx = conn.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY").execute(&mut *tx).await?;

        // A. Pagamentos dos meses do gráfico (o mês atual está incluso)
        let payments = sqlx::query_as::<_, PaymentRecord>(
            r#"
            SELECT valor AS amount, data_pagamento AS paid_at, status
            FROM pagamentos
            WHERE usuario_id = $1
              AND data_pagamento >= $2
              AND data_pagamento < $3
            "#,
        )
        .bind(owner_id)
        .bind(window.trailing.start)
        .bind(window.trailing.end)
        .fetch_all(&mut *tx)
        .await?;

        // B. Agendamentos do mês, com o serviço para rótulo e preço
        let appointments = sqlx::query_as::<_, AppointmentRecord>(
            r#"
            SELECT
                a.data_hora    AS scheduled_at,
                a.procedimento AS "procedure",
                s.nome         AS service_name,
                a.valor        AS amount,
                s.preco        AS service_price,
                a.status
            FROM agendamentos a
            LEFT JOIN servicos s ON s.id = a.servico_id
            WHERE a.usuario_id = $1
              AND a.data_hora >= $2
              AND a.data_hora < $3
            ORDER BY a.data_hora ASC
            "#,
        )
        .bind(owner_id)
        .bind(window.month.start)
        .bind(window.month.end)
        .fetch_all(&mut *tx)
        .await?;

        // C. Metas
        let goals = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT
                valor_meta AS target_amount,
                periodo    AS period,
                atingida   AS achieved,
                criado_em  AS created_at
            FROM metas_financeiras
            WHERE usuario_id = $1
            ORDER BY criado_em DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ReportRows { payments, appointments, goals })
    }
}
