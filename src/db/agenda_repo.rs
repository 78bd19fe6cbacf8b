// src/db/agenda_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::agenda::{Agendamento, AgendamentoDetalhe, AppointmentStatus},
};

const AGENDAMENTO_COLUMNS: &str = r#"
    id, usuario_id, cliente_id, servico_id, colaborador_id,
    data_hora, procedimento, valor, status, pago, criado_em
"#;

pub struct NewAgendamento<'a> {
    pub cliente_id: i32,
    pub servico_id: i32,
    pub colaborador_id: i32,
    pub data_hora: DateTime<Utc>,
    pub procedimento: Option<&'a str>,
    pub valor: Option<Decimal>,
}

#[derive(Clone)]
pub struct AgendaRepository {
    pool: PgPool,
}

impl AgendaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista com os nomes de cliente, serviço e colaborador já resolvidos
    pub async fn list_with_details(&self, usuario_id: i32) -> Result<Vec<AgendamentoDetalhe>, AppError> {
        let rows = sqlx::query_as::<_, AgendamentoDetalhe>(
            r#"
            SELECT
                a.id, a.usuario_id, a.cliente_id, a.servico_id, a.colaborador_id,
                a.data_hora, a.procedimento, a.valor, a.status, a.pago, a.criado_em,
                c.nome AS cliente_nome,
                s.nome AS servico_nome,
                e.nome AS colaborador_nome
            FROM agendamentos a
            LEFT JOIN clientes c ON c.id = a.cliente_id
            LEFT JOIN servicos s ON s.id = a.servico_id
            LEFT JOIN equipe e ON e.id = a.colaborador_id
            WHERE a.usuario_id = $1
            ORDER BY a.data_hora ASC
            "#,
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        usuario_id: i32,
        new: NewAgendamento<'_>,
    ) -> Result<Agendamento, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO agendamentos (
                usuario_id, cliente_id, servico_id, colaborador_id,
                data_hora, procedimento, valor, status, pago
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'agendado', FALSE)
            RETURNING {}
            "#,
            AGENDAMENTO_COLUMNS
        );

        let agendamento = sqlx::query_as::<_, Agendamento>(&sql)
            .bind(usuario_id)
            .bind(new.cliente_id)
            .bind(new.servico_id)
            .bind(new.colaborador_id)
            .bind(new.data_hora)
            .bind(new.procedimento)
            .bind(new.valor)
            .fetch_one(executor)
            .await?;

        Ok(agendamento)
    }

    /// Campos ausentes mantêm o valor atual. None se o agendamento não é do dono.
    pub async fn update(
        &self,
        usuario_id: i32,
        id: i32,
        status: Option<AppointmentStatus>,
        valor: Option<Decimal>,
        pago: Option<bool>,
    ) -> Result<Option<Agendamento>, AppError> {
        let sql = format!(
            r#"
            UPDATE agendamentos
            SET status = COALESCE($3, status),
                valor  = COALESCE($4, valor),
                pago   = COALESCE($5, pago)
            WHERE id = $1 AND usuario_id = $2
            RETURNING {}
            "#,
            AGENDAMENTO_COLUMNS
        );

        let agendamento = sqlx::query_as::<_, Agendamento>(&sql)
            .bind(id)
            .bind(usuario_id)
            .bind(status)
            .bind(valor)
            .bind(pago)
            .fetch_optional(&self.pool)
            .await?;

        Ok(agendamento)
    }

    pub async fn exists<'e, E>(&self, executor: E, usuario_id: i32, id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM agendamentos WHERE id = $1 AND usuario_id = $2)",
        )
        .bind(id)
        .bind(usuario_id)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn mark_paid<'e, E>(&self, executor: E, usuario_id: i32, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE agendamentos SET pago = TRUE WHERE id = $1 AND usuario_id = $2")
            .bind(id)
            .bind(usuario_id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
