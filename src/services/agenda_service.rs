// src/services/agenda_service.rs

use sqlx::PgPool;

use crate::{
    common::{
        error::{required, AppError},
        money::checked_amount,
    },
    db::{agenda_repo::NewAgendamento, AgendaRepository, CatalogRepository, CrmRepository},
    models::agenda::{
        AgendaDados, Agendamento, AgendamentoDetalhe, CreateAgendamentoPayload,
        UpdateAgendamentoPayload,
    },
};

#[derive(Clone)]
pub struct AgendaService {
    repo: AgendaRepository,
    crm_repo: CrmRepository,
    catalog_repo: CatalogRepository,
    pool: PgPool,
}

impl AgendaService {
    pub fn new(
        repo: AgendaRepository,
        crm_repo: CrmRepository,
        catalog_repo: CatalogRepository,
        pool: PgPool,
    ) -> Self {
        Self { repo, crm_repo, catalog_repo, pool }
    }

    pub async fn list(&self, usuario_id: i32) -> Result<Vec<AgendamentoDetalhe>, AppError> {
        self.repo.list_with_details(usuario_id).await
    }

    /// Agenda um atendimento. Cliente, serviço e colaborador precisam ser do mesmo dono.
    pub async fn book(
        &self,
        usuario_id: i32,
        payload: &CreateAgendamentoPayload,
    ) -> Result<Agendamento, AppError> {
        let cliente_id = required(payload.cliente_id, "clienteId")?;
        let servico_id = required(payload.servico_id, "servicoId")?;
        let colaborador_id = required(payload.colaborador_id, "colaboradorId")?;
        let data_hora = required(payload.data_hora, "dataHora")?;
        let valor = checked_amount(payload.valor, "valor")?;

        let mut tx = self.pool.begin().await?;

        if !self.crm_repo.cliente_exists(&mut *tx, usuario_id, cliente_id).await? {
            return Err(AppError::NotFound("cliente"));
        }

        let servico = self
            .catalog_repo
            .find_servico(&mut *tx, usuario_id, servico_id)
            .await?
            .ok_or(AppError::NotFound("servico"))?;

        if !self.crm_repo.colaborador_exists(&mut *tx, usuario_id, colaborador_id).await? {
            return Err(AppError::NotFound("colaborador"));
        }

        let procedimento = payload
            .procedimento
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let agendamento = self
            .repo
            .create(
                &mut *tx,
                usuario_id,
                NewAgendamento {
                    cliente_id,
                    servico_id,
                    colaborador_id,
                    data_hora,
                    procedimento,
                    // Sem valor informado, vale o preço do serviço
                    valor: valor.or(Some(servico.preco)),
                },
            )
            .await?;

        tx.commit().await?;

        Ok(agendamento)
    }

    pub async fn update(
        &self,
        usuario_id: i32,
        id: i32,
        payload: &UpdateAgendamentoPayload,
    ) -> Result<Agendamento, AppError> {
        let valor = checked_amount(payload.valor, "valor")?;

        self.repo
            .update(usuario_id, id, payload.status, valor, payload.pago)
            .await?
            .ok_or(AppError::NotFound("agendamento"))
    }

    /// Opções do formulário de agendamento, lidas num único snapshot
    pub async fn form_options(&self, usuario_id: i32) -> Result<AgendaDados, AppError> {
        let mut tx = self.pool.begin().await?;

        let clientes = self.crm_repo.cliente_options(&mut *tx, usuario_id).await?;
        let servicos = self.catalog_repo.servico_options(&mut *tx, usuario_id).await?;
        let colaboradores = self.crm_repo.colaborador_options(&mut *tx, usuario_id).await?;

        tx.commit().await?;

        Ok(AgendaDados { clientes, servicos, colaboradores })
    }
}
