// src/services/crm_service.rs

use crate::{
    common::error::AppError,
    db::CrmRepository,
    models::crm::{Cliente, CreateClientePayload, CreateMembroPayload, MemberStatus, MembroEquipe},
};

#[derive(Clone)]
pub struct CrmService {
    repo: CrmRepository,
}

impl CrmService {
    pub fn new(repo: CrmRepository) -> Self {
        Self { repo }
    }

    pub async fn create_cliente(
        &self,
        usuario_id: i32,
        payload: &CreateClientePayload,
    ) -> Result<Cliente, AppError> {
        self.repo
            .create_cliente(
                usuario_id,
                payload.nome.trim(),
                non_blank(payload.telefone.as_deref()),
                non_blank(payload.email.as_deref()),
            )
            .await
    }

    pub async fn list_clientes(&self, usuario_id: i32) -> Result<Vec<Cliente>, AppError> {
        self.repo.list_clientes(usuario_id).await
    }

    pub async fn create_membro(
        &self,
        usuario_id: i32,
        payload: &CreateMembroPayload,
    ) -> Result<MembroEquipe, AppError> {
        self.repo
            .create_membro(
                usuario_id,
                payload.nome.trim(),
                payload.email.trim(),
                payload.funcao.trim(),
                payload.status.unwrap_or(MemberStatus::Ativo),
            )
            .await
    }

    pub async fn list_equipe(&self, usuario_id: i32) -> Result<Vec<MembroEquipe>, AppError> {
        self.repo.list_equipe(usuario_id).await
    }
}

// Strings vazias do formulário viram NULL
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
