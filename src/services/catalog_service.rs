// src/services/catalog_service.rs

use rust_decimal::Decimal;

use crate::{
    common::{
        error::{required, AppError},
        money::checked_amount,
    },
    db::CatalogRepository,
    models::catalog::{CreateProdutoPayload, CreateServicoPayload, Produto, Servico},
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    pub async fn create_servico(
        &self,
        usuario_id: i32,
        payload: &CreateServicoPayload,
    ) -> Result<Servico, AppError> {
        let preco = required(checked_amount(payload.preco, "preco")?, "preco")?;
        let descricao = payload
            .descricao
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        self.repo
            .create_servico(usuario_id, payload.nome.trim(), descricao, preco)
            .await
    }

    pub async fn list_servicos(&self, usuario_id: i32) -> Result<Vec<Servico>, AppError> {
        self.repo.list_servicos(usuario_id).await
    }

    pub async fn create_produto(
        &self,
        usuario_id: i32,
        payload: &CreateProdutoPayload,
    ) -> Result<Produto, AppError> {
        let preco_venda =
            required(checked_amount(payload.preco_venda, "precoVenda")?, "precoVenda")?;
        let custo = checked_amount(payload.custo, "custo")?.unwrap_or(Decimal::ZERO);

        self.repo
            .create_produto(
                usuario_id,
                payload.nome.trim(),
                payload.categoria.as_deref(),
                payload.estoque.unwrap_or(0),
                payload.validade,
                custo,
                preco_venda,
            )
            .await
    }

    pub async fn list_produtos(&self, usuario_id: i32) -> Result<Vec<Produto>, AppError> {
        self.repo.list_produtos(usuario_id).await
    }
}
