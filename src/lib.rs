//! Backend de gestão para clínicas de estética: cadastro e login do dono,
//! clientes, equipe, serviços, produtos, agenda, financeiro e o dashboard
//! com faturamento, atendimentos, meta e agenda do dia.

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod reporting;
pub mod services;

use crate::{config::AppState, docs::ApiDoc, middleware::auth::auth_guard};

/// Monta o router completo da API sobre um estado já construído.
pub fn build_router(app_state: AppState) -> Router {
    // Rotas públicas
    let public_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/onboarding", post(handlers::auth::onboarding))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout));

    // Rotas que exigem sessão
    let protected_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route(
            "/clientes",
            get(handlers::crm::list_clientes).post(handlers::crm::create_cliente),
        )
        .route(
            "/equipe",
            get(handlers::crm::list_equipe).post(handlers::crm::create_membro),
        )
        .route(
            "/servicos",
            get(handlers::catalog::list_servicos).post(handlers::catalog::create_servico),
        )
        .route(
            "/produtos",
            get(handlers::catalog::list_produtos).post(handlers::catalog::create_produto),
        )
        .route(
            "/agenda",
            get(handlers::agenda::list_agenda).post(handlers::agenda::create_agendamento),
        )
        .route("/agenda/dados", get(handlers::agenda::get_form_options))
        .route("/agenda/{id}", patch(handlers::agenda::update_agendamento))
        .route(
            "/pagamentos",
            get(handlers::finance::list_pagamentos).post(handlers::finance::create_pagamento),
        )
        .route(
            "/transactions",
            get(handlers::finance::list_transactions).post(handlers::finance::create_transaction),
        )
        .route(
            "/metas",
            get(handlers::finance::list_metas).post(handlers::finance::create_meta),
        )
        .route("/metas/{id}", put(handlers::finance::update_meta))
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(app_state)
}
