// src/docs.rs

use utoipa::openapi::security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::onboarding,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::get_me,

        // --- Clientes / Equipe ---
        handlers::crm::list_clientes,
        handlers::crm::create_cliente,
        handlers::crm::list_equipe,
        handlers::crm::create_membro,

        // --- Serviços / Produtos ---
        handlers::catalog::list_servicos,
        handlers::catalog::create_servico,
        handlers::catalog::list_produtos,
        handlers::catalog::create_produto,

        // --- Agenda ---
        handlers::agenda::list_agenda,
        handlers::agenda::create_agendamento,
        handlers::agenda::update_agendamento,
        handlers::agenda::get_form_options,

        // --- Financeiro ---
        handlers::finance::list_pagamentos,
        handlers::finance::create_pagamento,
        handlers::finance::list_transactions,
        handlers::finance::create_transaction,
        handlers::finance::list_metas,
        handlers::finance::create_meta,
        handlers::finance::update_meta,

        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserKind,
            models::auth::User,
            models::auth::OnboardingPayload,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::OnboardingResponse,
            models::auth::MessageResponse,

            // --- Clientes / Equipe ---
            models::crm::Cliente,
            models::crm::CreateClientePayload,
            models::crm::MemberStatus,
            models::crm::MembroEquipe,
            models::crm::CreateMembroPayload,
            models::crm::OpcaoSelect,

            // --- Serviços / Produtos ---
            models::catalog::Servico,
            models::catalog::CreateServicoPayload,
            models::catalog::Produto,
            models::catalog::CreateProdutoPayload,

            // --- Agenda ---
            models::agenda::AppointmentStatus,
            models::agenda::Agendamento,
            models::agenda::AgendamentoDetalhe,
            models::agenda::CreateAgendamentoPayload,
            models::agenda::UpdateAgendamentoPayload,
            models::agenda::AgendaDados,

            // --- Financeiro ---
            models::finance::PaymentStatus,
            models::finance::GoalPeriod,
            models::finance::Pagamento,
            models::finance::CreatePagamentoPayload,
            models::finance::TransactionKind,
            models::finance::Transaction,
            models::finance::CreateTransactionPayload,
            models::finance::MetaFinanceira,
            models::finance::CreateMetaPayload,
            models::finance::UpdateMetaPayload,

            // --- Dashboard ---
            models::dashboard::DashboardResponse,
            models::dashboard::ChartEntry,
            models::dashboard::AgendaEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Cadastro, login e sessão"),
        (name = "Clientes", description = "Clientes do negócio"),
        (name = "Equipe", description = "Colaboradores"),
        (name = "Serviços", description = "Serviços oferecidos"),
        (name = "Produtos", description = "Produtos em estoque"),
        (name = "Agenda", description = "Agendamentos"),
        (name = "Financeiro", description = "Pagamentos, transações e metas"),
        (name = "Dashboard", description = "Indicadores do mês e agenda do dia")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        // O front usa o cookie HttpOnly definido no login
        components.add_security_scheme(
            "cookie_token",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
        );
    }
}
