// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use chrono_tz::Tz;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        AgendaRepository, CatalogRepository, CrmRepository, DashboardRepository,
        FinanceRepository, UserRepository,
    },
    services::{
        agenda_service::AgendaService, auth::AuthService, catalog_service::CatalogService,
        crm_service::CrmService, dashboard_service::DashboardService,
        finance_service::FinanceService,
    },
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub timezone: Tz,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let tz_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = parse_timezone(&tz_name)?;

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 5)?;
        let db_acquire_timeout = Duration::from_secs(parse_or("DB_ACQUIRE_TIMEOUT_SECS", 3)?);

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            timezone,
            db_max_connections,
            db_acquire_timeout,
        })
    }
}

fn parse_timezone(name: &str) -> anyhow::Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("APP_TIMEZONE inválido ({}): {}", name, e))
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} inválido: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: I18nStore,
    pub timezone: Tz,
    pub auth_service: AuthService,
    pub crm_service: CrmService,
    pub catalog_service: CatalogService,
    pub agenda_service: AgendaService,
    pub finance_service: FinanceService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, config))
    }

    /// Monta o gráfico de dependências sobre um pool já criado.
    pub fn from_pool(db_pool: PgPool, config: &Config) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let crm_repo = CrmRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let agenda_repo = AgendaRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo,
            finance_repo.clone(),
            config.jwt_secret.clone(),
            db_pool.clone(),
        );
        let crm_service = CrmService::new(crm_repo.clone());
        let catalog_service = CatalogService::new(catalog_repo.clone());
        let agenda_service =
            AgendaService::new(agenda_repo.clone(), crm_repo, catalog_repo, db_pool.clone());
        let finance_service = FinanceService::new(finance_repo, agenda_repo, db_pool.clone());
        let dashboard_service = DashboardService::new(Arc::new(dashboard_repo));

        Self {
            db_pool,
            i18n_store: I18nStore::new(),
            timezone: config.timezone,
            auth_service,
            crm_service,
            catalog_service,
            agenda_service,
            finance_service,
            dashboard_service,
        }
    }
}
