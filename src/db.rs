pub mod user_repo;
pub use user_repo::UserRepository;
pub mod crm_repo;
pub use crm_repo::CrmRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod agenda_repo;
pub use agenda_repo::AgendaRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
