pub mod agenda_service;
pub mod auth;
pub mod catalog_service;
pub mod crm_service;
pub mod dashboard_service;
pub mod finance_service;
