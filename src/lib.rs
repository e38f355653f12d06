// Exportar los módulos principales del proyecto
pub mod common;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// Re-exportaciones públicas comunes
pub use common::config::AppConfig;
pub use common::di::{AppServiceFactory, AppState};
pub use domain::services::token_service::TokenService;
pub use interfaces::create_api_routes;
