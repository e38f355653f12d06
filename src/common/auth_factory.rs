use std::sync::Arc;

use crate::application::services::auth_application_service::AuthApplicationService;
use crate::common::config::AppConfig;
use crate::common::di::AuthServices;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::token_service::TokenService;

pub fn create_auth_services(
    config: &AppConfig,
    user_repository: Arc<dyn UserRepository>,
) -> AuthServices {
    // Crear servicio de dominio de tokens
    let token_service = Arc::new(TokenService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiry.clone(),
    ));

    // Crear servicio de aplicación de autenticación
    let auth_application_service = Arc::new(AuthApplicationService::new(
        user_repository,
        token_service.clone(),
    ));

    AuthServices {
        token_service,
        auth_application_service,
    }
}
