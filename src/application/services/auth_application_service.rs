use std::sync::Arc;

use crate::application::dtos::auth_dto::{AuthResponseDto, LoginDto, MeDto};
use crate::application::dtos::user_dto::UserDto;
use crate::application::dtos::OkDto;
use crate::common::errors::DomainError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::token_service::{TokenClaims, TokenService};
use crate::domain::value_objects::Email;

/// Login por email y emisión de tokens
///
/// No hay sesiones en servidor: el logout solo confirma al cliente que puede
/// descartar su token.
pub struct AuthApplicationService {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl AuthApplicationService {
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    pub async fn login(&self, dto: LoginDto) -> Result<AuthResponseDto, DomainError> {
        let email = Email::new(dto.email)?;

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::unauthorized("Auth", "user not found"))?;

        let token = self
            .token_service
            .sign_with_default_expiry(&user.id().to_string(), user.email().as_str())?;

        tracing::info!("Login correcto del usuario {}", user.id());
        Ok(AuthResponseDto {
            token,
            user: UserDto::from(user),
        })
    }

    pub fn me(&self, claims: &TokenClaims) -> MeDto {
        MeDto {
            sub: claims.sub.clone(),
            email: claims.email.clone(),
        }
    }

    pub fn logout(&self) -> OkDto {
        OkDto::ok()
    }
}
