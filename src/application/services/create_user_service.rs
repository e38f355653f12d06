use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dtos::user_dto::{CreateUserResponse, UserDto};
use crate::application::ports::user_ports::{CreateUserOutcome, CreateUserRequest, CreateUserUseCase};
use crate::common::errors::DomainError;
use crate::domain::factories::UserFactory;
use crate::domain::repositories::user_repository::{UserRepository, UserRepositoryError};
use crate::domain::value_objects::Email;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already in use";

/// Alta de usuarios con email único
pub struct CreateUserService {
    user_repository: Arc<dyn UserRepository>,
    user_factory: UserFactory,
}

impl CreateUserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repository,
            user_factory: UserFactory::new(),
        }
    }

    fn duplicate_email() -> DomainError {
        DomainError::already_exists("User", DUPLICATE_EMAIL_MESSAGE)
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, DomainError> {
        let email = Email::new(request.email)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(Self::duplicate_email());
        }

        let user = self.user_factory.create_new(&request.name, email.as_str())?;

        // El adaptador también rechaza el duplicado si otra alta se adelantó
        let saved = self.user_repository.save(user).await.map_err(|e| match e {
            UserRepositoryError::AlreadyExists(_) => Self::duplicate_email(),
            other => DomainError::from(other),
        })?;

        tracing::info!("Usuario creado: {}", saved.id());
        Ok(CreateUserResponse {
            user: UserDto::from(saved),
        })
    }
}

#[async_trait]
impl CreateUserUseCase for CreateUserService {
    async fn execute(&self, request: CreateUserRequest) -> CreateUserOutcome {
        let outcome = CreateUserOutcome::from(self.create_user(request).await);
        if let CreateUserOutcome::Failed(err) = &outcome {
            tracing::warn!("Alta de usuario rechazada: {}", err);
        }
        outcome
    }
}
