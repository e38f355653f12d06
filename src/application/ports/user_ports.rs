use async_trait::async_trait;
use serde::Deserialize;

use crate::application::dtos::user_dto::CreateUserResponse;
use crate::application::ports::output_port::OutputPort;
use crate::common::errors::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

pub trait UserOutputPort: OutputPort {
    fn success_create_user(&mut self, response: CreateUserResponse);
}

/// Resultado de CreateUser, entregado al presentador con `present`
#[must_use]
#[derive(Debug)]
pub enum CreateUserOutcome {
    Created(CreateUserResponse),
    Failed(DomainError),
}

impl CreateUserOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CreateUserOutcome::Created(_))
    }

    pub fn present<P: UserOutputPort + ?Sized>(self, port: &mut P) {
        match self {
            CreateUserOutcome::Created(response) => port.success_create_user(response),
            CreateUserOutcome::Failed(error) => port.failure(error),
        }
    }
}

impl From<Result<CreateUserResponse, DomainError>> for CreateUserOutcome {
    fn from(result: Result<CreateUserResponse, DomainError>) -> Self {
        match result {
            Ok(response) => CreateUserOutcome::Created(response),
            Err(error) => CreateUserOutcome::Failed(error),
        }
    }
}

/// Puerto primario para dar de alta usuarios
#[async_trait]
pub trait CreateUserUseCase: Send + Sync + 'static {
    async fn execute(&self, request: CreateUserRequest) -> CreateUserOutcome;
}
