use async_trait::async_trait;

use crate::application::dtos::post_dto::CreatePostResponse;
use crate::application::ports::output_port::OutputPort;
use crate::common::errors::DomainError;
use crate::domain::entities::user::UserId;

/// El autor nunca llega en el cuerpo de la petición; lo fija el controlador
#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    pub user_id: UserId,
    pub message: String,
}

pub trait PostOutputPort: OutputPort {
    fn success_create_post(&mut self, response: CreatePostResponse);
}

#[must_use]
#[derive(Debug)]
pub enum CreatePostOutcome {
    Created(CreatePostResponse),
    Failed(DomainError),
}

impl CreatePostOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CreatePostOutcome::Created(_))
    }

    pub fn present<P: PostOutputPort + ?Sized>(self, port: &mut P) {
        match self {
            CreatePostOutcome::Created(response) => port.success_create_post(response),
            CreatePostOutcome::Failed(error) => port.failure(error),
        }
    }
}

impl From<Result<CreatePostResponse, DomainError>> for CreatePostOutcome {
    fn from(result: Result<CreatePostResponse, DomainError>) -> Self {
        match result {
            Ok(response) => CreatePostOutcome::Created(response),
            Err(error) => CreatePostOutcome::Failed(error),
        }
    }
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync + 'static {
    async fn execute(&self, request: CreatePostRequest) -> CreatePostOutcome;
}
