use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dtos::post_dto::{CreatePostResponse, PostDto};
use crate::application::ports::post_ports::{CreatePostOutcome, CreatePostRequest, CreatePostUseCase};
use crate::common::errors::DomainError;
use crate::domain::entities::post::Post;
use crate::domain::repositories::post_repository::PostRepository;

pub struct CreatePostService {
    post_repository: Arc<dyn PostRepository>,
}

impl CreatePostService {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    async fn create_post(&self, request: CreatePostRequest) -> Result<CreatePostResponse, DomainError> {
        let post = Post::new(request.user_id, request.message)?;
        let saved = self.post_repository.save(post).await?;

        tracing::info!("Post {} creado por el usuario {}", saved.id(), saved.user_id());
        Ok(CreatePostResponse {
            post: PostDto::from(saved),
        })
    }
}

#[async_trait]
impl CreatePostUseCase for CreatePostService {
    async fn execute(&self, request: CreatePostRequest) -> CreatePostOutcome {
        let outcome = CreatePostOutcome::from(self.create_post(request).await);
        if let CreatePostOutcome::Failed(err) = &outcome {
            tracing::warn!("Creación de post rechazada: {}", err);
        }
        outcome
    }
}
