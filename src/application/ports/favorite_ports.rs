use async_trait::async_trait;

use crate::application::ports::output_port::OutputPort;
use crate::common::errors::DomainError;
use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleFavoriteRequest {
    pub user_id: UserId,
    pub post_id: PostId,
}

pub trait FavoriteOutputPort: OutputPort {
    fn success_add(&mut self);
    fn success_remove(&mut self);
}

#[must_use]
#[derive(Debug)]
pub enum ToggleFavoriteOutcome {
    Added,
    Removed,
    Failed(DomainError),
}

impl ToggleFavoriteOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, ToggleFavoriteOutcome::Failed(_))
    }

    pub fn present<P: FavoriteOutputPort + ?Sized>(self, port: &mut P) {
        match self {
            ToggleFavoriteOutcome::Added => port.success_add(),
            ToggleFavoriteOutcome::Removed => port.success_remove(),
            ToggleFavoriteOutcome::Failed(error) => port.failure(error),
        }
    }
}

/// Alterna el favorito de un usuario sobre un post
#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync + 'static {
    async fn execute(&self, request: ToggleFavoriteRequest) -> ToggleFavoriteOutcome;
}
