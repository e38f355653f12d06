use std::sync::Arc;

use crate::application::dtos::post_dto::PostDto;
use crate::common::errors::DomainError;
use crate::domain::entities::user::UserId;
use crate::domain::repositories::post_repository::PostRepository;

/// Lecturas de posts, siempre del más reciente al más antiguo
pub struct PostQueryService {
    post_repository: Arc<dyn PostRepository>,
}

impl PostQueryService {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    pub async fn list_posts(&self) -> Result<Vec<PostDto>, DomainError> {
        let posts = self.post_repository.find_all().await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }

    pub async fn list_posts_by_user(&self, user_id: UserId) -> Result<Vec<PostDto>, DomainError> {
        let posts = self.post_repository.find_by_user_id(user_id).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }
}
