use async_trait::async_trait;

use crate::common::errors::DomainError;
use crate::domain::entities::post::{Post, PostId};
use crate::domain::entities::user::UserId;

#[derive(Debug, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored post is invalid: {0}")]
    ValidationError(String),
}

pub type PostRepositoryResult<T> = Result<T, PostRepositoryError>;

impl From<PostRepositoryError> for DomainError {
    fn from(err: PostRepositoryError) -> Self {
        let message = err.to_string();
        match err {
            PostRepositoryError::NotFound(_) => DomainError::not_found("Post", message),
            PostRepositoryError::DatabaseError(_) | PostRepositoryError::ValidationError(_) => {
                DomainError::persistence("Post", message)
            }
        }
    }
}

/// Puerto de almacenamiento de posts
///
/// Los listados devuelven siempre los posts más recientes primero.
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Crea el post si su id es 0; si no, lo actualiza por id
    async fn save(&self, post: Post) -> PostRepositoryResult<Post>;

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>>;

    async fn find_by_user_id(&self, user_id: UserId) -> PostRepositoryResult<Vec<Post>>;

    async fn find_all(&self) -> PostRepositoryResult<Vec<Post>>;
}
