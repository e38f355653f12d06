use async_trait::async_trait;

use crate::common::errors::DomainError;
use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;

#[derive(Debug, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Favorite not found for user {user_id} and post {post_id}")]
    NotFound { user_id: UserId, post_id: PostId },

    #[error("Post {post_id} is already a favorite of user {user_id}")]
    AlreadyExists { user_id: UserId, post_id: PostId },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type FavoriteRepositoryResult<T> = Result<T, FavoriteRepositoryError>;

impl From<FavoriteRepositoryError> for DomainError {
    fn from(err: FavoriteRepositoryError) -> Self {
        let message = err.to_string();
        match err {
            FavoriteRepositoryError::NotFound { .. } => DomainError::not_found("Favorite", message),
            FavoriteRepositoryError::AlreadyExists { .. } => {
                DomainError::already_exists("Favorite", message)
            }
            FavoriteRepositoryError::DatabaseError(_) => DomainError::persistence("Favorite", message),
        }
    }
}

/// Puerto de almacenamiento de favoritos
///
/// Contrato para todo adaptador: nunca pueden coexistir dos favoritos para el
/// mismo par (usuario, post). `add` sobre un par existente devuelve
/// `AlreadyExists` y `remove` sin fila afectada devuelve `NotFound`; así una
/// carrera perdida en el toggle acaba en fallo y no en datos corruptos.
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync + 'static {
    async fn add(&self, favorite: Favorite) -> FavoriteRepositoryResult<Favorite>;

    async fn remove(&self, user_id: UserId, post_id: PostId) -> FavoriteRepositoryResult<()>;

    async fn is_favorited(&self, user_id: UserId, post_id: PostId) -> FavoriteRepositoryResult<bool>;

    async fn count_by_post(&self, post_id: PostId) -> FavoriteRepositoryResult<u64>;

    async fn list_post_ids_by_user(&self, user_id: UserId) -> FavoriteRepositoryResult<Vec<PostId>>;
}
