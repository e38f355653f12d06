use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::favorite_ports::{
    ToggleFavoriteOutcome, ToggleFavoriteRequest, ToggleFavoriteUseCase,
};
use crate::common::errors::DomainError;
use crate::domain::entities::favorite::Favorite;
use crate::domain::repositories::favorite_repository::FavoriteRepository;

/// Alterna el favorito de un par (usuario, post)
///
/// Comprobar y escribir son dos llamadas separadas; si otro toggle gana la
/// carrera, el adaptador devuelve `AlreadyExists` o `NotFound` y el resultado
/// es `Failed`.
pub struct ToggleFavoriteService {
    favorite_repository: Arc<dyn FavoriteRepository>,
}

impl ToggleFavoriteService {
    pub fn new(favorite_repository: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorite_repository }
    }

    async fn toggle(&self, request: ToggleFavoriteRequest) -> Result<ToggleFavoriteOutcome, DomainError> {
        let ToggleFavoriteRequest { user_id, post_id } = request;

        if self.favorite_repository.is_favorited(user_id, post_id).await? {
            self.favorite_repository.remove(user_id, post_id).await?;
            tracing::debug!("Favorito eliminado: usuario {} post {}", user_id, post_id);
            Ok(ToggleFavoriteOutcome::Removed)
        } else {
            self.favorite_repository.add(Favorite::new(user_id, post_id)).await?;
            tracing::debug!("Favorito añadido: usuario {} post {}", user_id, post_id);
            Ok(ToggleFavoriteOutcome::Added)
        }
    }
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteService {
    async fn execute(&self, request: ToggleFavoriteRequest) -> ToggleFavoriteOutcome {
        self.toggle(request).await.unwrap_or_else(|err| {
            tracing::warn!("Toggle de favorito fallido: {}", err);
            ToggleFavoriteOutcome::Failed(err)
        })
    }
}
