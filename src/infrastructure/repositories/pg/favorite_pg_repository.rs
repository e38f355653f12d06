use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;
use crate::domain::repositories::favorite_repository::{
    FavoriteRepository, FavoriteRepositoryError, FavoriteRepositoryResult,
};

/// Repositorio de favoritos sobre PostgreSQL
///
/// La restricción `UNIQUE (user_id, post_id)` es la que impide duplicados
/// cuando dos toggles compiten por el mismo par.
pub struct FavoritePgRepository {
    pool: Arc<PgPool>,
}

impl FavoritePgRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn map_sqlx_error(err: sqlx::Error, user_id: UserId, post_id: PostId) -> FavoriteRepositoryError {
        match err {
            sqlx::Error::Database(db_err) if db_err.code().map_or(false, |code| code == "23505") => {
                FavoriteRepositoryError::AlreadyExists { user_id, post_id }
            },
            _ => FavoriteRepositoryError::DatabaseError(format!("Error de base de datos: {}", err)),
        }
    }

    fn database_error(err: sqlx::Error) -> FavoriteRepositoryError {
        FavoriteRepositoryError::DatabaseError(format!("Error de base de datos: {}", err))
    }
}

#[async_trait]
impl FavoriteRepository for FavoritePgRepository {
    async fn add(&self, favorite: Favorite) -> FavoriteRepositoryResult<Favorite> {
        let (user_id, post_id) = (favorite.user_id(), favorite.post_id());

        let row = sqlx::query(
            r#"
            INSERT INTO favorites (user_id, post_id)
            VALUES ($1, $2)
            RETURNING id
            "#
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| Self::map_sqlx_error(e, user_id, post_id))?;

        Ok(Favorite::from_data(row.get("id"), user_id, post_id))
    }

    async fn remove(&self, user_id: UserId, post_id: PostId) -> FavoriteRepositoryResult<()> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(&*self.pool)
            .await
            .map_err(Self::database_error)?;

        // Otro toggle concurrente pudo borrar la fila antes que nosotros
        if result.rows_affected() == 0 {
            return Err(FavoriteRepositoryError::NotFound { user_id, post_id });
        }
        Ok(())
    }

    async fn is_favorited(&self, user_id: UserId, post_id: PostId) -> FavoriteRepositoryResult<bool> {
        let row = sqlx::query(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND post_id = $2) AS favorited"
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&*self.pool)
        .await
        .map_err(Self::database_error)?;

        Ok(row.get("favorited"))
    }

    async fn count_by_post(&self, post_id: PostId) -> FavoriteRepositoryResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM favorites WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&*self.pool)
            .await
            .map_err(Self::database_error)?;

        let count: i64 = row.get("count");
        u64::try_from(count)
            .map_err(|_| FavoriteRepositoryError::DatabaseError(format!("Conteo inválido: {}", count)))
    }

    async fn list_post_ids_by_user(&self, user_id: UserId) -> FavoriteRepositoryResult<Vec<PostId>> {
        let rows = sqlx::query("SELECT post_id FROM favorites WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&*self.pool)
            .await
            .map_err(Self::database_error)?;

        Ok(rows.iter().map(|row| row.get("post_id")).collect())
    }
}
