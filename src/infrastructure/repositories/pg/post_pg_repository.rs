use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::post::{Post, PostId};
use crate::domain::entities::user::UserId;
use crate::domain::repositories::post_repository::{PostRepository, PostRepositoryError, PostRepositoryResult};

pub struct PostPgRepository {
    pool: Arc<PgPool>,
}

impl PostPgRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn map_sqlx_error(err: sqlx::Error) -> PostRepositoryError {
        match err {
            sqlx::Error::RowNotFound => PostRepositoryError::NotFound("Post no encontrado".to_string()),
            _ => PostRepositoryError::DatabaseError(format!("Error de base de datos: {}", err)),
        }
    }

    fn row_to_post(row: &PgRow) -> PostRepositoryResult<Post> {
        Post::from_data(row.get("id"), row.get("user_id"), row.get("message"))
            .map_err(|e| PostRepositoryError::ValidationError(e.to_string()))
    }
}

#[async_trait]
impl PostRepository for PostPgRepository {
    async fn save(&self, post: Post) -> PostRepositoryResult<Post> {
        if post.is_persisted() {
            let row = sqlx::query(
                r#"
                UPDATE posts
                SET user_id = $2, message = $3
                WHERE id = $1
                RETURNING id, user_id, message
                "#
            )
            .bind(post.id())
            .bind(post.user_id())
            .bind(post.message())
            .fetch_optional(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?
            .ok_or_else(|| PostRepositoryError::NotFound(post.id().to_string()))?;

            return Self::row_to_post(&row);
        }

        let row = sqlx::query(
            r#"
            INSERT INTO posts (user_id, message)
            VALUES ($1, $2)
            RETURNING id, user_id, message
            "#
        )
        .bind(post.user_id())
        .bind(post.message())
        .fetch_one(&*self.pool)
        .await
        .map_err(Self::map_sqlx_error)?;

        Self::row_to_post(&row)
    }

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>> {
        let row = sqlx::query("SELECT id, user_id, message FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> PostRepositoryResult<Vec<Post>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, message
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#
        )
        .bind(user_id)
        .fetch_all(&*self.pool)
        .await
        .map_err(Self::map_sqlx_error)?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn find_all(&self) -> PostRepositoryResult<Vec<Post>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, message
            FROM posts
            ORDER BY created_at DESC, id DESC
            "#
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(Self::map_sqlx_error)?;

        rows.iter().map(Self::row_to_post).collect()
    }
}
