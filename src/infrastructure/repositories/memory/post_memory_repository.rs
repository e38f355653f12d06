use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::post::{Post, PostId};
use crate::domain::entities::user::UserId;
use crate::domain::repositories::post_repository::{
    PostRepository, PostRepositoryError, PostRepositoryResult,
};

#[derive(Default)]
struct PostTable {
    last_id: PostId,
    rows: BTreeMap<PostId, Post>,
}

/// Repositorio de posts en memoria
///
/// Los ids crecen con cada alta, así que el orden inverso de id es el orden
/// "más reciente primero".
#[derive(Default)]
pub struct PostMemoryRepository {
    table: RwLock<PostTable>,
}

impl PostMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for PostMemoryRepository {
    async fn save(&self, post: Post) -> PostRepositoryResult<Post> {
        let mut table = self.table.write().await;

        if post.is_persisted() {
            if !table.rows.contains_key(&post.id()) {
                return Err(PostRepositoryError::NotFound(post.id().to_string()));
            }
            table.rows.insert(post.id(), post.clone());
            return Ok(post);
        }

        let id = table.last_id + 1;
        let stored = Post::from_data(id, post.user_id(), post.message().to_string())
            .map_err(|e| PostRepositoryError::ValidationError(e.to_string()))?;
        table.last_id = id;
        table.rows.insert(id, stored.clone());

        tracing::debug!("Post {} guardado en memoria", id);
        Ok(stored)
    }

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> PostRepositoryResult<Vec<Post>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .filter(|post| post.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> PostRepositoryResult<Vec<Post>> {
        Ok(self.table.read().await.rows.values().rev().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(user_id: UserId, message: &str) -> Post {
        Post::new(user_id, message.to_string()).unwrap()
    }

    #[tokio::test]
    async fn listings_are_newest_first() {
        let repo = PostMemoryRepository::new();
        repo.save(post(1, "first")).await.unwrap();
        repo.save(post(2, "second")).await.unwrap();
        repo.save(post(1, "third")).await.unwrap();

        let all: Vec<PostId> = repo.find_all().await.unwrap().iter().map(Post::id).collect();
        assert_eq!(all, vec![3, 2, 1]);

        let by_user: Vec<PostId> = repo
            .find_by_user_id(1)
            .await
            .unwrap()
            .iter()
            .map(Post::id)
            .collect();
        assert_eq!(by_user, vec![3, 1]);
    }

    #[tokio::test]
    async fn save_updates_existing_post() {
        let repo = PostMemoryRepository::new();
        let mut saved = repo.save(post(1, "draft")).await.unwrap();

        saved.update_message("final".to_string()).unwrap();
        repo.save(saved).await.unwrap();

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.message(), "final");
    }

    #[tokio::test]
    async fn updating_unknown_post_is_not_found() {
        let repo = PostMemoryRepository::new();
        let ghost = Post::from_data(5, 1, "boo".to_string()).unwrap();

        assert!(matches!(
            repo.save(ghost).await,
            Err(PostRepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn unknown_user_has_no_posts() {
        let repo = PostMemoryRepository::new();
        repo.save(post(1, "hola")).await.unwrap();
        assert!(repo.find_by_user_id(42).await.unwrap().is_empty());
    }
}
