use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::favorite::{Favorite, FavoriteId};
use crate::domain::entities::post::PostId;
use crate::domain::entities::user::UserId;
use crate::domain::repositories::favorite_repository::{
    FavoriteRepository, FavoriteRepositoryError, FavoriteRepositoryResult,
};

#[derive(Default)]
struct FavoriteTable {
    last_id: FavoriteId,
    rows: BTreeMap<FavoriteId, Favorite>,
}

impl FavoriteTable {
    fn find_pair(&self, user_id: UserId, post_id: PostId) -> Option<FavoriteId> {
        self.rows
            .values()
            .find(|fav| fav.user_id() == user_id && fav.post_id() == post_id)
            .map(Favorite::id)
    }
}

/// Repositorio de favoritos en memoria
///
/// `add` y `remove` comprueban y escriben bajo el mismo lock de escritura.
#[derive(Default)]
pub struct FavoriteMemoryRepository {
    table: RwLock<FavoriteTable>,
}

impl FavoriteMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteMemoryRepository {
    async fn add(&self, favorite: Favorite) -> FavoriteRepositoryResult<Favorite> {
        let mut table = self.table.write().await;
        let (user_id, post_id) = (favorite.user_id(), favorite.post_id());

        if table.find_pair(user_id, post_id).is_some() {
            return Err(FavoriteRepositoryError::AlreadyExists { user_id, post_id });
        }

        let id = table.last_id + 1;
        let stored = Favorite::from_data(id, user_id, post_id);
        table.last_id = id;
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn remove(&self, user_id: UserId, post_id: PostId) -> FavoriteRepositoryResult<()> {
        let mut table = self.table.write().await;
        let id = table
            .find_pair(user_id, post_id)
            .ok_or(FavoriteRepositoryError::NotFound { user_id, post_id })?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn is_favorited(&self, user_id: UserId, post_id: PostId) -> FavoriteRepositoryResult<bool> {
        Ok(self.table.read().await.find_pair(user_id, post_id).is_some())
    }

    async fn count_by_post(&self, post_id: PostId) -> FavoriteRepositoryResult<u64> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|fav| fav.post_id() == post_id).count() as u64)
    }

    async fn list_post_ids_by_user(&self, user_id: UserId) -> FavoriteRepositoryResult<Vec<PostId>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|fav| fav.user_id() == user_id)
            .map(Favorite::post_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn add_then_query() {
        let repo = FavoriteMemoryRepository::new();
        let stored = repo.add(Favorite::new(1, 10)).await.unwrap();

        assert_eq!(stored.id(), 1);
        assert!(repo.is_favorited(1, 10).await.unwrap());
        assert!(!repo.is_favorited(2, 10).await.unwrap());
        assert_eq!(repo.count_by_post(10).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected() {
        let repo = FavoriteMemoryRepository::new();
        repo.add(Favorite::new(1, 10)).await.unwrap();

        let err = repo.add(Favorite::new(1, 10)).await.unwrap_err();
        assert!(matches!(
            err,
            FavoriteRepositoryError::AlreadyExists { user_id: 1, post_id: 10 }
        ));
        assert_eq!(repo.count_by_post(10).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn removing_missing_pair_is_not_found() {
        let repo = FavoriteMemoryRepository::new();
        let err = repo.remove(1, 10).await.unwrap_err();
        assert!(matches!(err, FavoriteRepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn remove_only_touches_the_pair() {
        let repo = FavoriteMemoryRepository::new();
        repo.add(Favorite::new(1, 10)).await.unwrap();
        repo.add(Favorite::new(2, 10)).await.unwrap();
        repo.add(Favorite::new(1, 11)).await.unwrap();

        repo.remove(1, 10).await.unwrap();

        assert_eq!(repo.count_by_post(10).await.unwrap(), 1);
        assert_eq!(repo.list_post_ids_by_user(1).await.unwrap(), vec![11]);
    }

    #[tokio::test]
    async fn lists_post_ids_in_insertion_order() {
        let repo = FavoriteMemoryRepository::new();
        repo.add(Favorite::new(1, 30)).await.unwrap();
        repo.add(Favorite::new(1, 10)).await.unwrap();
        repo.add(Favorite::new(2, 20)).await.unwrap();

        assert_eq!(repo.list_post_ids_by_user(1).await.unwrap(), vec![30, 10]);
        assert!(repo.list_post_ids_by_user(3).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_store_a_single_favorite() {
        let repo = Arc::new(FavoriteMemoryRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.add(Favorite::new(1, 10)).await.is_ok() })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count_by_post(10).await.unwrap(), 1);
    }
}
