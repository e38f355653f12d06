use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::user::{User, UserId};
use crate::domain::repositories::user_repository::{
    UserRepository, UserRepositoryError, UserRepositoryResult,
};
use crate::domain::value_objects::Email;

#[derive(Default)]
struct UserTable {
    last_id: UserId,
    rows: BTreeMap<UserId, User>,
}

/// Repositorio de usuarios en memoria
///
/// Todas las escrituras se hacen bajo un único lock de escritura, de modo que
/// la comprobación de email duplicado y la inserción son atómicas.
#[derive(Default)]
pub struct UserMemoryRepository {
    table: RwLock<UserTable>,
}

impl UserMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserMemoryRepository {
    async fn save(&self, user: User) -> UserRepositoryResult<User> {
        let mut table = self.table.write().await;

        let email_taken = table
            .rows
            .values()
            .any(|existing| existing.email() == user.email() && existing.id() != user.id());
        if email_taken {
            return Err(UserRepositoryError::AlreadyExists(format!(
                "email {}",
                user.email()
            )));
        }

        if user.is_persisted() {
            if !table.rows.contains_key(&user.id()) {
                return Err(UserRepositoryError::NotFound(user.id().to_string()));
            }
            table.rows.insert(user.id(), user.clone());
            return Ok(user);
        }

        let id = table.last_id + 1;
        let stored = User::from_data(id, user.name().to_string(), user.email().clone())
            .map_err(|e| UserRepositoryError::ValidationError(e.to_string()))?;
        table.last_id = id;
        table.rows.insert(id, stored.clone());

        tracing::debug!("Usuario {} guardado en memoria", id);
        Ok(stored)
    }

    async fn find_one_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> UserRepositoryResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|user| user.email() == email).cloned())
    }
}
