use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::user::{User, UserId};
use crate::domain::repositories::user_repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
use crate::domain::value_objects::Email;

pub struct UserPgRepository {
    pool: Arc<PgPool>,
}

impl UserPgRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    // Método auxiliar para mapear errores SQL a errores de dominio
    fn map_sqlx_error(err: sqlx::Error) -> UserRepositoryError {
        match err {
            sqlx::Error::RowNotFound => {
                UserRepositoryError::NotFound("Usuario no encontrado".to_string())
            },
            sqlx::Error::Database(db_err) => {
                if db_err.code().map_or(false, |code| code == "23505") {
                    // Código para violación de unicidad en PostgreSQL
                    UserRepositoryError::AlreadyExists(
                        "email ya registrado".to_string()
                    )
                } else {
                    UserRepositoryError::DatabaseError(
                        format!("Error de base de datos: {}", db_err)
                    )
                }
            },
            _ => UserRepositoryError::DatabaseError(
                format!("Error de base de datos: {}", err)
            ),
        }
    }

    // Reconstruye la entidad validando de nuevo lo que viene de la BD
    fn row_to_user(row: &PgRow) -> UserRepositoryResult<User> {
        let email = Email::new(row.get::<String, _>("email"))
            .map_err(|e| UserRepositoryError::ValidationError(e.to_string()))?;

        User::from_data(row.get("id"), row.get("name"), email)
            .map_err(|e| UserRepositoryError::ValidationError(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for UserPgRepository {
    async fn save(&self, user: User) -> UserRepositoryResult<User> {
        if user.is_persisted() {
            let row = sqlx::query(
                r#"
                UPDATE users
                SET name = $2, email = $3
                WHERE id = $1
                RETURNING id, name, email
                "#
            )
            .bind(user.id())
            .bind(user.name())
            .bind(user.email().as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?
            .ok_or_else(|| UserRepositoryError::NotFound(user.id().to_string()))?;

            return Self::row_to_user(&row);
        }

        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#
        )
        .bind(user.name())
        .bind(user.email().as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(Self::map_sqlx_error)?;

        let created = Self::row_to_user(&row)?;
        tracing::debug!("Usuario {} insertado", created.id());
        Ok(created)
    }

    /// Obtiene un usuario por ID
    async fn find_one_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_all(&self) -> UserRepositoryResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Obtiene un usuario por correo electrónico
    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}
