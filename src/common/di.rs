use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;

use crate::application::ports::favorite_ports::ToggleFavoriteUseCase;
use crate::application::ports::post_ports::CreatePostUseCase;
use crate::application::ports::user_ports::CreateUserUseCase;
use crate::application::services::auth_application_service::AuthApplicationService;
use crate::application::services::create_post_service::CreatePostService;
use crate::application::services::create_user_service::CreateUserService;
use crate::application::services::favorite_query_service::FavoriteQueryService;
use crate::application::services::post_query_service::PostQueryService;
use crate::application::services::toggle_favorite_service::ToggleFavoriteService;
use crate::application::services::user_query_service::UserQueryService;
use crate::common::auth_factory::create_auth_services;
use crate::common::config::{AppConfig, StorageBackend};
use crate::common::db::create_database_pool;
use crate::domain::repositories::favorite_repository::FavoriteRepository;
use crate::domain::repositories::post_repository::PostRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::token_service::TokenService;
use crate::infrastructure::repositories::{
    FavoriteMemoryRepository, FavoritePgRepository, PostMemoryRepository, PostPgRepository,
    UserMemoryRepository, UserPgRepository,
};

/// Fábrica para los diferentes componentes de la aplicación
pub struct AppServiceFactory {
    config: AppConfig,
}

impl AppServiceFactory {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Repositorios en memoria; cada llamada parte de tablas vacías
    pub fn create_memory_repositories(&self) -> RepositoryServices {
        RepositoryServices {
            user_repository: Arc::new(UserMemoryRepository::new()),
            post_repository: Arc::new(PostMemoryRepository::new()),
            favorite_repository: Arc::new(FavoriteMemoryRepository::new()),
        }
    }

    /// Repositorios PostgreSQL sobre un pool compartido
    pub fn create_pg_repositories(&self, pool: Arc<PgPool>) -> RepositoryServices {
        RepositoryServices {
            user_repository: Arc::new(UserPgRepository::new(pool.clone())),
            post_repository: Arc::new(PostPgRepository::new(pool.clone())),
            favorite_repository: Arc::new(FavoritePgRepository::new(pool)),
        }
    }

    /// Inicializa los servicios de aplicación
    pub fn create_application_services(&self, repos: &RepositoryServices) -> ApplicationServices {
        ApplicationServices {
            create_user: Arc::new(CreateUserService::new(repos.user_repository.clone())),
            create_post: Arc::new(CreatePostService::new(repos.post_repository.clone())),
            toggle_favorite: Arc::new(ToggleFavoriteService::new(repos.favorite_repository.clone())),
            user_queries: Arc::new(UserQueryService::new(repos.user_repository.clone())),
            post_queries: Arc::new(PostQueryService::new(repos.post_repository.clone())),
            favorite_queries: Arc::new(FavoriteQueryService::new(repos.favorite_repository.clone())),
        }
    }

    /// Monta el estado completo a partir de unos repositorios ya creados
    pub fn create_app_state(&self, repositories: RepositoryServices, db_pool: Option<Arc<PgPool>>) -> AppState {
        let applications = self.create_application_services(&repositories);
        let auth = create_auth_services(&self.config, repositories.user_repository.clone());

        AppState {
            repositories,
            applications,
            auth,
            db_pool,
        }
    }

    /// Elige el backend configurado y construye el estado de la aplicación
    pub async fn build_app_state(&self) -> Result<AppState> {
        match self.config.storage {
            StorageBackend::Memory => {
                tracing::info!("Usando repositorios en memoria");
                Ok(self.create_app_state(self.create_memory_repositories(), None))
            }
            StorageBackend::Postgres => {
                let pool = Arc::new(create_database_pool(&self.config).await?);
                tracing::info!("PostgreSQL database pool initialized successfully");
                let repositories = self.create_pg_repositories(pool.clone());
                Ok(self.create_app_state(repositories, Some(pool)))
            }
        }
    }
}

/// Contenedor para servicios de repositorio
#[derive(Clone)]
pub struct RepositoryServices {
    pub user_repository: Arc<dyn UserRepository>,
    pub post_repository: Arc<dyn PostRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
}

/// Contenedor para servicios de aplicación
#[derive(Clone)]
pub struct ApplicationServices {
    pub create_user: Arc<dyn CreateUserUseCase>,
    pub create_post: Arc<dyn CreatePostUseCase>,
    pub toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    pub user_queries: Arc<UserQueryService>,
    pub post_queries: Arc<PostQueryService>,
    pub favorite_queries: Arc<FavoriteQueryService>,
}

/// Contenedor para servicios de autenticación
#[derive(Clone)]
pub struct AuthServices {
    pub token_service: Arc<TokenService>,
    pub auth_application_service: Arc<AuthApplicationService>,
}

/// Estado global de la aplicación para dependency injection
#[derive(Clone)]
pub struct AppState {
    pub repositories: RepositoryServices,
    pub applications: ApplicationServices,
    pub auth: AuthServices,
    pub db_pool: Option<Arc<PgPool>>,
}

impl AppState {
    /// Estado en memoria con la configuración por defecto
    pub fn in_memory(config: AppConfig) -> Self {
        let factory = AppServiceFactory::new(config);
        let repositories = factory.create_memory_repositories();
        factory.create_app_state(repositories, None)
    }
}
