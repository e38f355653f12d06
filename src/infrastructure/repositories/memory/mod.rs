pub mod user_memory_repository;
pub mod post_memory_repository;
pub mod favorite_memory_repository;

pub use user_memory_repository::UserMemoryRepository;
pub use post_memory_repository::PostMemoryRepository;
pub use favorite_memory_repository::FavoriteMemoryRepository;
