// Repositorios en memoria (por defecto y para tests)
pub mod memory;

// Repositorios PostgreSQL
pub mod pg;

// Re-exportar para facilitar acceso
pub use memory::{FavoriteMemoryRepository, PostMemoryRepository, UserMemoryRepository};
pub use pg::{FavoritePgRepository, PostPgRepository, UserPgRepository};
