pub mod user_pg_repository;
pub mod post_pg_repository;
pub mod favorite_pg_repository;

pub use user_pg_repository::UserPgRepository;
pub use post_pg_repository::PostPgRepository;
pub use favorite_pg_repository::FavoritePgRepository;
