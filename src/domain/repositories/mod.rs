pub mod user_repository;
pub mod post_repository;
pub mod favorite_repository;
