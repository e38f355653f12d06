pub mod create_user_service;
pub mod create_post_service;
pub mod toggle_favorite_service;
pub mod user_query_service;
pub mod post_query_service;
pub mod favorite_query_service;
pub mod auth_application_service;

#[cfg(test)]
mod create_post_service_test;
#[cfg(test)]
mod toggle_favorite_service_test;
