pub mod handlers;
pub mod presenters;
pub mod routes;
