pub mod api;
pub mod middleware;

pub use api::routes::create_api_routes;
