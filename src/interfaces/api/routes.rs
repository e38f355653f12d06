use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::dtos::OkDto;
use crate::common::di::AppState;
use crate::interfaces::api::handlers::{auth_handler, favorite_handler, post_handler, user_handler};
use crate::interfaces::middleware::auth::require_auth;

async fn health() -> Json<OkDto> {
    Json(OkDto::ok())
}

/// Creates API routes for the application
pub fn create_api_routes(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/health", get(health))
        // Usuarios
        .route(
            "/api/users",
            post(user_handler::create_user).get(user_handler::list_users),
        )
        .route("/api/users/{id}/posts", get(post_handler::list_user_posts))
        .route("/api/users/{id}/favorites", get(favorite_handler::list_user_favorites))
        // Posts: leer es público, publicar requiere token
        .route(
            "/api/posts",
            get(post_handler::list_posts)
                .merge(post(post_handler::create_post).route_layer(auth.clone())),
        )
        .route("/api/posts/{id}/favorites/count", get(favorite_handler::count_post_favorites))
        // Favoritos
        .route(
            "/api/favorites/toggle",
            post(favorite_handler::toggle_favorite).route_layer(auth.clone()),
        )
        // Autenticación
        .route("/api/auth/login", post(auth_handler::login))
        .route("/api/auth/logout", post(auth_handler::logout))
        .route("/api/auth/me", get(auth_handler::me).route_layer(auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
