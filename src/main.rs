use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oxipost::common::config::AppConfig;
use oxipost::common::di::AppServiceFactory;
use oxipost::interfaces::create_api_routes;

/// OxiPost - usuarios, posts y favoritos
///
/// The architecture follows the Clean/Hexagonal Architecture pattern with:
///
/// - Domain Layer: entities, value objects and repository ports (domain/*)
/// - Application Layer: use cases with output ports and query services (application/*)
/// - Infrastructure Layer: in-memory and PostgreSQL adapters (infrastructure/*)
/// - Interface Layer: axum controllers, presenters and auth guard (interfaces/*)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = AppConfig::from_env()?;
    tracing::info!("Configuración cargada: {:?}", config);

    let bind_address = config.server.bind_address();
    let state = AppServiceFactory::new(config).build_app_state().await?;
    let app = create_api_routes(state);

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Servidor escuchando en http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("No se pudo escuchar la señal de apagado: {}", e);
    }
    tracing::info!("Señal de apagado recibida");
}
