use nurse_registry::{
    RegistryService, SqlStorage, build_app,
    config::CONFIG,
    infrastructure::{
        profile::{ProfileProvider, http::HttpProfileProvider},
        storage::NurseStorage,
    },
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();
    info!("Starting with {:?}", *CONFIG);

    // The store connects lazily on the first request
    let storage: Arc<dyn NurseStorage> = Arc::new(SqlStorage::new(CONFIG.database_url.clone()));
    let profiles: Arc<dyn ProfileProvider> = Arc::new(HttpProfileProvider::new(CONFIG.profile_base_url.clone())?);
    let service = Arc::new(RegistryService::new(storage, profiles));

    let app = build_app(service);

    // Start server
    let addr: SocketAddr = format!("{}:{}", CONFIG.bind_address, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
