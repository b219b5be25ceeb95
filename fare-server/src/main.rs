use fare_server::backend::{BackendClient, BackendConfig};
use fare_server::cache::{CacheConfig, CachedBackendClient};
use fare_server::config::ServerConfig;
use fare_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_config = ServerConfig::from_env();

    // Create backend client
    let mut backend_config = BackendConfig::default();
    if let Some(url) = &server_config.backend_url {
        backend_config = backend_config.with_base_url(url);
    }
    let client = BackendClient::new(backend_config).expect("Failed to create backend client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let backend = CachedBackendClient::new(client, &cache_config);

    // Warm the route collection. Not fatal: the free-tier backend may
    // still be waking up, and the first search will retry the fetch.
    match backend.get_routes().await {
        Ok(routes) => println!("Loaded {} routes", routes.len()),
        Err(e) => eprintln!("Warning: could not preload routes: {e}"),
    }

    // Build app state and router
    let state = AppState::new(backend);
    let app = create_router(state, &server_config.static_dir);

    // Bind and serve
    let addr = server_config.bind_addr;
    println!("Bus fare estimator listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health             - Health check");
    println!("  GET  /api/status         - Backend liveness");
    println!("  GET  /api/routes/search  - Search routes");
    println!("  GET  /api/route_stops    - Stop listing for a route");
    println!("  POST /api/segments       - Trip segment count");
    println!("  POST /api/fare/by-type   - Fare by bus-type combination");
    println!("  POST /api/fare/by-line   - Fare by route combination");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
