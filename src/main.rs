use commerce_cart_tools::commerce::AppState;
use commerce_cart_tools::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logging, filtered via RUST_LOG with a sensible default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize application state with the demo collaborators
    let state = Arc::new(AppState::demo());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address (PORT env var, default 8000)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
