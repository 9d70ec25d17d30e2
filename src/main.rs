mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    tracing::info!(
        app = %config.app_name,
        version = %config.version,
        environment = config.environment.as_str(),
        "configuration loaded"
    );

    let port = config.port;
    let state = state::AppState::seeded(config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "skips api listening");
    axum::serve(listener, app).await.expect("server failed");
}
