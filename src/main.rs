mod config;
mod gate;
mod routes;
mod services;
mod state;
mod token;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let state = state::AppState::new(config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "quizgate listening");
    axum::serve(listener, app).await.expect("server failed");
}
