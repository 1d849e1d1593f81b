use boxhub_auth::GateConfig;

#[tokio::main]
async fn main() {
    boxhub_observability::init();

    let config = GateConfig::from_env();
    if config.dev_bypass {
        tracing::warn!("DEV_BYPASS_AUTH=1: requests without a session get the dev identity");
    }

    let app = boxhub_api::app::build_app(config);

    let addr = std::env::var("BOXHUB_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
