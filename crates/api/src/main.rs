use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = sloth_api::ApiConfig::from_env();
    sloth_observability::init(&config.log_level);

    if config.cloudflare.account_id.is_empty() {
        tracing::warn!("CLOUDFLARE_ACCOUNT_ID not set; serving placeholder quotes only");
    }

    let app = sloth_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        stage = %config.stage,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
