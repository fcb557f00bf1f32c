use baseshop_web::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    baseshop_observability::init();

    let config = WebConfig::from_env()?;
    let app = baseshop_web::app::build_app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
