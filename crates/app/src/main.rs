use clap::Parser;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = settings::Args::parse();
    let settings = settings::Settings::new(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "txinsights={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = match engine::Engine::builder()
        .path(&settings.data.path)
        .build()
    {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to load transactions: {err}");
            return Err(err.into());
        }
    };

    let listener = match tokio::net::TcpListener::bind(settings.address()).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;

    Ok(())
}
